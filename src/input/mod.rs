// src/input/mod.rs
pub mod action;
pub mod command;

pub use action::StoreAction;
pub use command::Command;
