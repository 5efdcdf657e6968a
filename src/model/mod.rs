// src/model/mod.rs
pub mod record;
pub mod display;

// Re-export commonly used types
pub use record::{EmployeeRecord, BusRecord, OptimizedRecord, CompanyData};
pub use display::RouteDisplayMode;
