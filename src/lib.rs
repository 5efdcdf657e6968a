//! Session state container for the bus-route planner.
//!
//! `DataStore` holds the data the planner's views share: employees, buses,
//! company settings, the side panel step, optimized routes, the selected
//! cluster and display settings. Loaders and the optimizer write it through
//! setters or `StoreAction`s; views read it and subscribe to changes.

pub mod file;
pub mod input;
pub mod model;
pub mod settings;
pub mod state;

pub use file::{FileHandler, SnapshotFileHandler, StoreSnapshot};
pub use input::{Command, StoreAction};
pub use model::{BusRecord, CompanyData, EmployeeRecord, OptimizedRecord, RouteDisplayMode};
pub use settings::Settings;
pub use state::{DataState, DataStore, StateField, StoreHandle, SubscriptionId};
