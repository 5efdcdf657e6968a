// src/state/observer.rs
use std::fmt;
use serde::{Serialize, Deserialize};

use super::DataState;

/// Names one field of the state record. Passed to observers after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateField {
    EmployeeData,
    BusData,
    CompanyData,
    SidePanelStep,
    OptimizedData,
    SelectedCluster,
    IsDarkMode,
    RouteDisplayMode,
}

impl StateField {
    pub const ALL: [StateField; 8] = [
        StateField::EmployeeData,
        StateField::BusData,
        StateField::CompanyData,
        StateField::SidePanelStep,
        StateField::OptimizedData,
        StateField::SelectedCluster,
        StateField::IsDarkMode,
        StateField::RouteDisplayMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateField::EmployeeData => "employee_data",
            StateField::BusData => "bus_data",
            StateField::CompanyData => "company_data",
            StateField::SidePanelStep => "side_panel_step",
            StateField::OptimizedData => "optimized_data",
            StateField::SelectedCluster => "selected_cluster",
            StateField::IsDarkMode => "is_dark_mode",
            StateField::RouteDisplayMode => "route_display_mode",
        }
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by `DataStore::subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Observer = Box<dyn FnMut(StateField, &DataState)>;

// Observers run in subscription order, synchronously, on the writing thread.
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn add(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, field: StateField, state: &DataState) {
        for (_, observer) in self.observers.iter_mut() {
            observer(field, state);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
