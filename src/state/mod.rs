// src/state/mod.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::file::snapshot::StoreSnapshot;
use crate::input::action::StoreAction;
use crate::model::{BusRecord, CompanyData, EmployeeRecord, OptimizedRecord, RouteDisplayMode};

pub mod handle;
pub mod observer;

pub use handle::StoreHandle;
pub use observer::{Observer, StateField, SubscriptionId};

use observer::ObserverRegistry;

// The full record of application state. Plain data: copies of it are what
// observers and snapshots see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataState {
    pub employee_data: Vec<EmployeeRecord>,
    pub bus_data: Vec<BusRecord>,
    pub company_data: CompanyData,
    pub side_panel_step: i64,
    pub optimized_data: Vec<OptimizedRecord>,
    pub selected_cluster: i64,
    pub is_dark_mode: bool,
    pub route_display_mode: RouteDisplayMode,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            employee_data: Vec::new(),
            bus_data: Vec::new(),
            company_data: CompanyData::new(),
            side_panel_step: 1,
            optimized_data: Vec::new(),
            selected_cluster: 0,
            is_dark_mode: false,
            route_display_mode: RouteDisplayMode::default(),
        }
    }
}

/// Session-scoped state container.
///
/// Every setter replaces its field wholesale without validation and then
/// notifies observers with the field that was written. Setters never fail.
#[derive(Debug)]
pub struct DataStore {
    session_id: Uuid,
    created_at: DateTime<Utc>,
    state: DataState,
    observers: ObserverRegistry,
}

impl DataStore {
    pub fn new() -> Self {
        let store = Self {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: DataState::default(),
            observers: ObserverRegistry::new(),
        };
        info!(session = %store.session_id, "created state store");
        store
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> &DataState {
        &self.state
    }

    // Read access

    pub fn employee_data(&self) -> &[EmployeeRecord] {
        &self.state.employee_data
    }

    pub fn bus_data(&self) -> &[BusRecord] {
        &self.state.bus_data
    }

    pub fn company_data(&self) -> &CompanyData {
        &self.state.company_data
    }

    pub fn side_panel_step(&self) -> i64 {
        self.state.side_panel_step
    }

    pub fn optimized_data(&self) -> &[OptimizedRecord] {
        &self.state.optimized_data
    }

    pub fn selected_cluster(&self) -> i64 {
        self.state.selected_cluster
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    pub fn route_display_mode(&self) -> RouteDisplayMode {
        self.state.route_display_mode
    }

    // Setters

    pub fn set_employee_data(&mut self, data: Vec<EmployeeRecord>) {
        self.state.employee_data = data;
        self.notify(StateField::EmployeeData);
    }

    pub fn set_bus_data(&mut self, data: Vec<BusRecord>) {
        self.state.bus_data = data;
        self.notify(StateField::BusData);
    }

    pub fn set_company_data(&mut self, data: CompanyData) {
        self.state.company_data = data;
        self.notify(StateField::CompanyData);
    }

    pub fn set_side_panel_step(&mut self, step: i64) {
        self.state.side_panel_step = step;
        self.notify(StateField::SidePanelStep);
    }

    pub fn set_optimized_data(&mut self, data: Vec<OptimizedRecord>) {
        self.state.optimized_data = data;
        self.notify(StateField::OptimizedData);
    }

    pub fn set_selected_cluster(&mut self, cluster: i64) {
        self.state.selected_cluster = cluster;
        self.notify(StateField::SelectedCluster);
    }

    pub fn set_is_dark_mode(&mut self, value: bool) {
        self.state.is_dark_mode = value;
        self.notify(StateField::IsDarkMode);
    }

    pub fn set_route_display_mode(&mut self, mode: RouteDisplayMode) {
        self.state.route_display_mode = mode;
        self.notify(StateField::RouteDisplayMode);
    }

    /// Applies one action through the matching setter.
    pub fn dispatch(&mut self, action: StoreAction) {
        match action {
            StoreAction::SetEmployeeData { value } => self.set_employee_data(value),
            StoreAction::SetBusData { value } => self.set_bus_data(value),
            StoreAction::SetCompanyData { value } => self.set_company_data(value),
            StoreAction::SetSidePanelStep { value } => self.set_side_panel_step(value),
            StoreAction::SetOptimizedData { value } => self.set_optimized_data(value),
            StoreAction::SetSelectedCluster { value } => self.set_selected_cluster(value),
            StoreAction::SetIsDarkMode { value } => self.set_is_dark_mode(value),
            StoreAction::SetRouteDisplayMode { value } => self.set_route_display_mode(value),
        }
    }

    // Observers

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(StateField, &DataState) + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    /// Puts every field back to its initial value, one setter call per field.
    pub fn reset(&mut self) {
        self.replace_all(DataState::default());
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(self.session_id, self.state.clone())
    }

    /// Replaces every field with the snapshot's values. The session id of
    /// this store is kept.
    pub fn restore(&mut self, snapshot: StoreSnapshot) {
        info!(
            session = %self.session_id,
            from_session = %snapshot.session_id,
            "restoring state from snapshot"
        );
        self.replace_all(snapshot.state);
    }

    fn replace_all(&mut self, state: DataState) {
        let DataState {
            employee_data,
            bus_data,
            company_data,
            side_panel_step,
            optimized_data,
            selected_cluster,
            is_dark_mode,
            route_display_mode,
        } = state;

        self.set_employee_data(employee_data);
        self.set_bus_data(bus_data);
        self.set_company_data(company_data);
        self.set_side_panel_step(side_panel_step);
        self.set_optimized_data(optimized_data);
        self.set_selected_cluster(selected_cluster);
        self.set_is_dark_mode(is_dark_mode);
        self.set_route_display_mode(route_display_mode);
    }

    fn notify(&mut self, field: StateField) {
        debug!(session = %self.session_id, field = %field, "state field replaced");
        self.observers.notify(field, &self.state);
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
