// src/input/action.rs
use serde::{Serialize, Deserialize};

use crate::model::{BusRecord, CompanyData, EmployeeRecord, OptimizedRecord, RouteDisplayMode};
use crate::state::StateField;

/// One setter call, in a form loaders and the optimizer can hand over as data.
///
/// Wire format:
///
/// ```json
/// { "type": "set_selected_cluster", "value": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreAction {
    SetEmployeeData { value: Vec<EmployeeRecord> },
    SetBusData { value: Vec<BusRecord> },
    SetCompanyData { value: CompanyData },
    SetSidePanelStep { value: i64 },
    SetOptimizedData { value: Vec<OptimizedRecord> },
    SetSelectedCluster { value: i64 },
    SetIsDarkMode { value: bool },
    SetRouteDisplayMode { value: RouteDisplayMode },
}

impl StoreAction {
    /// The field this action writes.
    pub fn field(&self) -> StateField {
        match self {
            StoreAction::SetEmployeeData { .. } => StateField::EmployeeData,
            StoreAction::SetBusData { .. } => StateField::BusData,
            StoreAction::SetCompanyData { .. } => StateField::CompanyData,
            StoreAction::SetSidePanelStep { .. } => StateField::SidePanelStep,
            StoreAction::SetOptimizedData { .. } => StateField::OptimizedData,
            StoreAction::SetSelectedCluster { .. } => StateField::SelectedCluster,
            StoreAction::SetIsDarkMode { .. } => StateField::IsDarkMode,
            StoreAction::SetRouteDisplayMode { .. } => StateField::RouteDisplayMode,
        }
    }
}
