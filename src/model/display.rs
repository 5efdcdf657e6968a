// src/model/display.rs
use serde::{Serialize, Deserialize};

/// Whether the map shows the whole optimized route or a single segment of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteDisplayMode {
    pub show_full_route: bool,
    pub selected_segment: i64,
}

impl RouteDisplayMode {
    pub fn full_route() -> Self {
        Self {
            show_full_route: true,
            selected_segment: 0,
        }
    }

    pub fn segment(selected_segment: i64) -> Self {
        Self {
            show_full_route: false,
            selected_segment,
        }
    }
}

impl Default for RouteDisplayMode {
    fn default() -> Self {
        Self::full_route()
    }
}
