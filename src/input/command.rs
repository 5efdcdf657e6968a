// src/input/command.rs
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::file::FileHandler;
use crate::file::snapshot::SnapshotFileHandler;
use crate::input::action::StoreAction;
use crate::model::RouteDisplayMode;
use crate::state::DataStore;

pub trait Command {
    fn execute(&self, store: &mut DataStore) -> Result<()>;
}

pub struct DispatchCommand(pub StoreAction);
impl Command for DispatchCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.dispatch(self.0.clone());
        Ok(())
    }
}

// Step navigation is not bounded; the side panel decides what a step means.
// Stepping past the ends of the i64 range saturates instead of wrapping.
pub struct NextStepCommand;
impl Command for NextStepCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.set_side_panel_step(store.side_panel_step().saturating_add(1));
        Ok(())
    }
}

pub struct PrevStepCommand;
impl Command for PrevStepCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.set_side_panel_step(store.side_panel_step().saturating_sub(1));
        Ok(())
    }
}

pub struct ToggleDarkModeCommand;
impl Command for ToggleDarkModeCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.set_is_dark_mode(!store.is_dark_mode());
        Ok(())
    }
}

pub struct ShowSegmentCommand(pub i64);
impl Command for ShowSegmentCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.set_route_display_mode(RouteDisplayMode::segment(self.0));
        Ok(())
    }
}

pub struct ShowFullRouteCommand;
impl Command for ShowFullRouteCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.set_route_display_mode(RouteDisplayMode::full_route());
        Ok(())
    }
}

pub struct ResetCommand;
impl Command for ResetCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        store.reset();
        Ok(())
    }
}

pub struct LoadSnapshotCommand(pub PathBuf);
impl Command for LoadSnapshotCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        let snapshot = SnapshotFileHandler::new().load(&self.0)?;
        store.restore(snapshot);
        Ok(())
    }
}

pub struct SaveSnapshotCommand(pub PathBuf);
impl Command for SaveSnapshotCommand {
    fn execute(&self, store: &mut DataStore) -> Result<()> {
        SnapshotFileHandler::new().save(&store.snapshot(), &self.0)?;
        info!(path = %self.0.display(), "saved state snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::model::OptimizedRecord;

    #[test]
    fn step_commands_move_without_bounds() {
        let mut store = DataStore::new();
        NextStepCommand.execute(&mut store).unwrap();
        assert_eq!(store.side_panel_step(), 2);

        PrevStepCommand.execute(&mut store).unwrap();
        PrevStepCommand.execute(&mut store).unwrap();
        PrevStepCommand.execute(&mut store).unwrap();
        assert_eq!(store.side_panel_step(), -1);
    }

    #[test]
    fn step_commands_saturate_at_integer_limits() {
        let mut store = DataStore::new();
        store.set_side_panel_step(i64::MAX);
        NextStepCommand.execute(&mut store).unwrap();
        assert_eq!(store.side_panel_step(), i64::MAX);

        store.set_side_panel_step(i64::MIN);
        PrevStepCommand.execute(&mut store).unwrap();
        assert_eq!(store.side_panel_step(), i64::MIN);

        NextStepCommand.execute(&mut store).unwrap();
        assert_eq!(store.side_panel_step(), i64::MIN + 1);
    }

    #[test]
    fn toggle_flips_dark_mode() {
        let mut store = DataStore::new();
        ToggleDarkModeCommand.execute(&mut store).unwrap();
        assert!(store.is_dark_mode());
        ToggleDarkModeCommand.execute(&mut store).unwrap();
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn segment_commands_replace_display_mode() {
        let mut store = DataStore::new();
        ShowSegmentCommand(5).execute(&mut store).unwrap();
        assert_eq!(store.route_display_mode(), RouteDisplayMode::segment(5));

        ShowFullRouteCommand.execute(&mut store).unwrap();
        assert_eq!(store.route_display_mode(), RouteDisplayMode::full_route());
    }

    #[test]
    fn boxed_commands_run_in_order() {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(DispatchCommand(StoreAction::SetOptimizedData {
                value: vec![OptimizedRecord::from(json!({"cluster": 1}))],
            })),
            Box::new(DispatchCommand(StoreAction::SetSelectedCluster { value: 1 })),
            Box::new(NextStepCommand),
            Box::new(ResetCommand),
            Box::new(DispatchCommand(StoreAction::SetSelectedCluster { value: 4 })),
        ];

        let mut store = DataStore::new();
        for command in &commands {
            command.execute(&mut store).unwrap();
        }

        assert!(store.optimized_data().is_empty());
        assert_eq!(store.side_panel_step(), 1);
        assert_eq!(store.selected_cluster(), 4);
    }

    #[test]
    fn snapshot_commands_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.ron");

        let mut source = DataStore::new();
        source.set_selected_cluster(3);
        source.set_side_panel_step(2);
        SaveSnapshotCommand(path.clone()).execute(&mut source).unwrap();

        let mut target = DataStore::new();
        LoadSnapshotCommand(path).execute(&mut target).unwrap();
        assert_eq!(target.state(), source.state());
    }

    #[test]
    fn loading_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DataStore::new();
        let result = LoadSnapshotCommand(dir.path().join("absent.ron")).execute(&mut store);
        assert!(result.is_err());
        assert_eq!(store.state(), &crate::state::DataState::default());
    }
}
