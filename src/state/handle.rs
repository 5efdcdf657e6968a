// src/state/handle.rs
use std::cell::RefCell;
use std::rc::Rc;

use super::{DataState, DataStore};
use crate::input::action::StoreAction;

/// Cloneable reference to one session's store.
///
/// All clones point at the same `DataStore`, so a write through any clone is
/// visible through every other one. Single-threaded only. Observers run while
/// the store is borrowed and must not call back into the handle.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Rc<RefCell<DataStore>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        Self::from_store(DataStore::new())
    }

    pub fn from_store(store: DataStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    pub fn dispatch(&self, action: StoreAction) {
        self.inner.borrow_mut().dispatch(action);
    }

    pub fn read<R>(&self, f: impl FnOnce(&DataStore) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut DataStore) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Copy of the current state.
    pub fn state(&self) -> DataState {
        self.inner.borrow().state().clone()
    }

    pub fn same_store(&self, other: &StoreHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
