// src/model/record.rs
use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

// Payload shapes are owned by the loaders and the optimizer, so records stay
// opaque here and are only distinguished by entity.

/// Company settings keyed by name (depot location, shift times, ...).
pub type CompanyData = Map<String, Value>;

/// One employee as delivered by the data loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EmployeeRecord(pub Value);

impl EmployeeRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Looks up a top-level key, `None` for non-object payloads.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }
}

impl From<Value> for EmployeeRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// One bus of the fleet as delivered by the data loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BusRecord(pub Value);

impl BusRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }
}

impl From<Value> for BusRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// One optimized route (or cluster result) produced by the optimizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct OptimizedRecord(pub Value);

impl OptimizedRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }
}

impl From<Value> for OptimizedRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
