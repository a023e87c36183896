//! Run descriptors.
//!
//! A run descriptor is whatever record the run selector hands over when the
//! user picks a run. Its shape belongs to the selector and the views that
//! consume it; the shell only stores and forwards it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque record describing one recorded model run.
///
/// Any JSON value is accepted. The default is the empty record `{}`, which is
/// what the shell holds before the first `run-changed` signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunDescriptor(Value);

impl RunDescriptor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The empty record `{}`.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// True for `{}` (and only for `{}`; `null` or `[]` are real payloads).
    pub fn is_empty_record(&self) -> bool {
        matches!(&self.0, Value::Object(m) if m.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Top-level string field, for collaborators that want a display label.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl Default for RunDescriptor {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for RunDescriptor {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for RunDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
