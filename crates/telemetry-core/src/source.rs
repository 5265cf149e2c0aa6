//! The [`FieldSource`] capability and its safe accessors.

use crate::{FieldValue, coerce};
use std::borrow::Cow;
use thiserror::Error;
use tracing::trace;

/// Field carrying the simulator's self-reported game name.
pub const GAME_NAME_FIELD: &str = "GameName";

/// Fields consulted, in order, to decide whether the game is running.
pub const GAME_RUNNING_FIELDS: [&str; 2] = ["GameRunning", "IsRunning"];

/// Fault raised by a telemetry source while reading.
///
/// These never escape the typed accessors; they are only observable through
/// [`FieldSource::field`] and the debug dump.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("telemetry source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("failed to read field '{field}': {reason}")]
    ReadFailed { field: String, reason: String },
}

impl FieldError {
    pub fn read_failed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldError::ReadFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Name-addressed, read-only access to one telemetry snapshot.
///
/// Implementors supply [`field`](FieldSource::field) and
/// [`field_names`](FieldSource::field_names); the typed `get_*` accessors are
/// provided and never fail: a missing field, a type mismatch and a source
/// fault all collapse to `None`.
pub trait FieldSource {
    /// Raw lookup. `Ok(None)` means the field does not exist on this snapshot.
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError>;

    /// Every field name discoverable on this snapshot.
    fn field_names(&self) -> Result<Vec<String>, FieldError>;

    /// The simulator's self-reported game name.
    fn game_name(&self) -> Option<String> {
        self.get_string(GAME_NAME_FIELD)
    }

    /// Whether the producing game is running.
    ///
    /// Snapshots that do not report it are assumed live, since they were
    /// produced by a running simulator.
    fn is_game_running(&self) -> bool {
        GAME_RUNNING_FIELDS
            .iter()
            .find_map(|name| self.get_bool(name))
            .unwrap_or(true)
    }

    /// Non-null raw value, with faults contained.
    fn get_raw(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        match self.field(name) {
            Ok(Some(value)) if !value.is_null() => Some(value),
            Ok(_) => None,
            Err(error) => {
                trace!(field = name, %error, "telemetry field read failed");
                None
            }
        }
    }

    fn get_float(&self, name: &str) -> Option<f64> {
        self.get_raw(name).and_then(|v| coerce::to_float(&v))
    }

    fn get_int(&self, name: &str) -> Option<i32> {
        self.get_raw(name).and_then(|v| coerce::to_int(&v))
    }

    fn get_bool(&self, name: &str) -> Option<bool> {
        self.get_raw(name).and_then(|v| coerce::to_bool(&v))
    }

    fn get_string(&self, name: &str) -> Option<String> {
        self.get_raw(name).and_then(|v| coerce::to_string(&v))
    }

    fn get_float_list(&self, name: &str) -> Option<Vec<f64>> {
        self.get_raw(name).and_then(|v| coerce::to_float_list(&v))
    }

    /// Duration in milliseconds, see [`coerce::to_duration_ms`].
    fn get_duration_ms(&self, name: &str) -> Option<f64> {
        self.get_raw(name).and_then(|v| coerce::to_duration_ms(&v))
    }

    /// First present string among `names`, in order.
    fn first_string(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.get_string(name))
    }
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError> {
        (**self).field(name)
    }

    fn field_names(&self) -> Result<Vec<String>, FieldError> {
        (**self).field_names()
    }

    fn game_name(&self) -> Option<String> {
        (**self).game_name()
    }

    fn is_game_running(&self) -> bool {
        (**self).is_game_running()
    }
}
