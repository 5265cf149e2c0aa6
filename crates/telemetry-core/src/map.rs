//! In-memory [`FieldSource`] backed by an ordered map.

use crate::{FieldError, FieldSource, FieldValue};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// A snapshot held entirely in memory.
///
/// Fields registered with [`with_fault`](MapSnapshot::with_fault) fail on
/// read, emulating a source that throws while a property is evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSnapshot {
    fields: BTreeMap<String, FieldValue>,
    faults: BTreeSet<String>,
    unavailable: Option<String>,
}

impl MapSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Mark `name` as a field whose read fails.
    pub fn with_fault(mut self, name: impl Into<String>) -> Self {
        self.faults.insert(name.into());
        self
    }

    /// Make every operation on the snapshot fail.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn check_available(&self) -> Result<(), FieldError> {
        match &self.unavailable {
            Some(reason) => Err(FieldError::SourceUnavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl FieldSource for MapSnapshot {
    fn field(&self, name: &str) -> Result<Option<Cow<'_, FieldValue>>, FieldError> {
        self.check_available()?;
        if self.faults.contains(name) {
            return Err(FieldError::read_failed(name, "property getter faulted"));
        }
        Ok(self.fields.get(name).map(Cow::Borrowed))
    }

    fn field_names(&self) -> Result<Vec<String>, FieldError> {
        self.check_available()?;
        let mut names: BTreeSet<&String> = self.fields.keys().collect();
        names.extend(self.faults.iter());
        Ok(names.into_iter().cloned().collect())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for MapSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = MapSnapshot::new();
        for (name, value) in iter {
            snapshot.insert(name, value);
        }
        snapshot
    }
}
