//! Registration-time resolution of type-hint identifiers.

use std::any::Any;

use indexmap::IndexMap;

use crate::codec::{MappedRecord, RecordCodec};

/// Maps type identifiers to decode entry points.
///
/// Hints are resolved through the registry exactly once, while a record
/// schema is being built, never by name per call. An identifier nobody
/// registered resolves to no hint, which leaves the raw value untouched at
/// decode time.
#[derive(Debug, Default)]
pub struct CodecRegistry {
    records: IndexMap<String, RecordCodec>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record type under `name`.
    pub fn register<T>(&mut self, name: &str)
    where
        T: MappedRecord + Any + Send,
    {
        self.records.insert(name.to_string(), RecordCodec::of::<T>());
    }

    /// Resolves an identifier to its decode entry point.
    pub fn hint(&self, name: &str) -> Option<RecordCodec> {
        self.records.get(name).cloned()
    }

    /// Registered identifiers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}
