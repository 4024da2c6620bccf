//! Record and enum entry points, type-erased for registration.
//!
//! A mapped record exposes exactly two entry points to the engine:
//! [`MappedRecord::decode_from`] and [`MappedRecord::encode_to`]. The engine
//! recurses through these without knowing the record's field layout. For
//! transport through descriptors and registries the decode side is erased
//! behind [`RecordCodec`], resolved once at registration time.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BindError;

/// A type that maps itself to and from JSON data.
pub trait MappedRecord: Sized {
    /// Builds an instance from an already-parsed JSON value.
    fn decode_from(value: &Value) -> Result<Self, BindError>;

    /// Renders the instance back into a JSON value.
    fn encode_to(&self) -> Result<Value, BindError>;
}

/// Object-safe write half of [`MappedRecord`], for record instances that
/// travel through the encoder behind a reference.
pub trait EncodeRecord {
    fn encode_record(&self) -> Result<Value, BindError>;
}

impl<T: MappedRecord> EncodeRecord for T {
    fn encode_record(&self) -> Result<Value, BindError> {
        self.encode_to()
    }
}

/// A decoded instance, erased for transport through the resolution result.
pub type Instance = Box<dyn Any + Send>;

type DecodeFn = Arc<dyn Fn(&Value) -> Result<Instance, BindError> + Send + Sync>;

/// Type-erased decode entry point of a mapped record.
#[derive(Clone)]
pub struct RecordCodec {
    name: &'static str,
    decode: DecodeFn,
}

impl RecordCodec {
    pub fn of<T>() -> Self
    where
        T: MappedRecord + Any + Send,
    {
        Self {
            name: erased_name::<T>(),
            decode: Arc::new(|value| T::decode_from(value).map(|r| Box::new(r) as Instance)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decode(&self, value: &Value) -> Result<Instance, BindError> {
        (self.decode)(value)
    }
}

impl std::fmt::Debug for RecordCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCodec").field("name", &self.name).finish()
    }
}

/// An enumeration backed by raw JSON values.
pub trait BackedEnum: Sized {
    /// Looks up the variant for a raw value; `None` when nothing matches.
    fn from_raw(raw: &Value) -> Option<Self>;

    /// The raw value this variant serializes to.
    fn to_raw(&self) -> Value;
}

type EnumFromFn = Arc<dyn Fn(&Value) -> Option<Instance> + Send + Sync>;

/// Type-erased raw-value lookup for a backed enumeration.
#[derive(Clone)]
pub struct EnumCodec {
    name: &'static str,
    from_raw: EnumFromFn,
}

impl EnumCodec {
    pub fn of<T>() -> Self
    where
        T: BackedEnum + Any + Send,
    {
        Self {
            name: erased_name::<T>(),
            from_raw: Arc::new(|raw| T::from_raw(raw).map(|v| Box::new(v) as Instance)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Permissive lookup: an unmatched raw value yields `None`.
    pub fn lookup(&self, raw: &Value) -> Option<Instance> {
        (self.from_raw)(raw)
    }

    /// Strict lookup: an unmatched raw value is an error.
    pub fn lookup_strict(&self, raw: &Value) -> Result<Instance, BindError> {
        self.lookup(raw).ok_or_else(|| BindError::UnknownEnumValue {
            name: self.name.to_string(),
            raw: raw.clone(),
        })
    }
}

impl std::fmt::Debug for EnumCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumCodec").field("name", &self.name).finish()
    }
}

fn erased_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Renders a type's name without module paths, for mismatch reports.
pub(crate) fn display_type_name<T>() -> String {
    std::any::type_name::<T>()
        .split('<')
        .map(|part| part.rsplit("::").next().unwrap_or(part))
        .collect::<Vec<_>>()
        .join("<")
}
