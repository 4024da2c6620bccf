//! Value domains at the typed boundary.
//!
//! [`Resolved`] is what a read produces before the record assigns it into a
//! concrete field; [`Datum`] is what a record hands over for writing before
//! it becomes JSON. [`is_empty`] is the omission policy and [`encode_datum`]
//! the write-side encoder.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::Any;

use crate::codec::{display_type_name, EncodeRecord, Instance};
use crate::error::BindError;

/// Returns the JSON kind of a value, for mismatch reports.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of reading one field out of a source document.
pub enum Resolved {
    /// The path was absent (non-required field), or a nullable enum lookup
    /// missed.
    Absent,
    /// Raw JSON carried through without coercion.
    Raw(Value),
    /// A decoded record or enum variant.
    Instance(Instance),
    /// An element-wise decoded sequence, order preserved.
    Seq(Vec<Resolved>),
    /// An element-wise decoded keyed map, entry order preserved.
    Map(Vec<(String, Resolved)>),
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolved::Absent => f.write_str("Absent"),
            Resolved::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
            Resolved::Instance(_) => f.debug_tuple("Instance").finish(),
            Resolved::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Resolved::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}

impl Resolved {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    fn describe(&self) -> &'static str {
        match self {
            Resolved::Absent => "absent",
            Resolved::Raw(value) => json_kind(value),
            Resolved::Instance(_) => "decoded instance",
            Resolved::Seq(_) => "decoded sequence",
            Resolved::Map(_) => "decoded map",
        }
    }

    /// Converts raw JSON into the field's concrete type.
    ///
    /// Absent converts as JSON null, so `Option<T>` fields read back as
    /// `None`. A value the target type rejects is re-signaled as
    /// [`BindError::TypeMismatch`]; the underlying serde error never
    /// surfaces.
    pub fn typed<T: DeserializeOwned>(self) -> Result<T, BindError> {
        let value = match self {
            Resolved::Absent => Value::Null,
            Resolved::Raw(value) => value,
            other => return Err(mismatch::<T>(other.describe())),
        };
        let actual = json_kind(&value);
        serde_json::from_value(value).map_err(|_| mismatch::<T>(actual))
    }

    /// Extracts a single decoded instance of `T`.
    pub fn instance<T: Any>(self) -> Result<T, BindError> {
        match self {
            Resolved::Instance(boxed) => downcast::<T>(boxed),
            other => Err(mismatch::<T>(other.describe())),
        }
    }

    /// Extracts a decoded record or enum variant; absent reads as `None`.
    pub fn record<T: Any>(self) -> Result<Option<T>, BindError> {
        match self {
            Resolved::Absent | Resolved::Raw(Value::Null) => Ok(None),
            Resolved::Instance(boxed) => downcast::<T>(boxed).map(Some),
            other => Err(mismatch::<T>(other.describe())),
        }
    }

    /// Extracts an element-wise decoded sequence; absent reads as `None`.
    pub fn records<T: Any>(self) -> Result<Option<Vec<T>>, BindError> {
        match self {
            Resolved::Absent | Resolved::Raw(Value::Null) => Ok(None),
            Resolved::Seq(items) => items
                .into_iter()
                .map(|item| item.instance::<T>())
                .collect::<Result<Vec<T>, _>>()
                .map(Some),
            other => Err(mismatch::<Vec<T>>(other.describe())),
        }
    }

    /// Extracts an element-wise decoded keyed map; absent reads as `None`.
    pub fn record_map<T: Any>(self) -> Result<Option<IndexMap<String, T>>, BindError> {
        match self {
            Resolved::Absent | Resolved::Raw(Value::Null) => Ok(None),
            Resolved::Map(entries) => {
                let mut out = IndexMap::with_capacity(entries.len());
                for (key, resolved) in entries {
                    out.insert(key, resolved.instance::<T>()?);
                }
                Ok(Some(out))
            }
            other => Err(mismatch::<IndexMap<String, T>>(other.describe())),
        }
    }
}

fn mismatch<T>(actual: &str) -> BindError {
    BindError::TypeMismatch {
        expected: display_type_name::<T>(),
        actual: actual.to_string(),
        path: String::new(),
    }
}

fn downcast<T: Any>(boxed: Instance) -> Result<T, BindError> {
    boxed
        .downcast::<T>()
        .map(|b| *b)
        .map_err(|_| mismatch::<T>("decoded instance"))
}

/// A field value on its way into the output tree.
pub enum Datum<'a> {
    /// The field's null/absent representation.
    Null,
    /// Plain JSON data, written through unchanged.
    Json(Value),
    /// A nested mapped record, encoded through its own entry point.
    Record(&'a dyn EncodeRecord),
    /// A simple enumeration's symbolic name.
    Symbol(&'static str),
    /// An ordered sequence, encoded element by element.
    Seq(Vec<Datum<'a>>),
    /// A keyed map, encoded entry by entry.
    Entries(Vec<(String, Datum<'a>)>),
}

impl<'a> Datum<'a> {
    /// Wraps any serializable value as plain JSON data.
    pub fn json<T: Serialize>(value: &T) -> Result<Datum<'static>, BindError> {
        Ok(Datum::Json(serde_json::to_value(value)?))
    }

    /// A record reference, or null when the field is unset.
    pub fn opt_record<T: EncodeRecord>(value: Option<&'a T>) -> Datum<'a> {
        match value {
            Some(record) => Datum::Record(record),
            None => Datum::Null,
        }
    }

    /// A sequence of record references.
    pub fn records<T: EncodeRecord>(items: &'a [T]) -> Datum<'a> {
        Datum::Seq(
            items
                .iter()
                .map(|r| Datum::Record(r as &dyn EncodeRecord))
                .collect(),
        )
    }

    /// Keyed record entries, order preserved.
    pub fn record_entries<T, I>(entries: I) -> Datum<'a>
    where
        T: EncodeRecord + 'a,
        I: IntoIterator<Item = (&'a String, &'a T)>,
    {
        Datum::Entries(
            entries
                .into_iter()
                .map(|(k, v)| (k.clone(), Datum::Record(v as &dyn EncodeRecord)))
                .collect(),
        )
    }
}

/// What counts as empty for omission purposes: null, the empty string, and
/// empty containers. `0` and `false` are not empty, nor is any record or
/// symbolic enum value.
pub fn is_empty(value: &Datum<'_>) -> bool {
    match value {
        Datum::Null => true,
        Datum::Json(Value::Null) => true,
        Datum::Json(Value::String(s)) => s.is_empty(),
        Datum::Json(Value::Array(items)) => items.is_empty(),
        Datum::Json(Value::Object(map)) => map.is_empty(),
        Datum::Seq(items) => items.is_empty(),
        Datum::Entries(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Converts a field value into a JSON value.
///
/// Plain data passes through unchanged; a mapped record is replaced by the
/// result of its own encode entry point (recursive); a simple enumeration
/// is replaced by its symbolic name; sequences and keyed entries encode
/// element by element.
pub fn encode_datum(value: Datum<'_>) -> Result<Value, BindError> {
    match value {
        Datum::Null => Ok(Value::Null),
        Datum::Json(v) => Ok(v),
        Datum::Record(record) => record.encode_record(),
        Datum::Symbol(name) => Ok(Value::String(name.to_string())),
        Datum::Seq(items) => items
            .into_iter()
            .map(encode_datum)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Datum::Entries(entries) => {
            let mut map = Map::new();
            for (key, datum) in entries {
                map.insert(key, encode_datum(datum)?);
            }
            Ok(Value::Object(map))
        }
    }
}
