//! Type-directed coercion of raw JSON values.

use serde_json::Value;

use crate::codec::RecordCodec;
use crate::declared::DeclaredType;
use crate::error::BindError;
use crate::value::{json_kind, Resolved};

/// Applies the coercion strategy selected by `declared` and `hint` to a raw
/// value read out of a document.
///
/// Dispatch, in order:
/// 1. a union requires an explicit hint and decodes through it;
/// 2. a sequence (or keyed map) decodes element-wise when a hint or a
///    record/enum element type calls for it, and passes through otherwise;
/// 3. a record decodes through its own entry point, a recursive call into
///    the whole mapping system one level of the tree at a time;
/// 4. an enum looks its raw value up, permissively when nullable;
/// 5. scalars pass through unchanged, hint or no hint;
/// 6. an untyped field decodes through its hint when one is set.
///
/// Errors are raised with an empty path placeholder; the owning field
/// stamps its path on before surfacing them.
pub fn resolve_value(
    raw: &Value,
    declared: &DeclaredType,
    hint: Option<&RecordCodec>,
) -> Result<Resolved, BindError> {
    match declared {
        DeclaredType::Union(_) => match hint {
            Some(codec) => Ok(Resolved::Instance(codec.decode(raw)?)),
            None => Err(BindError::UnsupportedUnion {
                path: String::new(),
            }),
        },
        DeclaredType::Sequence(element) => resolve_sequence(raw, element, hint),
        DeclaredType::Map(values) => resolve_map(raw, values, hint),
        // a present null reads as the absent record, not as a decode of null
        DeclaredType::Record(_) if raw.is_null() => Ok(Resolved::Absent),
        DeclaredType::Record(codec) => Ok(Resolved::Instance(codec.decode(raw)?)),
        DeclaredType::Enum { codec, nullable } => {
            if *nullable {
                Ok(codec
                    .lookup(raw)
                    .map(Resolved::Instance)
                    .unwrap_or(Resolved::Absent))
            } else {
                codec.lookup_strict(raw).map(Resolved::Instance)
            }
        }
        DeclaredType::Scalar => Ok(Resolved::Raw(raw.clone())),
        DeclaredType::Unknown => match hint {
            Some(codec) => Ok(Resolved::Instance(codec.decode(raw)?)),
            None => Ok(Resolved::Raw(raw.clone())),
        },
    }
}

fn decodes_elementwise(element: &DeclaredType) -> bool {
    matches!(
        element,
        DeclaredType::Record(_) | DeclaredType::Enum { .. }
    )
}

fn resolve_element(
    item: &Value,
    element: &DeclaredType,
    hint: Option<&RecordCodec>,
) -> Result<Resolved, BindError> {
    match hint {
        Some(codec) => Ok(Resolved::Instance(codec.decode(item)?)),
        None => resolve_value(item, element, None),
    }
}

fn resolve_sequence(
    raw: &Value,
    element: &DeclaredType,
    hint: Option<&RecordCodec>,
) -> Result<Resolved, BindError> {
    if hint.is_none() && !decodes_elementwise(element) {
        return Ok(Resolved::Raw(raw.clone()));
    }
    let Value::Array(items) = raw else {
        return Err(BindError::TypeMismatch {
            expected: "sequence".into(),
            actual: json_kind(raw).into(),
            path: String::new(),
        });
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(resolve_element(item, element, hint)?);
    }
    Ok(Resolved::Seq(out))
}

fn resolve_map(
    raw: &Value,
    values: &DeclaredType,
    hint: Option<&RecordCodec>,
) -> Result<Resolved, BindError> {
    if hint.is_none() && !decodes_elementwise(values) {
        return Ok(Resolved::Raw(raw.clone()));
    }
    let Value::Object(entries) = raw else {
        return Err(BindError::TypeMismatch {
            expected: "map".into(),
            actual: json_kind(raw).into(),
            path: String::new(),
        });
    };
    let mut out = Vec::with_capacity(entries.len());
    for (key, item) in entries {
        out.push((key.clone(), resolve_element(item, values, hint)?));
    }
    Ok(Resolved::Map(out))
}
