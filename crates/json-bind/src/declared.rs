//! Caller-supplied type classification for record fields.

use crate::codec::{EnumCodec, RecordCodec};

/// Static type information for one field, supplied by the registration
/// layer when the field binding is declared.
///
/// The engine performs no type introspection of its own; every coercion
/// decision is driven by this descriptor plus the field's optional hint.
#[derive(Debug, Clone, Default)]
pub enum DeclaredType {
    /// No usable static type (an untyped or fully generic field).
    #[default]
    Unknown,
    /// A plain scalar; values pass through uncoerced.
    Scalar,
    /// An ordered sequence with the given element type.
    Sequence(Box<DeclaredType>),
    /// A keyed map with values of the given type.
    Map(Box<DeclaredType>),
    /// A nested mapped record, decoded through its own entry point.
    Record(RecordCodec),
    /// An enumeration backed by raw values. Nullable enums look values up
    /// permissively; non-nullable enums fail on an unmatched raw value.
    Enum { codec: EnumCodec, nullable: bool },
    /// A union of several possible types; decoding requires an explicit
    /// hint on the field.
    Union(Vec<DeclaredType>),
}

impl DeclaredType {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Scalar => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Enum { .. } => "enum",
            Self::Union(_) => "union",
        }
    }

    pub fn sequence_of(element: DeclaredType) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn map_of(value: DeclaredType) -> Self {
        Self::Map(Box::new(value))
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}
