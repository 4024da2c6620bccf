//! json-bind: declarative, bidirectional mapping between JSON documents
//! and typed records.
//!
//! Each record field declares, out of band, a logical path into the JSON
//! document, an optional explicit type hint, and policy flags
//! (`omit_empty`, `required`). A [`RecordSchema`] resolves those
//! declarations at (de)serialization time: on read it navigates the
//! document, coerces the raw value by its declared type and assigns it
//! into the record; on write it encodes each field value and builds the
//! nested output structure, omitting empty values where asked and refusing
//! to overwrite a location another field already populated.
//!
//! Nested records take part through the two entry points of
//! [`MappedRecord`]; the engine recurses through them one level of the
//! tree at a time without knowing any record's field layout.

pub mod codec;
pub mod declared;
pub mod descriptor;
pub mod error;
pub mod facade;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod value;

pub use codec::{BackedEnum, EncodeRecord, EnumCodec, Instance, MappedRecord, RecordCodec};
pub use declared::DeclaredType;
pub use descriptor::JsonField;
pub use error::BindError;
pub use facade::{
    from_json_str, from_json_str_at, list_from_json_str, list_from_json_str_at, to_json_string,
    to_json_string_pretty,
};
pub use registry::CodecRegistry;
pub use resolver::resolve_value;
pub use schema::{decode_at, decode_list, AssignFn, ProjectFn, RecordSchema, RecordSchemaBuilder};
pub use value::{encode_datum, is_empty, json_kind, Datum, Resolved};

pub use json_bind_path::{format_path, key_path, read_at, write_at, Path, PathError, Step};
