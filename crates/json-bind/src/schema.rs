//! Record-level driver: ordered field bindings, decode and encode.

use std::sync::Arc;

use serde_json::{Map, Value};

use json_bind_path::{format_path, read_at, Step};

use crate::codec::MappedRecord;
use crate::declared::DeclaredType;
use crate::descriptor::JsonField;
use crate::error::BindError;
use crate::value::{json_kind, Resolved};

/// Emits one field of a record into the output tree, normally by building
/// a datum from the record and handing it to [`JsonField::project`].
pub type ProjectFn<R> =
    Arc<dyn Fn(&R, &JsonField, &mut Value) -> Result<(), BindError> + Send + Sync>;

/// Assigns a resolved value into a record under construction.
pub type AssignFn<R> = Arc<dyn Fn(&mut R, Resolved) -> Result<(), BindError> + Send + Sync>;

struct FieldBinding<R> {
    field: JsonField,
    declared: DeclaredType,
    project: ProjectFn<R>,
    assign: AssignFn<R>,
}

/// The ordered field bindings of one record type.
///
/// Built once at registration time and reused across calls; bindings hold
/// no per-call state, so a schema may be shared freely between threads.
pub struct RecordSchema<R> {
    fields: Vec<FieldBinding<R>>,
}

impl<R> RecordSchema<R> {
    pub fn builder() -> RecordSchemaBuilder<R> {
        RecordSchemaBuilder { fields: Vec::new() }
    }

    /// Encodes a record into a fresh JSON object, field by field.
    pub fn encode(&self, record: &R) -> Result<Value, BindError> {
        let mut output = Value::Object(Map::new());
        for binding in &self.fields {
            (binding.project)(record, &binding.field, &mut output)?;
        }
        Ok(output)
    }
}

impl<R: Default> RecordSchema<R> {
    /// Decodes a record from an already-parsed document.
    ///
    /// Fields are resolved in registration order; assignment failures are
    /// located at the failing field's path.
    pub fn decode(&self, document: &Value) -> Result<R, BindError> {
        let mut record = R::default();
        for binding in &self.fields {
            let resolved = binding.field.resolve(document, &binding.declared)?;
            (binding.assign)(&mut record, resolved)
                .map_err(|e| e.located(binding.field.path_steps()))?;
        }
        Ok(record)
    }
}

pub struct RecordSchemaBuilder<R> {
    fields: Vec<FieldBinding<R>>,
}

impl<R> RecordSchemaBuilder<R> {
    /// Adds a field binding. `name` is the record field's own name and
    /// becomes the JSON path when the descriptor does not set one.
    pub fn field<P, A>(
        mut self,
        name: &str,
        field: JsonField,
        declared: DeclaredType,
        project: P,
        assign: A,
    ) -> Self
    where
        P: Fn(&R, &JsonField, &mut Value) -> Result<(), BindError> + Send + Sync + 'static,
        A: Fn(&mut R, Resolved) -> Result<(), BindError> + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding {
            field: field.for_field(name),
            declared,
            project: Arc::new(project),
            assign: Arc::new(assign),
        });
        self
    }

    pub fn build(self) -> RecordSchema<R> {
        RecordSchema {
            fields: self.fields,
        }
    }
}

/// Decodes the value at `path` inside `document` as a record.
pub fn decode_at<T: MappedRecord>(document: &Value, path: &[Step]) -> Result<T, BindError> {
    match read_at(document, path) {
        Some(value) => T::decode_from(value),
        None => Err(BindError::MissingRequired {
            path: format_path(path),
        }),
    }
}

/// Decodes a JSON array element-wise, order preserved.
pub fn decode_list<T: MappedRecord>(value: &Value) -> Result<Vec<T>, BindError> {
    let Value::Array(items) = value else {
        return Err(BindError::TypeMismatch {
            expected: "sequence".into(),
            actual: json_kind(value).into(),
            path: String::new(),
        });
    };
    items.iter().map(T::decode_from).collect()
}
