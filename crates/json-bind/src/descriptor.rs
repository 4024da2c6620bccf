//! The declarative mapping unit for one record field.

use serde_json::Value;

use json_bind_path::{format_path, read_at, write_at, Path, PathError, Step};

use crate::codec::RecordCodec;
use crate::declared::DeclaredType;
use crate::error::BindError;
use crate::resolver::resolve_value;
use crate::value::{encode_datum, is_empty, Datum, Resolved};

/// Declares how one record field maps to a location in a JSON document.
///
/// A field with no explicit path is bound to the single-segment path equal
/// to its binding name at registration time. `required` and `omit_empty`
/// may both be set; the combination is contradictory in round-trip terms
/// (a document written with the field omitted cannot be read back) and is
/// left to the caller's judgement.
#[derive(Debug, Clone, Default)]
pub struct JsonField {
    path: Path,
    hint: Option<RecordCodec>,
    omit_empty: bool,
    required: bool,
}

impl JsonField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path; steps may mix object keys and array indexes.
    pub fn path<I>(mut self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Step>,
    {
        self.path = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Explicit override type for untyped, generic or union fields.
    pub fn hint(mut self, codec: RecordCodec) -> Self {
        self.hint = Some(codec);
        self
    }

    /// Skips the field on write when its value is empty.
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Fails the read when the field's path is absent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Fills the default path from the owning field's name.
    pub(crate) fn for_field(mut self, name: &str) -> Self {
        if self.path.is_empty() {
            self.path = vec![Step::Key(name.to_string())];
        }
        self
    }

    pub(crate) fn path_steps(&self) -> &[Step] {
        &self.path
    }

    /// Reads this field's value out of `document` and coerces it by
    /// `declared` and the field's hint.
    ///
    /// An absent path resolves to [`Resolved::Absent`] unless the field is
    /// required, in which case it is a [`BindError::MissingRequired`]
    /// naming the full path.
    pub fn resolve(&self, document: &Value, declared: &DeclaredType) -> Result<Resolved, BindError> {
        match read_at(document, &self.path) {
            Some(raw) => {
                resolve_value(raw, declared, self.hint.as_ref()).map_err(|e| e.located(&self.path))
            }
            None if self.required => Err(BindError::MissingRequired {
                path: format_path(&self.path),
            }),
            None => Ok(Resolved::Absent),
        }
    }

    /// Encodes `value` and writes it into `output` at this field's path.
    ///
    /// With `omit_empty`, an empty value leaves the output untouched; the
    /// key is not written at all, which is distinct from writing null. A
    /// write into an already-populated location is a
    /// [`BindError::PathConflict`].
    pub fn project(&self, output: &mut Value, value: Datum<'_>) -> Result<(), BindError> {
        if self.omit_empty && is_empty(&value) {
            return Ok(());
        }
        let encoded = encode_datum(value)?;
        write_at(output, &self.path, encoded).map_err(|err| match err {
            PathError::Conflict(path) | PathError::NotAContainer(path) => {
                BindError::PathConflict { path }
            }
        })
    }
}
