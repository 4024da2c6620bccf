//! Path segments and cursor for nested JSON values.
//!
//! A [`Path`] is an ordered sequence of [`Step`]s (object keys and array
//! indexes) identifying one location inside a [`serde_json::Value`] tree.
//! [`read_at`] walks a path without mutating the tree; [`write_at`] builds
//! the missing intermediate containers and places a value at the final
//! step, refusing to overwrite a location that is already populated.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("conflicting value already present at {0}")]
    Conflict(String),
    #[error("cannot descend into non-container value at {0}")]
    NotAContainer(String),
}

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// An ordered sequence of steps.
pub type Path = Vec<Step>;

/// Builds a path of plain object keys.
pub fn key_path<I>(keys: I) -> Path
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    keys.into_iter().map(|k| Step::Key(k.into())).collect()
}

/// Renders a path as an absolute pointer string for display in errors.
///
/// Key steps escape `~` as `~0` and `/` as `~1`.
pub fn format_path(path: &[Step]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            Step::Key(k) if k.contains(['~', '/']) => {
                out.push_str(&k.replace('~', "~0").replace('/', "~1"));
            }
            Step::Key(k) => out.push_str(k),
            Step::Index(i) => {
                out.push_str(&i.to_string());
            }
        }
    }
    out
}

/// Walks `path` through `root`, returning the value at the final step.
///
/// Returns `None` the moment any step is absent at the current level: a key
/// not present in an object, an index out of bounds, or a step applied to a
/// value that is not the matching container kind. There is no partial-path
/// matching and no wildcard step.
pub fn read_at<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    let mut current = root;
    for step in path {
        current = match (step, current) {
            (Step::Key(k), Value::Object(map)) => map.get(k)?,
            (Step::Index(i), Value::Array(items)) => items.get(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Places `value` at `path` inside `root`, creating intermediate containers.
///
/// Every step before the last ensures a container exists at that step (an
/// empty object or an empty array, chosen by the step that follows) and
/// descends into it. The final step refuses to
/// overwrite: an object key that already exists, or an array slot holding a
/// non-null value, is a [`PathError::Conflict`]. Null array slots are
/// padding created by out-of-order index writes and may be filled.
pub fn write_at(root: &mut Value, path: &[Step], value: Value) -> Result<(), PathError> {
    let Some((last, route)) = path.split_last() else {
        return Err(PathError::Conflict(format_path(path)));
    };
    let mut current = root;
    for (i, step) in route.iter().enumerate() {
        current = descend(current, step, &path[i + 1], path)?;
    }
    place(current, last, value, path)
}

fn empty_container(next: &Step) -> Value {
    match next {
        Step::Key(_) => Value::Object(Map::new()),
        Step::Index(_) => Value::Array(Vec::new()),
    }
}

fn descend<'a>(
    current: &'a mut Value,
    step: &Step,
    next: &Step,
    full: &[Step],
) -> Result<&'a mut Value, PathError> {
    let slot = match (step, current) {
        (Step::Key(k), Value::Object(map)) => map
            .entry(k.clone())
            .or_insert_with(|| empty_container(next)),
        (Step::Index(i), Value::Array(items)) => {
            if *i >= items.len() {
                items.resize(*i + 1, Value::Null);
            }
            let slot = &mut items[*i];
            if slot.is_null() {
                *slot = empty_container(next);
            }
            slot
        }
        _ => return Err(PathError::NotAContainer(format_path(full))),
    };
    if slot.is_object() || slot.is_array() {
        Ok(slot)
    } else {
        Err(PathError::NotAContainer(format_path(full)))
    }
}

fn place(target: &mut Value, step: &Step, value: Value, full: &[Step]) -> Result<(), PathError> {
    match (step, target) {
        (Step::Key(k), Value::Object(map)) => {
            if map.contains_key(k) {
                return Err(PathError::Conflict(format_path(full)));
            }
            map.insert(k.clone(), value);
            Ok(())
        }
        (Step::Index(i), Value::Array(items)) => {
            if *i < items.len() && !items[*i].is_null() {
                return Err(PathError::Conflict(format_path(full)));
            }
            if *i >= items.len() {
                items.resize(*i + 1, Value::Null);
            }
            items[*i] = value;
            Ok(())
        }
        _ => Err(PathError::NotAContainer(format_path(full))),
    }
}
