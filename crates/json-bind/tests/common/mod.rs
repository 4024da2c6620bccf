//! Shared fixture records for the integration matrices.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde_json::Value;

use json_bind::{
    BackedEnum, BindError, CodecRegistry, Datum, DeclaredType, EnumCodec, JsonField, MappedRecord,
    RecordCodec, RecordSchema, Step,
};

// ── Schedule ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

fn schedule_schema() -> &'static RecordSchema<Schedule> {
    static SCHEMA: OnceLock<RecordSchema<Schedule>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "start",
                JsonField::new().path(["schedule_start"]),
                DeclaredType::Scalar,
                |r: &Schedule, f, out| f.project(out, Datum::json(&r.start)?),
                |r, v| {
                    r.start = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "end",
                JsonField::new().path(["schedule_end"]),
                DeclaredType::Scalar,
                |r: &Schedule, f, out| f.project(out, Datum::json(&r.end)?),
                |r, v| {
                    r.end = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Schedule {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        schedule_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        schedule_schema().encode(self)
    }
}

// ── Brief: the two-field example record ───────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct Brief {
    pub id: Option<String>,
    pub name: Option<String>,
}

fn brief_schema() -> &'static RecordSchema<Brief> {
    static SCHEMA: OnceLock<RecordSchema<Brief>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "id",
                JsonField::new().path(["identifier"]),
                DeclaredType::Scalar,
                |r: &Brief, f, out| f.project(out, Datum::json(&r.id)?),
                |r, v| {
                    r.id = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "name",
                JsonField::new().path(["category_name"]),
                DeclaredType::Scalar,
                |r: &Brief, f, out| f.project(out, Datum::json(&r.name)?),
                |r, v| {
                    r.name = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Brief {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        brief_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        brief_schema().encode(self)
    }
}

// ── Category: the full-feature record ─────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct Category {
    pub id: Option<String>,
    pub name: Option<String>,
    pub data_name: Option<String>,
    pub schedule: Option<Schedule>,
    pub schedules: Option<Vec<Schedule>>,
    pub qualities: Option<Vec<String>>,
    pub counts: BTreeMap<String, i64>,
    pub unnamed: Option<String>,
    pub untyped_schedule: Option<Schedule>,
}

fn category_schema() -> &'static RecordSchema<Category> {
    static SCHEMA: OnceLock<RecordSchema<Category>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let mut registry = CodecRegistry::new();
        registry.register::<Schedule>("Schedule");
        let schedule_hint = registry.hint("Schedule").expect("Schedule is registered");

        RecordSchema::builder()
            .field(
                "id",
                JsonField::new().path(["identifier"]),
                DeclaredType::Scalar,
                |r: &Category, f, out| f.project(out, Datum::json(&r.id)?),
                |r, v| {
                    r.id = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "name",
                JsonField::new().path(["category_name"]),
                DeclaredType::Scalar,
                |r: &Category, f, out| f.project(out, Datum::json(&r.name)?),
                |r, v| {
                    r.name = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "data_name",
                JsonField::new().path(["data", "name"]),
                DeclaredType::Scalar,
                |r: &Category, f, out| f.project(out, Datum::json(&r.data_name)?),
                |r, v| {
                    r.data_name = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "schedule",
                JsonField::new().path(["next_schedule"]),
                DeclaredType::Record(RecordCodec::of::<Schedule>()),
                |r: &Category, f, out| f.project(out, Datum::opt_record(r.schedule.as_ref())),
                |r, v| {
                    r.schedule = v.record()?;
                    Ok(())
                },
            )
            .field(
                "schedules",
                JsonField::new()
                    .path(["upcoming_schedules"])
                    .hint(schedule_hint.clone())
                    .omit_empty(),
                DeclaredType::sequence_of(DeclaredType::Unknown),
                |r: &Category, f, out| {
                    let value = match &r.schedules {
                        Some(items) => Datum::records(items),
                        None => Datum::Null,
                    };
                    f.project(out, value)
                },
                |r, v| {
                    r.schedules = v.records()?;
                    Ok(())
                },
            )
            .field(
                "qualities",
                JsonField::new().omit_empty(),
                DeclaredType::sequence_of(DeclaredType::Scalar),
                |r: &Category, f, out| f.project(out, Datum::json(&r.qualities)?),
                |r, v| {
                    r.qualities = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "counts",
                JsonField::new().omit_empty(),
                DeclaredType::map_of(DeclaredType::Scalar),
                |r: &Category, f, out| f.project(out, Datum::json(&r.counts)?),
                |r, v| {
                    r.counts = v.typed::<Option<BTreeMap<String, i64>>>()?.unwrap_or_default();
                    Ok(())
                },
            )
            .field(
                "unnamed",
                JsonField::new(),
                DeclaredType::Scalar,
                |r: &Category, f, out| f.project(out, Datum::json(&r.unnamed)?),
                |r, v| {
                    r.unnamed = v.typed()?;
                    Ok(())
                },
            )
            .field(
                "untyped_schedule",
                JsonField::new().hint(schedule_hint),
                DeclaredType::Unknown,
                |r: &Category, f, out| f.project(out, Datum::opt_record(r.untyped_schedule.as_ref())),
                |r, v| {
                    r.untyped_schedule = v.record()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Category {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        category_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        category_schema().encode(self)
    }
}

// ── Weekend: keyed map of records ─────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct Weekend {
    pub weekend: Option<IndexMap<String, Schedule>>,
}

fn weekend_schema() -> &'static RecordSchema<Weekend> {
    static SCHEMA: OnceLock<RecordSchema<Weekend>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "weekend",
                JsonField::new(),
                DeclaredType::map_of(DeclaredType::Record(RecordCodec::of::<Schedule>())),
                |r: &Weekend, f, out| {
                    let value = match &r.weekend {
                        Some(entries) => Datum::record_entries(entries),
                        None => Datum::Null,
                    };
                    f.project(out, value)
                },
                |r, v| {
                    r.weekend = v.record_map()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Weekend {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        weekend_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        weekend_schema().encode(self)
    }
}

// ── Token: required field ─────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct Token {
    pub key: Option<String>,
}

fn token_schema() -> &'static RecordSchema<Token> {
    static SCHEMA: OnceLock<RecordSchema<Token>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "key",
                JsonField::new().required(),
                DeclaredType::Scalar,
                |r: &Token, f, out| f.project(out, Datum::json(&r.key)?),
                |r, v| {
                    r.key = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Token {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        token_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        token_schema().encode(self)
    }
}

// ── Contractor and the union records ──────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct Contractor {
    pub name: Option<String>,
}

fn contractor_schema() -> &'static RecordSchema<Contractor> {
    static SCHEMA: OnceLock<RecordSchema<Contractor>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "name",
                JsonField::new(),
                DeclaredType::Scalar,
                |r: &Contractor, f, out| f.project(out, Datum::json(&r.name)?),
                |r, v| {
                    r.name = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Contractor {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        contractor_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        contractor_schema().encode(self)
    }
}

/// `size` is a string-or-integer union with no hint; decoding any present
/// value must fail.
#[derive(Debug, Default, PartialEq)]
pub struct Garment {
    pub size: Option<Value>,
}

fn garment_schema() -> &'static RecordSchema<Garment> {
    static SCHEMA: OnceLock<RecordSchema<Garment>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "size",
                JsonField::new(),
                DeclaredType::Union(vec![DeclaredType::Scalar, DeclaredType::Scalar]),
                |r: &Garment, f, out| f.project(out, Datum::json(&r.size)?),
                |r, v| {
                    r.size = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Garment {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        garment_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        garment_schema().encode(self)
    }
}

/// `member` is a union disambiguated by an explicit hint.
#[derive(Debug, Default, PartialEq)]
pub struct Crew {
    pub member: Option<Contractor>,
}

fn crew_schema() -> &'static RecordSchema<Crew> {
    static SCHEMA: OnceLock<RecordSchema<Crew>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "member",
                JsonField::new().hint(RecordCodec::of::<Contractor>()),
                DeclaredType::Union(vec![
                    DeclaredType::Record(RecordCodec::of::<Contractor>()),
                    DeclaredType::Scalar,
                ]),
                |r: &Crew, f, out| f.project(out, Datum::opt_record(r.member.as_ref())),
                |r, v| {
                    r.member = v.record()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Crew {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        crew_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        crew_schema().encode(self)
    }
}

// ── MenuList: integer path segments ───────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct MenuList {
    pub main_menu_name: Option<String>,
}

fn menu_list_schema() -> &'static RecordSchema<MenuList> {
    static SCHEMA: OnceLock<RecordSchema<MenuList>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "main_menu_name",
                JsonField::new().path(vec![
                    Step::from("menus"),
                    Step::from(0usize),
                    Step::from("name"),
                ]),
                DeclaredType::Scalar,
                |r: &MenuList, f, out| f.project(out, Datum::json(&r.main_menu_name)?),
                |r, v| {
                    r.main_menu_name = v.typed()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for MenuList {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        menu_list_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        menu_list_schema().encode(self)
    }
}

// ── BigInt and Stats: a record decoding from a scalar ─────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BigInt {
    pub digits: String,
}

impl MappedRecord for BigInt {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        match value {
            Value::String(s) => Ok(BigInt { digits: s.clone() }),
            Value::Number(n) => Ok(BigInt {
                digits: n.to_string(),
            }),
            other => Err(BindError::TypeMismatch {
                expected: "BigInt".into(),
                actual: json_bind::json_kind(other).into(),
                path: String::new(),
            }),
        }
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        Ok(Value::String(self.digits.clone()))
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Stats {
    pub count: Option<BigInt>,
}

fn stats_schema() -> &'static RecordSchema<Stats> {
    static SCHEMA: OnceLock<RecordSchema<Stats>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "count",
                JsonField::new(),
                DeclaredType::Record(RecordCodec::of::<BigInt>()),
                |r: &Stats, f, out| f.project(out, Datum::opt_record(r.count.as_ref())),
                |r, v| {
                    r.count = v.record()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Stats {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        stats_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        stats_schema().encode(self)
    }
}

// ── Ticket: strict and nullable backed enums ──────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Open,
    Closed,
}

impl BackedEnum for Status {
    fn from_raw(raw: &Value) -> Option<Self> {
        match raw.as_str()? {
            "open" => Some(Status::Open),
            "closed" => Some(Status::Closed),
            _ => None,
        }
    }

    fn to_raw(&self) -> Value {
        match self {
            Status::Open => Value::String("open".into()),
            Status::Closed => Value::String("closed".into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Priority {
    Low,
    High,
}

impl BackedEnum for Priority {
    fn from_raw(raw: &Value) -> Option<Self> {
        match raw.as_i64()? {
            1 => Some(Priority::Low),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    fn to_raw(&self) -> Value {
        match self {
            Priority::Low => Value::from(1),
            Priority::High => Value::from(2),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Ticket {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

fn ticket_schema() -> &'static RecordSchema<Ticket> {
    static SCHEMA: OnceLock<RecordSchema<Ticket>> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        RecordSchema::builder()
            .field(
                "status",
                JsonField::new(),
                DeclaredType::Enum {
                    codec: EnumCodec::of::<Status>(),
                    nullable: false,
                },
                |r: &Ticket, f, out| {
                    let value = match &r.status {
                        Some(status) => Datum::Json(status.to_raw()),
                        None => Datum::Null,
                    };
                    f.project(out, value)
                },
                |r, v| {
                    r.status = v.record()?;
                    Ok(())
                },
            )
            .field(
                "priority",
                JsonField::new(),
                DeclaredType::Enum {
                    codec: EnumCodec::of::<Priority>(),
                    nullable: true,
                },
                |r: &Ticket, f, out| {
                    let value = match &r.priority {
                        Some(priority) => Datum::Json(priority.to_raw()),
                        None => Datum::Null,
                    };
                    f.project(out, value)
                },
                |r, v| {
                    r.priority = v.record()?;
                    Ok(())
                },
            )
            .build()
    })
}

impl MappedRecord for Ticket {
    fn decode_from(value: &Value) -> Result<Self, BindError> {
        ticket_schema().decode(value)
    }

    fn encode_to(&self) -> Result<Value, BindError> {
        ticket_schema().encode(self)
    }
}
