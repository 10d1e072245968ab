//! Schema-less result records.
//!
//! The service decides which fields a calling convention or syscall entry
//! carries, so nothing here knows field names ahead of time except `arch`,
//! which is only consulted for filtering. Field order is whatever the
//! response used and is kept intact for column layout.

use serde_json::{Map, Value};

use crate::arch::Arch;

/// Name of the field syscall records use to say which architecture they describe.
pub const ARCH_FIELD: &str = "arch";

/// One result item: field name to JSON value, in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in response order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Field values rendered as table cells, in the same order as [`Record::columns`].
    pub fn cells(&self) -> Vec<String> {
        self.fields.values().map(cell_text).collect()
    }

    /// Returns true if the record's `arch` field names `arch`.
    ///
    /// Records without a string `arch` field never match.
    pub fn is_for(&self, arch: Arch) -> bool {
        self.get(ARCH_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|value| arch.matches(value))
    }
}

/// Render a JSON value the way it should appear in a table cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, booleans and nested values use their compact JSON text.
        other => other.to_string(),
    }
}

/// A response body: one record, or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSet {
    Single(Record),
    Many(Vec<Record>),
}

impl RecordSet {
    /// Interpret a decoded response document.
    ///
    /// Objects become [`RecordSet::Single`], arrays of objects become
    /// [`RecordSet::Many`]. Anything else is not a usable response.
    pub fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(fields) => Ok(RecordSet::Single(Record::new(fields))),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(fields) => Ok(Record::new(fields)),
                    other => Err(format!(
                        "array element {i} is {}, expected an object",
                        json_kind(&other)
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RecordSet::Many),
            other => Err(format!(
                "top-level value is {}, expected an object or an array",
                json_kind(&other)
            )),
        }
    }

    /// Narrow a multi-architecture result to the records for `arch`.
    ///
    /// Only the array shape is filtered; a single record is returned as-is
    /// whatever its `arch` field says. Order of surviving records is kept.
    pub fn filter_arch(self, arch: Arch) -> Self {
        match self {
            RecordSet::Single(record) => RecordSet::Single(record),
            RecordSet::Many(records) => {
                RecordSet::Many(records.into_iter().filter(|r| r.is_for(arch)).collect())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RecordSet::Single(_) => false,
            RecordSet::Many(records) => records.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::Single(_) => 1,
            RecordSet::Many(records) => records.len(),
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            RecordSet::Single(record) => std::slice::from_ref(record),
            RecordSet::Many(records) => records,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
