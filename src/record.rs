// src/record.rs
//
// One symbol's scraped statistics for one day, and its single-line JSON form:
//
//   {"ticker":"GM","date_accessed":"2021-01-04","market_cap_intraday":62920000000.0,...}
//
// `ticker` and `date_accessed` sit at the same level as the fields. A page row
// whose label canonicalizes to one of those two keys is dropped rather than
// allowed to overwrite them.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Map;
use tracing::warn;

use crate::value::Value;

pub const SYMBOL_KEY: &str = "ticker";
pub const DATE_KEY: &str = "date_accessed";

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    symbol: String,
    date_accessed: Option<NaiveDate>,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn builder(symbol: impl Into<String>) -> RecordBuilder {
        RecordBuilder { symbol: symbol.into(), fields: Vec::new() }
    }

    pub fn symbol(&self) -> &str { &self.symbol }
    pub fn date_accessed(&self) -> Option<NaiveDate> { self.date_accessed }
    pub fn fields(&self) -> &[(String, Value)] { &self.fields }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Parse one store line. The error is a human-readable reason; the store
    /// adds path and line number.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let obj: Map<String, serde_json::Value> =
            serde_json::from_str(line).map_err(|e| e.to_string())?;

        let mut symbol = None;
        let mut date_accessed = None;
        let mut fields = Vec::with_capacity(obj.len());

        for (key, val) in obj {
            match key.as_str() {
                SYMBOL_KEY => match val {
                    serde_json::Value::String(s) => symbol = Some(s),
                    other => return Err(format!("`{SYMBOL_KEY}` is not a string: {other}")),
                },
                DATE_KEY => date_accessed = Some(decode_date(&val)?),
                _ => {
                    let value = decode_value(&key, val)?;
                    fields.push((key, value));
                }
            }
        }

        let symbol = symbol.ok_or_else(|| format!("missing `{SYMBOL_KEY}`"))?;
        Ok(Record { symbol, date_accessed, fields })
    }
}

fn decode_date(val: &serde_json::Value) -> Result<NaiveDate, String> {
    val.as_str()
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FMT).ok())
        .ok_or_else(|| format!("`{DATE_KEY}` is not a YYYY-MM-DD date: {val}"))
}

fn decode_value(key: &str, val: serde_json::Value) -> Result<Value, String> {
    match val {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| format!("`{key}`: number out of range")),
        // canonical text never contains '-', so anything that parses as a
        // date was written as one
        serde_json::Value::String(s) => Ok(match NaiveDate::parse_from_str(&s, DATE_FMT) {
            Ok(d) => Value::Date(d),
            Err(_) => Value::Text(s),
        }),
        other => Err(format!("`{key}`: unexpected value {other}")),
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = 1 + usize::from(self.date_accessed.is_some());
        let mut map = serializer.serialize_map(Some(self.fields.len() + extra))?;
        map.serialize_entry(SYMBOL_KEY, &self.symbol)?;
        if let Some(date) = self.date_accessed {
            map.serialize_entry(DATE_KEY, &date.format(DATE_FMT).to_string())?;
        }
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Collects a symbol's fields, then finalizes exactly once.
#[derive(Debug)]
pub struct RecordBuilder {
    symbol: String,
    fields: Vec<(String, Value)>,
}

impl RecordBuilder {
    /// A repeated name keeps its first position and takes the newest value.
    pub fn field(mut self, name: String, value: Value) -> Self {
        if name == SYMBOL_KEY || name == DATE_KEY {
            warn!("Dropping row {name} for ticker {}: name is reserved.", self.symbol);
            return self;
        }
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// `date_accessed` is set only when at least one field was collected.
    pub fn build(self, date: NaiveDate) -> Record {
        let date_accessed = (!self.fields.is_empty()).then_some(date);
        Record { symbol: self.symbol, date_accessed, fields: self.fields }
    }
}
