//! Output formatting for the eayun-neutron CLI.
//!
//! Neutron answers are schemaless JSON mappings, so formatting works on
//! [`serde_json::Value`] directly: a single [`Record`] renders as
//! field/value pairs in CSV, a [`Listing`] renders one row per resource.

use csv::Writer;
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

pub const JSON: &str = "json";
pub const CSV: &str = "csv";
pub const YAML: &str = "yaml";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),

    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// CSV (Comma-Separated Values) format
    Csv(OutputFormatOptions),
    /// YAML format
    Yaml(OutputFormatOptions),
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter().map(|f| f.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json(_) => JSON,
            OutputFormat::Csv(_) => CSV,
            OutputFormat::Yaml(_) => YAML,
        }
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            YAML => Ok(OutputFormat::Yaml(options)),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

/// Text of a single CSV cell.
///
/// Lists of scalars are joined with newlines, the way the neutron client
/// prints ID lists; nested structures fall back to compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) if items.iter().all(|i| !i.is_object() && !i.is_array()) => items
            .iter()
            .map(cell_text)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

fn to_json(value: &Value, pretty: bool) -> Result<String, FormattingError> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

fn csv_string(rows: Vec<Vec<String>>) -> Result<String, FormattingError> {
    let mut wtr = Writer::from_writer(vec![]);
    for row in rows {
        wtr.write_record(&row)?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// A single resource attribute mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    attributes: Map<String, Value>,
}

impl Record {
    /// Take the attribute mapping stored under `key` of a response envelope.
    ///
    /// A response without that key is rendered as it came.
    pub fn from_envelope(envelope: Value, key: &str) -> Record {
        let attributes = match envelope {
            Value::Object(mut map) => match map.remove(key) {
                Some(Value::Object(inner)) => inner,
                Some(other) => {
                    let mut wrapped = Map::new();
                    wrapped.insert(key.to_string(), other);
                    wrapped
                }
                None => map,
            },
            Value::Null => Map::new(),
            other => {
                let mut wrapped = Map::new();
                wrapped.insert(key.to_string(), other);
                wrapped
            }
        };
        Record { attributes }
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl Formattable for Record {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => {
                to_json(&Value::Object(self.attributes.clone()), options.pretty)
            }
            OutputFormat::Yaml(_) => Ok(serde_yaml::to_string(&self.attributes)?),
            OutputFormat::Csv(options) => {
                let mut rows = Vec::with_capacity(self.attributes.len() + 1);
                if options.with_headers {
                    rows.push(vec!["FIELD".to_string(), "VALUE".to_string()]);
                }
                let mut keys: Vec<&String> = self.attributes.keys().collect();
                keys.sort();
                for key in keys {
                    rows.push(vec![key.clone(), cell_text(&self.attributes[key])]);
                }
                csv_string(rows)
            }
        }
    }
}

/// Rows of a list command, projected onto `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    columns: Vec<String>,
    items: Vec<Map<String, Value>>,
}

impl Listing {
    /// Project `items` onto `columns`.
    ///
    /// With no columns given every attribute seen in any item is kept, in
    /// order of first appearance.
    pub fn new(columns: Vec<String>, items: Vec<Value>) -> Listing {
        let items: Vec<Map<String, Value>> = items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();

        let columns = if columns.is_empty() {
            let mut seen: Vec<String> = Vec::new();
            for item in &items {
                for key in item.keys() {
                    if !seen.contains(key) {
                        seen.push(key.clone());
                    }
                }
            }
            seen
        } else {
            columns
        };

        let items = items
            .into_iter()
            .map(|mut item| {
                columns
                    .iter()
                    .map(|c| (c.clone(), item.remove(c).unwrap_or(Value::Null)))
                    .collect()
            })
            .collect();

        Listing { columns, items }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Formattable for Listing {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => {
                let items: Vec<Value> = self.items.iter().cloned().map(Value::Object).collect();
                to_json(&Value::Array(items), options.pretty)
            }
            OutputFormat::Yaml(_) => Ok(serde_yaml::to_string(&self.items)?),
            OutputFormat::Csv(options) => {
                let mut rows = Vec::with_capacity(self.items.len() + 1);
                if options.with_headers {
                    rows.push(self.columns.iter().map(|c| c.to_uppercase()).collect());
                }
                for item in &self.items {
                    rows.push(
                        self.columns
                            .iter()
                            .map(|c| item.get(c).map(cell_text).unwrap_or_default())
                            .collect(),
                    );
                }
                csv_string(rows)
            }
        }
    }
}
