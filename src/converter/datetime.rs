//! Converters for the XML Schema `date` and `dateTime` types
//!
//! Input is a single serialized element such as
//! `<dateTime>2024-05-01T10:00:00+02:00</dateTime>`; its text content is
//! parsed, an empty element reads as [`Value::Null`]. Output renders the
//! value back as an element named after the type.

use chrono::format::{Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use tracing::trace;

use super::TypeConverter;
use crate::core::{ConverterError, Result, Value, XSD_NAMESPACE};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Collect the text content of the root element
fn element_text(xml: &str) -> Result<String> {
    let doc = roxmltree::Document::parse(xml)?;
    let text: String = doc
        .root_element()
        .descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect();
    Ok(text.trim().to_string())
}

fn empty_element(name: &str) -> String {
    format!("<{}/>", name)
}

/// Accept an empty remainder, `Z` or a `+HH:MM` offset after a date
fn parse_timezone_suffix(rest: &str) -> Result<()> {
    if rest.is_empty() || rest == "Z" {
        return Ok(());
    }
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, rest, StrftimeItems::new("%:z"))?;
    Ok(())
}

fn parse_datetime(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    // xsd:dateTime allows omitting the offset; read those as UTC
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(naive.and_utc().fixed_offset())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(text, DATE_FORMAT)?;
    parse_timezone_suffix(rest)?;
    Ok(date)
}

/// `xsd:dateTime` <-> [`Value::DateTime`]
#[derive(Debug, Clone)]
pub struct DateTimeTypeConverter {
    namespace: String,
}

impl DateTimeTypeConverter {
    pub fn new() -> Self {
        Self::with_namespace(XSD_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for DateTimeTypeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeConverter for DateTimeTypeConverter {
    fn type_namespace(&self) -> &str {
        &self.namespace
    }

    fn type_name(&self) -> &str {
        "dateTime"
    }

    fn convert_xml_to_value(&self, xml: &str) -> Result<Value> {
        let text = element_text(xml)?;
        trace!(type_name = self.type_name(), text = %text, "reading xml value");
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(Value::DateTime(parse_datetime(&text)?))
    }

    fn convert_value_to_xml(&self, value: &Value) -> Result<String> {
        let name = self.type_name();
        if value.is_null() {
            return Ok(empty_element(name));
        }
        let dt = value.as_datetime().ok_or_else(|| {
            ConverterError::TypeMismatch(format!(
                "Cannot write {} as {}",
                value.type_name(),
                name
            ))
        })?;
        Ok(format!("<{0}>{1}</{0}>", name, dt.format(DATETIME_FORMAT)))
    }
}

/// `xsd:date` <-> [`Value::Date`]
#[derive(Debug, Clone)]
pub struct DateTypeConverter {
    namespace: String,
}

impl DateTypeConverter {
    pub fn new() -> Self {
        Self::with_namespace(XSD_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for DateTypeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeConverter for DateTypeConverter {
    fn type_namespace(&self) -> &str {
        &self.namespace
    }

    fn type_name(&self) -> &str {
        "date"
    }

    fn convert_xml_to_value(&self, xml: &str) -> Result<Value> {
        let text = element_text(xml)?;
        trace!(type_name = self.type_name(), text = %text, "reading xml value");
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(Value::Date(parse_date(&text)?))
    }

    fn convert_value_to_xml(&self, value: &Value) -> Result<String> {
        let name = self.type_name();
        if value.is_null() {
            return Ok(empty_element(name));
        }
        // a DateTime is truncated to its calendar date
        let date = value.as_date().ok_or_else(|| {
            ConverterError::TypeMismatch(format!(
                "Cannot write {} as {}",
                value.type_name(),
                name
            ))
        })?;
        Ok(format!("<{0}>{1}</{0}>", name, date.format(DATE_FORMAT)))
    }
}
