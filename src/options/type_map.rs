use std::fmt;
use std::sync::Arc;

use crate::converter::{TypeConverter, TypeConverterCollection};
use crate::core::{Result, Value};

/// One engine type map entry: an XML type and the callbacks converting it
#[derive(Clone)]
pub struct TypeMapEntry {
    converter: Arc<dyn TypeConverter>,
}

impl TypeMapEntry {
    pub fn new(converter: Arc<dyn TypeConverter>) -> Self {
        Self { converter }
    }

    pub fn type_ns(&self) -> &str {
        self.converter.type_namespace()
    }

    pub fn type_name(&self) -> &str {
        self.converter.type_name()
    }

    pub fn from_xml(&self, xml: &str) -> Result<Value> {
        self.converter.convert_xml_to_value(xml)
    }

    pub fn to_xml(&self, value: &Value) -> Result<String> {
        self.converter.convert_value_to_xml(value)
    }
}

impl fmt::Debug for TypeMapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMapEntry")
            .field("type_ns", &self.type_ns())
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// Export a collection as type map entries, in collection order
pub fn build_type_map(converters: &TypeConverterCollection) -> Vec<TypeMapEntry> {
    converters
        .iter()
        .map(|converter| TypeMapEntry::new(Arc::clone(converter)))
        .collect()
}
