pub mod collection;
pub mod datetime;

use crate::core::{Result, TypeKey, Value};

pub use collection::TypeConverterCollection;
pub use datetime::{DateTimeTypeConverter, DateTypeConverter};

/// Conversion strategy for one XML type
///
/// A converter is identified by the namespace and local name of the XML
/// type it handles. Both must stay stable while the converter is registered
/// in a [`TypeConverterCollection`], otherwise lookups by key miss it.
pub trait TypeConverter: Send + Sync {
    /// Namespace of the handled XML type
    fn type_namespace(&self) -> &str;

    /// Local name of the handled XML type
    fn type_name(&self) -> &str;

    /// Read a serialized XML element into a native value
    fn convert_xml_to_value(&self, xml: &str) -> Result<Value>;

    /// Render a native value as a serialized XML element
    fn convert_value_to_xml(&self, value: &Value) -> Result<String>;

    fn type_key(&self) -> TypeKey {
        TypeKey::new(self.type_namespace(), self.type_name())
    }
}
