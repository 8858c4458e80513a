use std::fmt;

use serde::{Deserialize, Serialize};

/// XML Schema namespace used by the built-in converters
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Identity of an XML type: namespace plus local name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeKey {
    pub namespace: String,
    pub name: String,
}

impl TypeKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Lookup key `namespace:name`.
    ///
    /// Colons inside the parts are not escaped: `("urn:x", "Foo")` and
    /// `("urn", "x:Foo")` derive the same key and alias each other.
    pub fn derive(namespace: &str, name: &str) -> String {
        format!("{}:{}", namespace, name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}
