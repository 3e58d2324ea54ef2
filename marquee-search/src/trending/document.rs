//! Document model and query builders for the trending store.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Domain fields of a document, keyed by attribute name.
pub type DocumentData = Map<String, Value>;

/// A stored document: system fields plus schema-free domain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier
    #[serde(rename = "$id")]
    pub id: String,
    /// Owning collection
    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,
    /// Owning database
    #[serde(rename = "$databaseId", default)]
    pub database_id: String,
    /// Creation timestamp
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Permission strings attached to the document
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
    /// Domain attributes
    #[serde(flatten)]
    pub data: DocumentData,
}

impl Document {
    /// Reads an unsigned integer attribute.
    pub fn attribute_u64(&self, attribute: &str) -> Option<u64> {
        self.data.get(attribute).and_then(Value::as_u64)
    }

    /// Reads any attribute, including the `$`-prefixed system ones.
    ///
    /// Timestamps come back as fixed-width RFC 3339 strings, so they order
    /// chronologically when compared as text.
    pub fn attribute(&self, attribute: &str) -> Option<Value> {
        let timestamp = |at: &DateTime<Utc>| {
            Value::String(at.to_rfc3339_opts(SecondsFormat::Micros, true))
        };

        match attribute {
            "$id" => Some(Value::String(self.id.clone())),
            "$createdAt" => Some(timestamp(&self.created_at)),
            "$updatedAt" => Some(timestamp(&self.updated_at)),
            _ => self.data.get(attribute).cloned(),
        }
    }
}

/// Page of documents returned by a list query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentList {
    /// Number of documents matching the filters, ignoring the limit
    #[serde(default)]
    pub total: u64,
    /// Documents in the requested order
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// List query clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Attribute equals value
    Equal {
        /// Attribute name
        attribute: String,
        /// Value to compare against
        value: Value,
    },
    /// At most this many documents
    Limit(usize),
    /// Descending sort on an attribute
    OrderDesc(String),
    /// Ascending sort on an attribute
    OrderAsc(String),
}

impl Query {
    /// Filter documents whose attribute equals `value`.
    pub fn equal(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equal {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Cap the number of documents returned.
    pub fn limit(limit: usize) -> Self {
        Self::Limit(limit)
    }

    /// Sort by an attribute, highest first.
    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Self::OrderDesc(attribute.into())
    }

    /// Sort by an attribute, lowest first.
    pub fn order_asc(attribute: impl Into<String>) -> Self {
        Self::OrderAsc(attribute.into())
    }

    /// Serializes the clause into the JSON query syntax of the REST API.
    pub fn to_json(&self) -> String {
        let value = match self {
            Query::Equal { attribute, value } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            }),
            Query::Limit(limit) => json!({
                "method": "limit",
                "values": [limit],
            }),
            Query::OrderDesc(attribute) => json!({
                "method": "orderDesc",
                "attribute": attribute,
            }),
            Query::OrderAsc(attribute) => json!({
                "method": "orderAsc",
                "attribute": attribute,
            }),
        };
        value.to_string()
    }
}
