//! Bulk-load wire types.
//!
//! The downstream sink consumes a flat sequence of pairs: an index-action
//! line immediately followed by the record it describes, one JSON object per
//! line. The action carries the target collection name and the record's id.

use crate::record::PersonRecord;
use serde::{Deserialize, Serialize};

/// The inner body of an index action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMeta {
    /// Target collection (index) name.
    #[serde(rename = "_index")]
    pub index: String,
    /// Id of the record this action precedes.
    #[serde(rename = "_id")]
    pub id: String,
}

/// An index-action descriptor, serialized as `{"index":{"_index":...,"_id":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAction {
    pub index: ActionMeta,
}

impl IndexAction {
    /// Build the action descriptor for one record.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            index: ActionMeta {
                index: collection.into(),
                id: id.into(),
            },
        }
    }
}

/// A bulk-indexable pair: the unit the sink consumes.
///
/// The action must be emitted immediately before the document, with no gaps
/// or reordering between pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPair {
    pub action: IndexAction,
    pub document: PersonRecord,
}

impl BulkPair {
    /// Pair a record with its action descriptor for the given collection.
    pub fn new(collection: &str, document: PersonRecord) -> Self {
        Self {
            action: IndexAction::new(collection, document.id.clone()),
            document,
        }
    }
}
