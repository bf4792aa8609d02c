use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One integration link between two backend systems, as delivered by the
/// records feed. The feed is the source of truth; the whole set is replaced
/// on every successful refresh.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Transport protocol tag. Open set; unknown values still render.
    pub protocol: String,
    pub schedule: String,
    /// Responsible party. The feed keeps the legacy Japanese column name on
    /// the wire; it must round-trip verbatim.
    #[serde(rename = "担当者")]
    pub owner: String,
}

/// Every system id mentioned by the records, sources and targets combined,
/// deduplicated in first-seen order.
pub fn system_ids(records: &[InterfaceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for record in records {
        for id in [&record.source, &record.target] {
            if seen.insert(id.as_str()) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

/// Distinct protocol tags in first-seen order.
pub fn protocol_tags(records: &[InterfaceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for record in records {
        if seen.insert(record.protocol.as_str()) {
            tags.push(record.protocol.clone());
        }
    }
    tags
}
