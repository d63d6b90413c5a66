//! Canonical record: the unified, post-enrichment representation of one
//! restaurant entry.

use crate::region::Region;
use crate::text::normalize_address;

/// One restaurant entry in the fixed output schema.
///
/// Created by the enrichment pass, deduplicated by identity key, written
/// once by the exporters. Records losing a dedup tie are discarded whole,
/// never merged field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRecord {
    pub name: String,
    pub address: String,
    /// Source-native place link, possibly empty.
    pub naver_place_url: String,
    /// Derived map link (native place link or constructed search URL).
    pub map_url: String,
    /// Derived reservation link.
    pub reservation_url: String,
    pub region: Region,
    pub category: String,
    pub category_detail: String,
    pub main_dish: String,
    /// Comma-joined search tags.
    pub search_tags: String,
    pub badge: String,
    pub source_type: String,
    pub evidence_url: String,
    pub evidence_text: String,
    /// Run date, stamped on every record touched in the run.
    pub updated_at: String,
}

impl CanonicalRecord {
    /// Normalized identity key used for cross-source deduplication.
    ///
    /// Both halves go through address canonicalization, so spacing and
    /// punctuation variants of the same name ("스시야" / "스시 야")
    /// collide.
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}",
            normalize_address(&self.name),
            normalize_address(&self.address)
        )
    }
}
