//! Identity resolution and cross-source deduplication.

use std::collections::HashSet;

use tracing::debug;

use crate::types::CanonicalRecord;

/// Deduplicate records by identity key, keeping the first occurrence.
///
/// Records arrive in source order (base first, then secondary sources in
/// configured order), so the base always wins a tie and earlier sources
/// beat later ones. Losing duplicates are discarded whole; there is no
/// field-level reconciliation.
pub fn dedup_first_wins(records: Vec<CanonicalRecord>) -> Vec<CanonicalRecord> {
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let merged: Vec<CanonicalRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.identity_key()))
        .collect();
    debug!(total, kept = merged.len(), "deduplicated records");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, address: &str, source_type: &str) -> CanonicalRecord {
        CanonicalRecord {
            name: name.to_string(),
            address: address.to_string(),
            source_type: source_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let merged = dedup_first_wins(vec![
            record("스시야", "서울특별시 마포구 1", "ozicme-base"),
            record("스시 야", "서울특별시 마포구 1", "franchise"),
            record("본죽", "서울특별시 강남구 2", "franchise"),
        ]);

        assert_eq!(merged.len(), 2);
        // The base record survives the spacing-variant collision.
        assert_eq!(merged[0].source_type, "ozicme-base");
        assert_eq!(merged[1].name, "본죽");
    }

    #[test]
    fn test_distinct_addresses_not_collapsed() {
        let merged = dedup_first_wins(vec![
            record("본죽", "서울특별시 강남구 1", "a"),
            record("본죽", "서울특별시 강남구 2", "b"),
        ]);
        assert_eq!(merged.len(), 2);
    }
}
