//! Enrichment pass: region backfill, rule-based classification, link
//! derivation, and provenance tagging.
//!
//! Each row is mapped through a pure transform producing a
//! [`CanonicalRecord`]; nothing mutates a shared table across passes.

use indexmap::IndexMap;
use tracing::debug;

use crate::classify::{Classifier, ClassifyInput};
use crate::region::{Region, RegionParser};
use crate::schema::{
    COL_ADDRESS, COL_BADGE, COL_CATEGORY, COL_CATEGORY_DETAIL, COL_EUPMYEONDONG, COL_EVIDENCE_TEXT,
    COL_EVIDENCE_URL, COL_MAIN_DISH, COL_NAME, COL_PLACE_URL, COL_SEARCH_TAGS, COL_SIDO,
    COL_SIGUNGU, COL_SOURCE_TYPE, MAP_SEARCH_PREFIX, RESERVATION_DOMAIN,
};
use crate::text::normalize_space;
use crate::types::{CanonicalRecord, RawTable};

/// Default provenance for rows whose source table carries no provenance
/// columns of its own.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    pub source_type: String,
    pub evidence_url: String,
    pub evidence_text: String,
    pub badge: String,
}

impl Provenance {
    pub fn new(
        source_type: impl Into<String>,
        evidence_url: impl Into<String>,
        evidence_text: impl Into<String>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            evidence_url: evidence_url.into(),
            evidence_text: evidence_text.into(),
            badge: badge.into(),
        }
    }
}

/// Constructed map-search fallback URL for a record.
pub fn map_search_url(name: &str, address: &str) -> String {
    let query = normalize_space(&format!("{} {}", name, address));
    format!("{}{}", MAP_SEARCH_PREFIX, urlencoding::encode(&query))
}

/// Enrich a unified table into canonical records.
///
/// Provenance columns are filled only when the table lacks them; the
/// update date is stamped unconditionally with the run date.
pub fn enrich_table(
    table: &RawTable,
    provenance: &Provenance,
    run_date: &str,
    regions: &RegionParser,
    classifier: &Classifier,
) -> Vec<CanonicalRecord> {
    let mut table = table.clone();
    table.ensure_column(COL_BADGE, &provenance.badge);
    table.ensure_column(COL_SOURCE_TYPE, &provenance.source_type);
    table.ensure_column(COL_EVIDENCE_URL, &provenance.evidence_url);
    table.ensure_column(COL_EVIDENCE_TEXT, &provenance.evidence_text);

    let records: Vec<CanonicalRecord> = table
        .records()
        .map(|row| enrich_row(&row, run_date, regions, classifier))
        .collect();
    debug!(rows = records.len(), "enriched table");
    records
}

/// Pure per-row transform from a unified row to a canonical record.
fn enrich_row(
    row: &IndexMap<&str, &str>,
    run_date: &str,
    regions: &RegionParser,
    classifier: &Classifier,
) -> CanonicalRecord {
    let cell = |name: &str| normalize_space(row.get(name).copied().unwrap_or(""));

    let name = cell(COL_NAME);
    let address = cell(COL_ADDRESS);

    // Region tiers: fill only the empty ones from the address.
    let parsed = regions.parse(&address);
    let pick = |existing: String, derived: String| {
        if existing.is_empty() {
            derived
        } else {
            existing
        }
    };
    let region = Region {
        sido: pick(cell(COL_SIDO), parsed.sido),
        sigungu: pick(cell(COL_SIGUNGU), parsed.sigungu),
        eupmyeondong: pick(cell(COL_EUPMYEONDONG), parsed.eupmyeondong),
    };

    let classified = classifier.classify(&ClassifyInput {
        name: name.clone(),
        category: cell(COL_CATEGORY),
        detail: cell(COL_CATEGORY_DETAIL),
        main_dish: cell(COL_MAIN_DISH),
        tags: cell(COL_SEARCH_TAGS),
    });

    // Link derivation: a native place link feeds the map link directly and
    // the reservation link only when it is on the reservation domain;
    // otherwise both fall back to the constructed search URL.
    let place_url = cell(COL_PLACE_URL);
    let fallback = map_search_url(&name, &address);
    let (map_url, reservation_url) = if place_url.is_empty() {
        (fallback.clone(), fallback)
    } else if place_url.to_lowercase().contains(RESERVATION_DOMAIN) {
        (place_url.clone(), place_url.clone())
    } else {
        (place_url.clone(), fallback)
    };

    CanonicalRecord {
        name,
        address,
        naver_place_url: place_url,
        map_url,
        reservation_url,
        region,
        category: classified.category,
        category_detail: classified.detail,
        main_dish: classified.main_dish,
        search_tags: classified.tags,
        badge: cell(COL_BADGE),
        source_type: cell(COL_SOURCE_TYPE),
        evidence_url: cell(COL_EVIDENCE_URL),
        evidence_text: cell(COL_EVIDENCE_TEXT),
        updated_at: run_date.to_string(),
    }
}
