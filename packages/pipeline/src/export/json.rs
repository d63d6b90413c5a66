//! Public JSON feed export.
//!
//! The feed is the denormalized, app-facing shape: nested region object,
//! list-valued dish/tag fields, and a boolean verified badge. Scalars are
//! space-normalized at serialization time, independent of whatever
//! normalization ran earlier in the pipeline.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::schema::PRIMARY_BADGE;
use crate::text::normalize_space;
use crate::types::CanonicalRecord;

/// One record of the public feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRecord {
    pub name: String,
    pub region: PublicRegion,
    pub category: String,
    pub category_detail: String,
    pub main_dishes: Vec<String>,
    pub search_tags: Vec<String>,
    pub address: String,
    pub naver_place_url: String,
    pub naver_map_url: String,
    pub naver_reservation_url: String,
    pub verified_badge: bool,
    pub badge_label: String,
    pub source_type: String,
    pub evidence_url: String,
    pub evidence_text: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicRegion {
    pub sido: String,
    pub sigungu: String,
    pub eupmyeondong: String,
}

impl From<&CanonicalRecord> for PublicRecord {
    fn from(r: &CanonicalRecord) -> Self {
        let badge = normalize_space(&r.badge);
        Self {
            name: normalize_space(&r.name),
            region: PublicRegion {
                sido: normalize_space(&r.region.sido),
                sigungu: normalize_space(&r.region.sigungu),
                eupmyeondong: normalize_space(&r.region.eupmyeondong),
            },
            category: normalize_space(&r.category),
            category_detail: normalize_space(&r.category_detail),
            main_dishes: split_list(&r.main_dish),
            search_tags: split_list(&r.search_tags),
            address: normalize_space(&r.address),
            naver_place_url: normalize_space(&r.naver_place_url),
            naver_map_url: normalize_space(&r.map_url),
            naver_reservation_url: normalize_space(&r.reservation_url),
            verified_badge: badge == PRIMARY_BADGE,
            badge_label: badge,
            source_type: normalize_space(&r.source_type),
            evidence_url: normalize_space(&r.evidence_url),
            evidence_text: normalize_space(&r.evidence_text),
            updated_at: normalize_space(&r.updated_at),
        }
    }
}

/// Split a scalar list field on comma or slash, dropping empties.
fn split_list(value: &str) -> Vec<String> {
    normalize_space(value)
        .split(|c| c == ',' || c == '/')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serialize the merged records to the public feed file, pretty-printed.
pub fn write_public_json(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    let payload: Vec<PublicRecord> = records.iter().map(PublicRecord::from).collect();
    fs::write(path, serde_json::to_string_pretty(&payload)?)?;
    info!(path = %path.display(), records = payload.len(), "wrote public JSON feed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn record() -> CanonicalRecord {
        CanonicalRecord {
            name: " 본죽  강남점 ".to_string(),
            address: "서울특별시 강남구".to_string(),
            region: Region::new("서울특별시", "강남구", ""),
            main_dish: "백반/정식".to_string(),
            search_tags: "한식, 백반,,국밥".to_string(),
            badge: PRIMARY_BADGE.to_string(),
            updated_at: "2026-08-29".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_public_record_shape() {
        let public = PublicRecord::from(&record());
        assert_eq!(public.name, "본죽 강남점");
        assert_eq!(public.main_dishes, ["백반", "정식"]);
        assert_eq!(public.search_tags, ["한식", "백반", "국밥"]);
        assert!(public.verified_badge);
        assert_eq!(public.badge_label, PRIMARY_BADGE);
    }

    #[test]
    fn test_secondary_badge_not_verified() {
        let mut r = record();
        r.badge = String::new();
        let public = PublicRecord::from(&r);
        assert!(!public.verified_badge);
        assert_eq!(public.badge_label, "");
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(PublicRecord::from(&record())).unwrap();
        assert!(json.get("categoryDetail").is_some());
        assert!(json.get("naverReservationUrl").is_some());
        assert_eq!(json["region"]["sido"], "서울특별시");
        assert_eq!(json["updatedAt"], "2026-08-29");
    }
}
