//! Canonical column names and fixed output schema.
//!
//! Column headers stay in their source-native Korean spellings because the
//! canonical CSV is consumed by spreadsheet users downstream; code refers
//! to them only through these constants.

pub const COL_NAME: &str = "상호명";
pub const COL_ADDRESS: &str = "대표주소";
pub const COL_PLACE_URL: &str = "네이버플레이스";
pub const COL_MAP_URL: &str = "네이버지도검색링크";
pub const COL_RESERVATION_URL: &str = "네이버예약URL";
pub const COL_SIDO: &str = "지역_시도";
pub const COL_SIGUNGU: &str = "지역_시군구";
pub const COL_EUPMYEONDONG: &str = "지역_읍면동";
pub const COL_CATEGORY: &str = "식당유형_대";
pub const COL_CATEGORY_DETAIL: &str = "식당유형_세부";
pub const COL_MAIN_DISH: &str = "주요리_대표";
pub const COL_SEARCH_TAGS: &str = "검색태그";
pub const COL_BADGE: &str = "배지";
pub const COL_SOURCE_TYPE: &str = "출처유형";
pub const COL_EVIDENCE_URL: &str = "근거URL";
pub const COL_EVIDENCE_TEXT: &str = "근거문구";
pub const COL_UPDATED_AT: &str = "최종업데이트";

/// Columns the base listing must carry; absent ones are inserted empty.
pub const REQUIRED_BASE_COLUMNS: [&str; 10] = [
    COL_NAME,
    COL_ADDRESS,
    COL_PLACE_URL,
    COL_SIDO,
    COL_SIGUNGU,
    COL_EUPMYEONDONG,
    COL_CATEGORY,
    COL_CATEGORY_DETAIL,
    COL_MAIN_DISH,
    COL_SEARCH_TAGS,
];

/// Fixed column order of the canonical CSV export.
pub const STANDARD_COLUMNS: [&str; 17] = [
    COL_NAME,
    COL_ADDRESS,
    COL_PLACE_URL,
    COL_MAP_URL,
    COL_RESERVATION_URL,
    COL_SIDO,
    COL_SIGUNGU,
    COL_EUPMYEONDONG,
    COL_CATEGORY,
    COL_CATEGORY_DETAIL,
    COL_MAIN_DISH,
    COL_SEARCH_TAGS,
    COL_BADGE,
    COL_SOURCE_TYPE,
    COL_EVIDENCE_URL,
    COL_EVIDENCE_TEXT,
    COL_UPDATED_AT,
];

/// Free-text columns every unified table must carry before enrichment.
pub const CANONICAL_TEXT_COLUMNS: [&str; 7] = [
    COL_NAME,
    COL_ADDRESS,
    COL_PLACE_URL,
    COL_CATEGORY,
    COL_CATEGORY_DETAIL,
    COL_MAIN_DISH,
    COL_SEARCH_TAGS,
];

/// Badge label marking a record from the curated primary collection.
pub const PRIMARY_BADGE: &str = "오직미클럽";

/// Source-type label for the curated base listing.
pub const BASE_SOURCE_TYPE: &str = "ozicme-base";

/// Prefix of the constructed map-search fallback URL.
pub const MAP_SEARCH_PREFIX: &str = "https://map.naver.com/p/search/";

/// Host marking a native place link as a reservation URL.
pub const RESERVATION_DOMAIN: &str = "booking.naver.com";
