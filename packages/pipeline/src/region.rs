//! Administrative region decomposition of free-text addresses.
//!
//! Best-effort heuristic: a fixed gazetteer for the province tier plus
//! suffix matching for the lower tiers. Incidental suffix matches are
//! accepted; this is not a validated lookup.

use serde::Serialize;

use crate::text::normalize_space;

/// Province-level gazetteer, in match-precedence order.
const SIDO_PATTERNS: [&str; 17] = [
    "서울특별시",
    "부산광역시",
    "대구광역시",
    "인천광역시",
    "광주광역시",
    "대전광역시",
    "울산광역시",
    "세종특별자치시",
    "경기도",
    "강원특별자치도",
    "충청북도",
    "충청남도",
    "전북특별자치도",
    "전라남도",
    "경상북도",
    "경상남도",
    "제주특별자치도",
];

/// District (시/군/구) token suffixes.
const SIGUNGU_SUFFIXES: [char; 3] = ['시', '군', '구'];

/// Neighborhood (읍/면/동/가/로) token suffixes.
const EUPMYEONDONG_SUFFIXES: [char; 5] = ['읍', '면', '동', '가', '로'];

/// Three-level administrative region decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Province / metropolitan city tier.
    pub sido: String,
    /// District tier (시/군/구); may be empty.
    pub sigungu: String,
    /// Sub-district tier (읍/면/동/가/로); may be empty.
    pub eupmyeondong: String,
}

impl Region {
    pub fn new(
        sido: impl Into<String>,
        sigungu: impl Into<String>,
        eupmyeondong: impl Into<String>,
    ) -> Self {
        Self {
            sido: sido.into(),
            sigungu: sigungu.into(),
            eupmyeondong: eupmyeondong.into(),
        }
    }
}

/// Region parser owning its gazetteer and suffix tables.
///
/// Constructed once at startup and passed explicitly into the enrichment
/// pass; the tables are fixed configuration, not ambient globals.
#[derive(Debug, Clone)]
pub struct RegionParser {
    sido_patterns: Vec<&'static str>,
    sigungu_suffixes: Vec<char>,
    eupmyeondong_suffixes: Vec<char>,
}

impl Default for RegionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionParser {
    pub fn new() -> Self {
        Self {
            sido_patterns: SIDO_PATTERNS.to_vec(),
            sigungu_suffixes: SIGUNGU_SUFFIXES.to_vec(),
            eupmyeondong_suffixes: EUPMYEONDONG_SUFFIXES.to_vec(),
        }
    }

    /// Decompose an address into region tiers.
    ///
    /// The province tier is the first gazetteer entry the address starts
    /// with, falling back to the first token verbatim. The lower tiers are
    /// the first later token ending in a matching suffix, scanned
    /// independently; both default to empty.
    pub fn parse(&self, address: &str) -> Region {
        let address = normalize_space(address);
        if address.is_empty() {
            return Region::default();
        }

        let tokens: Vec<&str> = address.split(' ').collect();
        let sido = self
            .sido_patterns
            .iter()
            .find(|s| address.starts_with(**s))
            .copied()
            .unwrap_or(tokens[0])
            .to_string();

        let mut sigungu = String::new();
        let mut eupmyeondong = String::new();
        for token in tokens.iter().skip(1) {
            let last = token.chars().last();
            if sigungu.is_empty() && last.is_some_and(|c| self.sigungu_suffixes.contains(&c)) {
                sigungu = token.to_string();
            }
            if eupmyeondong.is_empty()
                && last.is_some_and(|c| self.eupmyeondong_suffixes.contains(&c))
            {
                eupmyeondong = token.to_string();
            }
        }

        Region::new(sido, sigungu, eupmyeondong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_address() {
        let parser = RegionParser::new();
        assert_eq!(
            parser.parse("서울특별시 강남구 역삼동"),
            Region::new("서울특별시", "강남구", "역삼동")
        );
    }

    #[test]
    fn test_parse_empty_address() {
        let parser = RegionParser::new();
        assert_eq!(parser.parse("   "), Region::default());
    }

    #[test]
    fn test_parse_unknown_sido_falls_back_to_first_token() {
        let parser = RegionParser::new();
        let region = parser.parse("어딘가 남군 중앙로 12");
        assert_eq!(region.sido, "어딘가");
        assert_eq!(region.sigungu, "남군");
        assert_eq!(region.eupmyeondong, "중앙로");
    }

    #[test]
    fn test_parse_independent_tier_scans() {
        let parser = RegionParser::new();
        // The neighborhood token precedes the district token; both are found.
        let region = parser.parse("경기도 백현동 성남시 1");
        assert_eq!(region.sigungu, "성남시");
        assert_eq!(region.eupmyeondong, "백현동");
    }

    #[test]
    fn test_parse_missing_lower_tiers() {
        let parser = RegionParser::new();
        let region = parser.parse("제주특별자치도 어딘가");
        assert_eq!(region.sido, "제주특별자치도");
        assert_eq!(region.sigungu, "");
        assert_eq!(region.eupmyeondong, "");
    }
}
