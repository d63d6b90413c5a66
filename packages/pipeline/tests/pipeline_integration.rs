//! End-to-end pipeline test over canned sources.
//!
//! Exercises the full batch run: base listing, one healthy HTML source,
//! one failing source, deduplication against the base, and both export
//! files plus the manual-review queue.

use std::fs;
use std::path::PathBuf;

use pipeline::{run_pipeline, MockFetcher, RunConfig};

struct Workspace {
    root: PathBuf,
}

impl Workspace {
    fn new(tag: &str) -> Self {
        let root = std::env::temp_dir().join(format!("pipeline-e2e-{}-{}", std::process::id(), tag));
        fs::create_dir_all(root.join("input/sources")).unwrap();
        Self { root }
    }

    fn write(&self, relative: &str, content: &str) {
        fs::write(self.root.join(relative), content).unwrap();
    }

    fn config(&self) -> RunConfig {
        RunConfig {
            base_csv: self.root.join("input/base.csv"),
            franchise_csv: self.root.join("input/sources/franchise_sources.csv"),
            municipality_csv: self.root.join("input/sources/municipality_sources.csv"),
            output_csv: self.root.join("output/merged.csv"),
            output_json: self.root.join("output/public.json"),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.root).ok();
    }
}

fn seed_inputs(ws: &Workspace) {
    ws.write(
        "input/base.csv",
        "상호명,대표주소,네이버플레이스\n\
         스시야,서울특별시 마포구 합정동 1,https://booking.naver.com/booking/77\n\
         시장국밥,서울특별시 강남구 역삼동 2,\n",
    );
    // Source A fails at the transport layer; source B serves an HTML table
    // that both adds a new store and duplicates a base record.
    ws.write(
        "input/sources/franchise_sources.csv",
        "source_id,브랜드명,매장리스트URL,매장데이터URL,데이터형식,좋은쌀근거URL,좋은쌀근거문구\n\
         fa,죽이야기,https://a.example/stores,,html,https://a.example/rice,국내산 쌀\n\
         fb,본죽,https://b.example/stores,,html,https://b.example/rice,좋은 쌀 사용\n",
    );
    ws.write(
        "input/sources/municipality_sources.csv",
        "source_id,지자체명,리스트URL,형식,근거문구키워드\n",
    );
}

fn fetcher_with_source_b() -> MockFetcher {
    MockFetcher::new()
        .with_error("https://a.example/stores", "connection refused")
        .with_text(
            "https://b.example/stores",
            "<table>\
               <tr><th>매장명</th><th>주소</th></tr>\
               <tr><td>본죽 성남점</td><td>경기도 성남시 분당구 백현동 3</td></tr>\
               <tr><td>스시 야</td><td>서울특별시 마포구 합정동 1</td></tr>\
             </table>",
        )
}

#[tokio::test]
async fn test_full_run_isolation_and_dedup() {
    let ws = Workspace::new("full");
    seed_inputs(&ws);
    let fetcher = fetcher_with_source_b();

    let summary = run_pipeline(&ws.config(), &fetcher).await.unwrap();

    // Source A failed alone; source B and the base are intact.
    assert_eq!(summary.base_rows, 2);
    assert_eq!(summary.sources_ingested, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].source_id, "fa");
    assert!(summary.failures[0].error.contains("connection refused"));

    // The duplicate "스시 야" from source B lost to the base "스시야".
    assert_eq!(summary.merged_records, 3);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ws.root.join("output/public.json")).unwrap())
            .unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let sushi = records
        .iter()
        .find(|r| r["name"] == "스시야")
        .expect("base sushi record present");
    assert_eq!(sushi["sourceType"], "ozicme-base");
    assert_eq!(sushi["verifiedBadge"], true);
    // Reservation-domain place link is kept verbatim.
    assert_eq!(
        sushi["naverReservationUrl"],
        "https://booking.naver.com/booking/77"
    );

    let bonjuk = records
        .iter()
        .find(|r| r["name"] == "본죽 성남점")
        .expect("source B record present");
    assert_eq!(bonjuk["sourceType"], "franchise");
    assert_eq!(bonjuk["verifiedBadge"], false);
    assert_eq!(bonjuk["evidenceUrl"], "https://b.example/rice");
    assert_eq!(bonjuk["region"]["sido"], "경기도");
    assert_eq!(bonjuk["region"]["sigungu"], "성남시");
    // No native place link: map link falls back to the search URL.
    let map_url = bonjuk["naverMapUrl"].as_str().unwrap();
    assert!(map_url.starts_with("https://map.naver.com/p/search/"));
    assert_eq!(bonjuk["naverMapUrl"], bonjuk["naverReservationUrl"]);

    // Classification backfilled the base 국밥 record.
    let gukbap = records.iter().find(|r| r["name"] == "시장국밥").unwrap();
    assert_eq!(gukbap["category"], "한식");
    assert_eq!(gukbap["categoryDetail"], "백반/정식");
    assert!(gukbap["searchTags"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("국밥")));

    // Canonical CSV: BOM, 17 columns, one line per merged record.
    let csv_bytes = fs::read(ws.root.join("output/merged.csv")).unwrap();
    assert_eq!(&csv_bytes[..3], [0xEF, 0xBB, 0xBF]);
    let csv_text = String::from_utf8(csv_bytes).unwrap();
    assert_eq!(csv_text.lines().count(), 1 + 3);

    // Manual-review queue covers only source A.
    let queue =
        fs::read_to_string(ws.root.join("output/pdf_manual_review_queue.csv")).unwrap();
    assert!(queue.contains("fa,죽이야기"));
    assert!(!queue.contains("fb"));
}

#[tokio::test]
async fn test_run_without_failures_writes_no_queue() {
    let ws = Workspace::new("clean");
    ws.write("input/base.csv", "상호명,대표주소\n밥집,부산광역시 중구\n");
    ws.write(
        "input/sources/franchise_sources.csv",
        "source_id,브랜드명,매장리스트URL,매장데이터URL,데이터형식,좋은쌀근거URL,좋은쌀근거문구\n",
    );
    ws.write(
        "input/sources/municipality_sources.csv",
        "source_id,지자체명,리스트URL,형식,근거문구키워드\n",
    );

    let summary = run_pipeline(&ws.config(), &MockFetcher::new()).await.unwrap();
    assert!(summary.is_success());
    assert_eq!(summary.merged_records, 1);
    assert!(!ws.root.join("output/pdf_manual_review_queue.csv").exists());
}

#[tokio::test]
async fn test_unreadable_base_aborts_run() {
    let ws = Workspace::new("nobase");
    ws.write(
        "input/sources/franchise_sources.csv",
        "source_id,브랜드명,매장리스트URL,매장데이터URL,데이터형식,좋은쌀근거URL,좋은쌀근거문구\n",
    );
    ws.write(
        "input/sources/municipality_sources.csv",
        "source_id,지자체명,리스트URL,형식,근거문구키워드\n",
    );

    let err = run_pipeline(&ws.config(), &MockFetcher::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("base listing"));
}

#[tokio::test]
async fn test_missing_url_source_recorded_without_fetch() {
    let ws = Workspace::new("nourl");
    ws.write("input/base.csv", "상호명,대표주소\n밥집,부산광역시 중구\n");
    ws.write(
        "input/sources/franchise_sources.csv",
        "source_id,브랜드명,매장리스트URL,매장데이터URL,데이터형식,좋은쌀근거URL,좋은쌀근거문구\n\
         fx,무주소브랜드,,,html,,\n",
    );
    ws.write(
        "input/sources/municipality_sources.csv",
        "source_id,지자체명,리스트URL,형식,근거문구키워드\n",
    );

    let fetcher = MockFetcher::new();
    let summary = run_pipeline(&ws.config(), &fetcher).await.unwrap();

    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].error, "missing-url");
    assert_eq!(fetcher.call_count(), 0);
}
