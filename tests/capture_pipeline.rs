// tests/capture_pipeline.rs
use std::fs;

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use ht_scout::csv::{parse_snapshot, HEADERS};
use ht_scout::notice::Level;
use ht_scout::page::html::HtmlPage;
use ht_scout::runner;
use ht_scout::scrape::collect_records;
use ht_scout::store::{load_collection, save_new, MemoryStore, SaveOutcome};

const PAGE: &str = include_str!("fixtures/youth_scouts.html");

#[test]
fn fixture_page_extracts_every_prospect() {
    let page = HtmlPage::parse(PAGE);
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap();
    let recs = collect_records(&page, now);
    assert_eq!(recs.len(), 3);

    let jan = &recs[0];
    assert_eq!(jan.team_id.as_deref(), Some("2345678"));
    assert_eq!(jan.name.as_deref(), Some("Jan Novák"));
    assert_eq!(jan.age, Some(16));
    assert_eq!(jan.speciality.as_deref(), Some("Quick"));
    assert_eq!(jan.skills.gk.as_deref(), Some("1"));
    assert_eq!(jan.skills.sc.as_deref(), Some("5"));
    assert_eq!(jan.skills.overall.as_deref(), Some("4"));
    assert!(jan.selected);
    assert_eq!(jan.scout.name.as_deref(), Some("Petr Malý"));
    assert_eq!(jan.scout.age.as_deref(), Some("41"));
    assert_eq!(jan.scout.country.as_deref(), Some("Czech Republic"));
    assert_eq!(jan.scout.region.as_deref(), Some("Jihomoravský"));
    assert_eq!(jan.scout.focus.as_deref(), Some("Forward"));

    let tomas = &recs[1];
    assert_eq!(tomas.age, Some(15));
    assert_eq!(tomas.speciality, None);
    assert_eq!(tomas.skills.gk.as_deref(), Some("6"));
    assert_eq!(tomas.skills.overall, None);
    assert!(!tomas.selected);
    assert_eq!(tomas.scout.name.as_deref(), Some("Eva Králová"));
    assert_eq!(tomas.scout.region.as_deref(), Some("Whole country"));
    // No explicit value and no selected option: the first option counts.
    assert_eq!(tomas.scout.focus.as_deref(), Some("Keeper"));

    // First name only, no skills table, no third scout card.
    let marek = &recs[2];
    assert_eq!(marek.name.as_deref(), Some("Marek"));
    assert_eq!(marek.age, None);
    assert_eq!(marek.skills, Default::default());
    assert_eq!(marek.scout, Default::default());
    assert_eq!(marek.team_id.as_deref(), Some("2345678"));
}

#[test]
fn recapture_within_a_day_adds_nothing() {
    let page = HtmlPage::parse(PAGE);
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap();
    let mut store = MemoryStore::default();

    let first = save_new(&mut store, &collect_records(&page, t0)).unwrap();
    assert_eq!(first, SaveOutcome::Saved { added: 3, total: 3 });

    let again = save_new(&mut store, &collect_records(&page, t0 + Duration::hours(23))).unwrap();
    assert_eq!(again, SaveOutcome::NothingNew { candidates: 3 });

    let next_day = save_new(&mut store, &collect_records(&page, t0 + Duration::hours(25))).unwrap();
    assert_eq!(next_day, SaveOutcome::Saved { added: 3, total: 6 });
}

#[test]
fn capture_then_export_writes_dated_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let page_path = tmp.path().join("scouts.html");
    fs::write(&page_path, PAGE).unwrap();

    let mut store = MemoryStore::default();
    let n = runner::capture_page(&mut store, &page_path);
    assert_eq!(n.level, Level::Success);
    assert_eq!(n.message, "Saved 3 new players from scouting");
    assert_eq!(load_collection(&store).unwrap().len(), 3);

    let out_dir = tmp.path().join("out");
    let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let n = runner::export(&store, &out_dir, day);
    assert_eq!(n.message, "Exported 3 records");

    let text = fs::read_to_string(out_dir.join("hattrick_scouts_2024-03-02.csv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADERS.join(",").as_str()));

    let rows = parse_snapshot(&text);
    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows.iter().map(|r| r.fields[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(rows[0].fields[3], "Jan Novák");
    assert_eq!(rows[2].fields[4], "0");
    assert_eq!(rows[2].fields[12], "unknown");
}
