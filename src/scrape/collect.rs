// src/scrape/collect.rs
use chrono::{DateTime, Utc};

use super::extract::{player_info, scout_info, skills};
use crate::core::sanitize::first_parenthesized_int;
use crate::model::ScoutRecord;
use crate::page::PageAdapter;

/// Youth team id from the page byline: the first "(digits)" group.
pub fn team_id<P: PageAdapter>(page: &P) -> Option<String> {
    page.byline().as_deref().and_then(first_parenthesized_int)
}

/// One record per prospect card, in page order, all stamped `now`.
///
/// Prospect `i` is paired with scout card `i`. A page with no prospect
/// cards yields nothing.
pub fn collect_records<P: PageAdapter>(page: &P, now: DateTime<Utc>) -> Vec<ScoutRecord> {
    let prospects = page.find_prospects();
    if prospects.is_empty() {
        logf!("Capture: no prospect cards on page");
        return Vec::new();
    }

    let scouts = page.find_scouts();
    let team = team_id(page);
    logf!(
        "Capture: {} prospects, {} scouts, team {}",
        prospects.len(),
        scouts.len(),
        team.as_deref().unwrap_or("?")
    );

    prospects
        .iter()
        .enumerate()
        .map(|(i, &card)| {
            let info = player_info(page, card);
            let rec = ScoutRecord {
                timestamp: now,
                team_id: team.clone(),
                name: info.name,
                age: info.age,
                speciality: info.speciality,
                skills: skills(page, card),
                selected: page.is_selected(card),
                scout: scout_info(page, &scouts, i),
            };
            log_gaps(i, &rec);
            rec
        })
        .collect()
}

fn log_gaps(i: usize, rec: &ScoutRecord) {
    let mut missing = Vec::new();
    if rec.name.is_none() { missing.push("name"); }
    if rec.age.is_none() { missing.push("age"); }
    if rec.speciality.is_none() { missing.push("speciality"); }
    if rec.skills.overall.is_none() { missing.push("overall"); }
    if rec.scout.name.is_none() { missing.push("scout_name"); }

    if !missing.is_empty() {
        logd!("Capture: prospect #{i} fell back on {}", missing.join(", "));
    }
}
