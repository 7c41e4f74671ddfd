// src/scrape/mod.rs
//
// Prospect extraction: per-field reads (extract) and whole-page record
// building (collect). Both work against any `PageAdapter`.
mod extract;
mod collect;

pub use extract::{join_name, player_info, resolve_choice, scout_info, skills, PlayerInfo};
pub use collect::{collect_records, team_id};
