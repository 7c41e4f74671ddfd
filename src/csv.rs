// src/csv.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{or_unknown, ScoutRecord};

/* ---------------- Layout ---------------- */

pub const HEADERS: [&str; 19] = [
    "id", "timestamp", "youthteam_id", "name", "age", "speciality",
    "gk", "def", "pm", "w", "pa", "sc", "overall", "selected",
    "scout_name", "scout_age", "scout_country", "scout_region", "scout_focus",
];

/// Free-text columns, written inside double quotes.
/// name, speciality, scout_name, scout_country, scout_region, scout_focus
const QUOTED_COLUMNS: [usize; 6] = [3, 5, 14, 16, 17, 18];

/// One snapshot line, cells unquoted. `fields[0]` is the id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvRow {
    pub fields: Vec<String>,
}

impl CsvRow {
    /// Row shape of a record, id left blank. Absent values become sentinels here.
    pub fn from_record(r: &ScoutRecord) -> Self {
        let fields = vec![
            s!(),
            r.timestamp_iso(),
            s!(or_unknown(&r.team_id)),
            s!(or_unknown(&r.name)),
            r.age.unwrap_or(0).to_string(),
            s!(or_unknown(&r.speciality)),
            s!(or_unknown(&r.skills.gk)),
            s!(or_unknown(&r.skills.def)),
            s!(or_unknown(&r.skills.pm)),
            s!(or_unknown(&r.skills.w)),
            s!(or_unknown(&r.skills.pa)),
            s!(or_unknown(&r.skills.sc)),
            s!(or_unknown(&r.skills.overall)),
            r.selected.to_string(),
            s!(or_unknown(&r.scout.name)),
            s!(or_unknown(&r.scout.age)),
            s!(or_unknown(&r.scout.country)),
            s!(or_unknown(&r.scout.region)),
            s!(or_unknown(&r.scout.focus)),
        ];
        Self { fields }
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Overwrite the id cell. A row that came back empty from parsing gets one pushed.
    pub fn set_id(&mut self, id: usize) {
        match self.fields.first_mut() {
            Some(cell) => *cell = id.to_string(),
            None => self.fields.push(id.to_string()),
        }
    }
}

/* ---------------- Writing ---------------- */

/// One row, no trailing newline. Quotes inside free text are not
/// escaped; such a value will split the row when read back.
pub fn format_row(row: &CsvRow) -> String {
    row.fields
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if !QUOTED_COLUMNS.contains(&i) {
                return cell.clone();
            }
            if cell.contains('"') {
                logw!("CSV: column {} holds a double quote, row {} will not read back cleanly",
                    HEADERS.get(i).unwrap_or(&"?"), row.id().unwrap_or("?"));
            }
            format!("\"{cell}\"")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Header plus rows, joined by '\n' (no trailing newline).
pub fn rows_to_string(rows: &[CsvRow]) -> String {
    std::iter::once(HEADERS.join(","))
        .chain(rows.iter().map(format_row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records in collection order, ids 1..=N.
pub fn to_rows(records: &[ScoutRecord]) -> Vec<CsvRow> {
    let mut rows: Vec<CsvRow> = records.iter().map(CsvRow::from_record).collect();
    renumber(&mut rows);
    rows
}

/// Full snapshot text of a collection.
pub fn to_snapshot(records: &[ScoutRecord]) -> String {
    rows_to_string(&to_rows(records))
}

/// Ids become 1-based positions, whatever they were before.
pub fn renumber(rows: &mut [CsvRow]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.set_id(i + 1);
    }
}

/* ---------------- Parsing ---------------- */

/// A quoted run, or a run without commas.
fn field_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(r#""[^"]*"|[^,]+"#) {
        Ok(re) => Some(re),
        Err(e) => {
            loge!("CSV: field pattern failed to compile: {e}");
            None
        }
    })
    .as_ref()
}

/// Lenient snapshot reader for the remote merge.
///
/// Drops the first line (header) and blank lines. Each other line is split
/// into quoted runs or comma-free runs; one surrounding quote pair is
/// stripped. Empty cells between two commas are not kept, so a row with
/// one collapses left. Malformed lines are carried through as they come.
pub fn parse_snapshot(text: &str) -> Vec<CsvRow> {
    let Some(re) = field_regex() else { return Vec::new() };
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let fields = re.find_iter(line).map(|m| s!(unquote(m.as_str()))).collect();
            CsvRow { fields }
        })
        .collect()
}

fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
