// src/scrape/extract.rs
//
// Field reads for one prospect card and its scout. Every read is
// best-effort: anything missing comes back as `None` and the record keeps
// going with the rest of its fields.

use crate::core::sanitize::{clean, parse_leading_int, strip_years};
use crate::model::{ScoutInfo, Skills};
use crate::page::{Choice, ChoiceControl, Landmark, PageAdapter};

/// Name, age and speciality of one prospect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub speciality: Option<String>,
}

/// Two fragments → "First Last"; one → as is; none → absent.
pub fn join_name(fragments: &[String]) -> Option<String> {
    let joined = match fragments {
        [first, second, ..] => format!("{} {}", first.trim(), second.trim()),
        [only] => s!(only.trim()),
        [] => return None,
    };
    clean(Some(joined))
}

fn first_text<'a, P: PageAdapter>(page: &'a P, node: P::Node<'a>, label: Landmark) -> Option<String> {
    page.read_labeled_text(node, label).into_iter().next()
}

pub fn player_info<'a, P: PageAdapter>(page: &'a P, card: P::Node<'a>) -> PlayerInfo {
    let name = join_name(&page.read_labeled_text(card, Landmark::NameFragment));

    let age = first_text(page, card, Landmark::Age)
        .and_then(|t| parse_leading_int(&strip_years(&t)))
        .filter(|&a| a != 0);

    let speciality = clean(first_text(page, card, Landmark::Speciality));

    PlayerInfo { name, age, speciality }
}

/// Walk the skills table. Rows are matched on their lower-cased label;
/// anything that isn't one of the seven slots is skipped. A later row for
/// the same slot overwrites an earlier one.
pub fn skills<'a, P: PageAdapter>(page: &'a P, card: P::Node<'a>) -> Skills {
    let mut out = Skills::default();

    for row in page.read_skill_rows(card) {
        let Some(label) = row.label.map(|l| l.trim().to_lowercase()) else { continue };
        let slot = match label.as_str() {
            "keeper" => &mut out.gk,
            "defending" => &mut out.def,
            "playmaking" => &mut out.pm,
            "winger" => &mut out.w,
            "passing" => &mut out.pa,
            "scoring" => &mut out.sc,
            "overall" => &mut out.overall,
            _ => continue,
        };
        *slot = clean(row.value);
    }
    out
}

/// Label of the option whose value is the control's current value.
pub fn resolve_choice(control: &ChoiceControl) -> Option<String> {
    let value = control.value.as_deref().filter(|v| !v.is_empty())?;
    let label = control
        .options
        .iter()
        .find(|(v, _)| v == value)
        .map(|(_, label)| label.clone());
    clean(label)
}

/// Scout `index` of `scouts`. Scouts and prospects are paired by position;
/// past the end of the scout list everything is absent.
pub fn scout_info<'a, P: PageAdapter>(page: &'a P, scouts: &[P::Node<'a>], index: usize) -> ScoutInfo {
    let Some(&scout) = scouts.get(index) else {
        logd!("Capture: no scout card at index {index} (have {})", scouts.len());
        return ScoutInfo::default();
    };

    ScoutInfo {
        name: join_name(&page.read_labeled_text(scout, Landmark::NameFragment)),
        age: clean(first_text(page, scout, Landmark::Age).map(|t| strip_years(&t))),
        country: clean(first_text(page, scout, Landmark::CriteriaCountry)),
        region: page.read_choice(scout, Choice::Region).and_then(|c| resolve_choice(&c)),
        focus: page.read_choice(scout, Choice::Focus).and_then(|c| resolve_choice(&c)),
    }
}
