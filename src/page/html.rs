// src/page/html.rs
//
// Saved youth-scouts page, read through the CSS landmarks the live page
// exposes. Selectors are matched leniently: any miss is just "absent".

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use super::{Choice, ChoiceControl, Landmark, PageAdapter, SkillRow};
use crate::error::Result;

const PROSPECT_CARD: &str = "app-scout-prospect";
const SCOUT_CARD: &str = "app-scout-card, .scout-card";
const NAME_FRAGMENT: &str = ".scout-details-text-name b";
const AGE: &str = ".scout-details-text-age";
const SKILL_GROUP: &str = ".skill-group-content";
const SKILL_GROUP_LABEL: &str = "span";
const SKILL_ROW: &str = "table.skilltable tr";
const SKILL_LABEL_CELL: &str = "td:first-child";
const SKILL_NUMBER: &str = "ht-skill-number";
const SELECTED_BUTTON: &str = r#".scout-prospects-select.primary-button[value="Selected"]"#;
const SEARCH_CRITERIA: &str = "app-scout-search-criteria";
const CRITERIA_COUNTRY: &str = ".scout-search-criteria-country";
const CRITERIA_REGION: &str = ".scout-search-criteria-region";
const CRITERIA_FOCUS: &str = ".scout-search-criteria-player-type";
const OPTION: &str = "option";
const BYLINE: &str = ".hasByline";

pub struct HtmlPage {
    doc: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html) }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        logd!("Page: loaded {} ({} bytes)", path.display(), text.len());
        Ok(Self::parse(&text))
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Page: bad selector `{css}`: {e:?}");
            None
        }
    }
}

/// Element text, trimmed at the ends only; inner spacing stays as shown.
fn text_of(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

fn first_within<'a>(node: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    node.select(&sel).next()
}

fn texts_within(node: ElementRef<'_>, css: &str) -> Vec<String> {
    match selector(css) {
        Some(sel) => node.select(&sel).map(text_of).collect(),
        None => Vec::new(),
    }
}

/// The search-criteria block sits next to the scout card, under the same parent.
fn criteria_of(scout: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let parent = scout.parent().and_then(ElementRef::wrap)?;
    first_within(parent, SEARCH_CRITERIA)
}

/// Current value the way a browser reports it: an explicit `value` on the
/// control, else the `selected` option, else the first option.
fn control_value(control: ElementRef<'_>, options: &[ElementRef<'_>]) -> Option<String> {
    if let Some(v) = control.value().attr("value") {
        return Some(s!(v));
    }
    let option_value = |o: &ElementRef<'_>| {
        o.value().attr("value").map(|v| s!(v)).unwrap_or_else(|| text_of(*o))
    };
    options
        .iter()
        .find(|o| o.value().attr("selected").is_some())
        .or_else(|| options.first())
        .map(option_value)
}

impl PageAdapter for HtmlPage {
    type Node<'a> = ElementRef<'a>;

    fn find_prospects<'a>(&'a self) -> Vec<ElementRef<'a>> {
        match selector(PROSPECT_CARD) {
            Some(sel) => self.doc.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn find_scouts<'a>(&'a self) -> Vec<ElementRef<'a>> {
        match selector(SCOUT_CARD) {
            Some(sel) => self.doc.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn read_labeled_text<'a>(&'a self, node: ElementRef<'a>, label: Landmark) -> Vec<String> {
        match label {
            Landmark::NameFragment => texts_within(node, NAME_FRAGMENT),
            Landmark::Age => first_within(node, AGE).map(text_of).into_iter().collect(),
            Landmark::Speciality => first_within(node, SKILL_GROUP)
                .and_then(|group| first_within(group, SKILL_GROUP_LABEL))
                .map(text_of)
                .into_iter()
                .collect(),
            Landmark::CriteriaCountry => criteria_of(node)
                .and_then(|c| first_within(c, CRITERIA_COUNTRY))
                .map(text_of)
                .into_iter()
                .collect(),
        }
    }

    fn read_skill_rows<'a>(&'a self, node: ElementRef<'a>) -> Vec<SkillRow> {
        let Some(row_sel) = selector(SKILL_ROW) else { return Vec::new() };
        node.select(&row_sel)
            .map(|row| SkillRow {
                label: first_within(row, SKILL_LABEL_CELL).map(text_of),
                value: first_within(row, SKILL_NUMBER).map(text_of),
            })
            .collect()
    }

    fn is_selected<'a>(&'a self, node: ElementRef<'a>) -> bool {
        first_within(node, SELECTED_BUTTON).is_some()
    }

    fn read_choice<'a>(&'a self, scout: ElementRef<'a>, choice: Choice) -> Option<ChoiceControl> {
        let css = match choice {
            Choice::Region => CRITERIA_REGION,
            Choice::Focus => CRITERIA_FOCUS,
        };
        let control = first_within(criteria_of(scout)?, css)?;

        let option_els: Vec<ElementRef<'a>> = match selector(OPTION) {
            Some(sel) => control.select(&sel).collect(),
            None => Vec::new(),
        };
        let value = control_value(control, &option_els);
        // Only options with an explicit value can be looked up by value.
        let options = option_els
            .iter()
            .filter_map(|o| o.value().attr("value").map(|v| (s!(v), text_of(*o))))
            .collect();

        Some(ChoiceControl { value, options })
    }

    fn byline(&self) -> Option<String> {
        let sel = selector(BYLINE)?;
        self.doc.select(&sel).next().map(text_of)
    }
}
