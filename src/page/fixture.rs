// src/page/fixture.rs
//
// In-memory page for extractor tests: cards are plain structs, no markup.

use super::{Choice, ChoiceControl, Landmark, PageAdapter, SkillRow};

#[derive(Clone, Debug, Default)]
pub struct FixtureCard {
    pub name_fragments: Vec<String>,
    pub age: Option<String>,
    pub speciality: Option<String>,
    pub skill_rows: Vec<SkillRow>,
    pub selected: bool,
    pub country: Option<String>,
    pub region: Option<ChoiceControl>,
    pub focus: Option<ChoiceControl>,
}

#[derive(Clone, Debug, Default)]
pub struct FixturePage {
    pub byline: Option<String>,
    pub prospects: Vec<FixtureCard>,
    pub scouts: Vec<FixtureCard>,
}

impl FixtureCard {
    pub fn named(parts: &[&str]) -> Self {
        Self {
            name_fragments: parts.iter().map(|p| s!(*p)).collect(),
            ..Self::default()
        }
    }

    pub fn skill(mut self, label: &str, value: &str) -> Self {
        self.skill_rows.push(SkillRow { label: Some(s!(label)), value: Some(s!(value)) });
        self
    }
}

pub fn choice(value: &str, options: &[(&str, &str)]) -> ChoiceControl {
    ChoiceControl {
        value: Some(s!(value)),
        options: options.iter().map(|(v, l)| (s!(*v), s!(*l))).collect(),
    }
}

impl PageAdapter for FixturePage {
    type Node<'a> = &'a FixtureCard;

    fn find_prospects<'a>(&'a self) -> Vec<&'a FixtureCard> {
        self.prospects.iter().collect()
    }

    fn find_scouts<'a>(&'a self) -> Vec<&'a FixtureCard> {
        self.scouts.iter().collect()
    }

    fn read_labeled_text<'a>(&'a self, node: &'a FixtureCard, label: Landmark) -> Vec<String> {
        match label {
            Landmark::NameFragment => node.name_fragments.clone(),
            Landmark::Age => node.age.iter().cloned().collect(),
            Landmark::Speciality => node.speciality.iter().cloned().collect(),
            Landmark::CriteriaCountry => node.country.iter().cloned().collect(),
        }
    }

    fn read_skill_rows<'a>(&'a self, node: &'a FixtureCard) -> Vec<SkillRow> {
        node.skill_rows.clone()
    }

    fn is_selected<'a>(&'a self, node: &'a FixtureCard) -> bool {
        node.selected
    }

    fn read_choice<'a>(&'a self, scout: &'a FixtureCard, choice: Choice) -> Option<ChoiceControl> {
        match choice {
            Choice::Region => scout.region.clone(),
            Choice::Focus => scout.focus.clone(),
        }
    }

    fn byline(&self) -> Option<String> {
        self.byline.clone()
    }
}
