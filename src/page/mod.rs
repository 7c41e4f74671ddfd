// src/page/mod.rs
//! # Page adapters
//!
//! The extractor never touches markup directly. It asks a `PageAdapter` for
//! prospect and scout nodes and for the few labelled values it needs; the
//! adapter decides where those live in the page.
//!
//! - `html::HtmlPage` reads a saved youth-scouts page with CSS landmarks.
//! - Tests build small in-memory trees (`fixture`) to drive the extractor
//!   without any HTML at all.
//!
//! Adapters are infallible by contract: a missing element is an empty `Vec`
//! or `None`, never an error. That is what lets one broken card degrade to
//! sentinels without touching its siblings.

pub mod html;

#[cfg(test)]
pub(crate) mod fixture;

/// Labelled text regions read off a prospect or scout card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    /// Bold name pieces (first name, last name)
    NameFragment,
    /// "17 years and 23 days"
    Age,
    /// First label inside the skill-group content
    Speciality,
    /// Country line of the scout's search criteria
    CriteriaCountry,
}

/// Drop-down controls in the scout's search criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Region,
    Focus,
}

/// One row of the skills table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillRow {
    /// Text of the first cell, as shown
    pub label: Option<String>,
    /// Text of the skill-number cell, as shown
    pub value: Option<String>,
}

/// A choice control: its current value plus the options it offers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceControl {
    pub value: Option<String>,
    /// (value, label) in document order
    pub options: Vec<(String, String)>,
}

pub trait PageAdapter {
    type Node<'a>: Copy
    where
        Self: 'a;

    /// Prospect cards in page order.
    fn find_prospects<'a>(&'a self) -> Vec<Self::Node<'a>>;

    /// Scout cards in page order.
    fn find_scouts<'a>(&'a self) -> Vec<Self::Node<'a>>;

    /// Text of every element under `node` carrying `label`, in page order.
    fn read_labeled_text<'a>(&'a self, node: Self::Node<'a>, label: Landmark) -> Vec<String>;

    fn read_skill_rows<'a>(&'a self, node: Self::Node<'a>) -> Vec<SkillRow>;

    /// Whether the prospect's select button is in its "Selected" state.
    fn is_selected<'a>(&'a self, node: Self::Node<'a>) -> bool;

    /// A drop-down from the scout's search criteria, if present.
    fn read_choice<'a>(&'a self, scout: Self::Node<'a>, choice: Choice) -> Option<ChoiceControl>;

    /// Page byline text (carries the youth team id).
    fn byline(&self) -> Option<String>;
}
