//! Template sections and their layouts.
//!
//! Fragments are collected as if every entry were non-terminal. The only
//! place that knows about "last element" syntax is [`SectionLayout::finish`]:
//! it appends the terminator to every entry but the last, and the closer to
//! the last.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::codegen::Fragment;

/// A named, ordered bucket of fragments substituted into the template.
///
/// The string form matches the template placeholder name.
///
/// ## Examples
///
/// ```
/// use orim_gen::section::Section;
///
/// assert_eq!(Section::CreateOnlys.to_string(), "createOnlys");
/// let placeholder: &str = Section::Varnames.as_ref();
/// assert_eq!(placeholder, "varnames");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Section {
    /// Static field-name key constants
    Varnames,
    /// Default-value map for new instances
    Defvals,
    /// Read accessors
    Getters,
    /// `is<Field>Valid` predicates
    Validators,
    /// Serialized payload elements
    Payloads,
    /// Creation-time validation guard clauses
    Newvalids,
    /// Update-payload stripping of create-only fields
    CreateOnlys,
    /// Pattern-matcher declarations
    Patterns,
    /// Input transforms for received payloads
    Transforms,
}

impl Section {
    /// Sections a model object template expects, in declaration order.
    pub const TEMPLATE_ORDER: [Section; 8] = [
        Section::Varnames,
        Section::Defvals,
        Section::Getters,
        Section::Validators,
        Section::Payloads,
        Section::Newvalids,
        Section::CreateOnlys,
        Section::Patterns,
    ];

    /// How the section's entries are terminated and joined.
    pub fn layout(self) -> SectionLayout {
        match self {
            Section::Defvals => SectionLayout {
                terminator: Some(","),
                closer: Some("})"),
                joiner: "\n             ",
            },
            Section::Payloads => SectionLayout {
                terminator: Some(","),
                closer: None,
                joiner: "\n      ",
            },
            Section::Varnames | Section::Getters | Section::Validators => {
                SectionLayout::lines("\n  ")
            }
            Section::Newvalids | Section::CreateOnlys | Section::Transforms => {
                SectionLayout::lines("\n    ")
            }
            Section::Patterns => SectionLayout::lines("\n"),
        }
    }
}

/// Join-with-separator, wrap-with-suffix combinator for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Appended to every entry except the last.
    pub terminator: Option<&'static str>,
    /// Appended to the last entry.
    pub closer: Option<&'static str>,
    /// Placed between entries when the section is joined into one string.
    pub joiner: &'static str,
}

impl SectionLayout {
    /// Plain line-per-entry layout with no separators.
    pub const fn lines(joiner: &'static str) -> Self {
        Self {
            terminator: None,
            closer: None,
            joiner,
        }
    }

    /// Produces the final entry texts. An empty section stays empty.
    pub fn finish(&self, fragments: &[Fragment]) -> Vec<String> {
        let last = fragments.len().saturating_sub(1);
        fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| {
                let suffix = if index < last {
                    self.terminator
                } else {
                    self.closer
                };
                match suffix {
                    Some(suffix) => format!("{}{suffix}", fragment.code),
                    None => fragment.code.clone(),
                }
            })
            .collect()
    }
}
