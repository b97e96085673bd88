//! Structured person names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person's name as separate first and last parts.
///
/// # Examples
///
/// ```
/// use lease_models::records::PersonName;
///
/// let name = PersonName::from_full_name("Mary Ann Smith");
/// assert_eq!(name.first, "Mary Ann");
/// assert_eq!(name.last, "Smith");
/// assert_eq!(name.display_name(), "Mary Ann Smith");
/// assert_eq!(name.sort_key(), "Smith, Mary Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name(s).
    pub first: String,
    /// Family name.
    pub last: String,
}

impl PersonName {
    /// Creates a name from its parts, trimming whitespace.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into().trim().to_string(),
            last: last.into().trim().to_string(),
        }
    }

    /// Splits a single full-name string on its last whitespace run.
    ///
    /// A one-word name becomes the first name with an empty last name.
    pub fn from_full_name(full: &str) -> Self {
        let collapsed = full.split_whitespace().collect::<Vec<_>>().join(" ");
        match collapsed.rsplit_once(' ') {
            Some((first, last)) => Self::new(first, last),
            None => Self::new(collapsed, ""),
        }
    }

    /// Returns whether both parts are empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }

    /// "First Last", without stray spaces when a part is missing.
    pub fn display_name(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (false, false) => format!("{} {}", self.first, self.last),
            (false, true) => self.first.clone(),
            (true, false) => self.last.clone(),
            (true, true) => String::new(),
        }
    }

    /// "Last, First" for sorted listings.
    pub fn sort_key(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (false, false) => format!("{}, {}", self.last, self.first),
            _ => self.display_name(),
        }
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
