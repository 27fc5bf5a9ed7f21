//! Contact search.
//!
//! Narrows the contact table by name and category. Both predicates must
//! hold, and matching rows keep their original order.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::error::{Error, Result};
use crate::record::{Category, Contact};

/// Category selector for the contact search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Journalists only.
    Journalist,
    /// Influencers only.
    Influencer,
}

impl CategoryFilter {
    /// Check if a contact category passes this selector.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Journalist => category == Category::Journalist,
            Self::Influencer => category == Category::Influencer,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Journalist => Self::Journalist,
            Category::Influencer => Self::Influencer,
        }
    }
}

/// How the name field is matched.
#[derive(Debug, Clone, Default)]
enum NamePattern {
    /// No name predicate.
    #[default]
    Any,
    /// Case-insensitive substring, stored lowercased.
    Substring(String),
    /// Case-insensitive regular expression.
    Regex(Regex),
}

impl NamePattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
            Self::Regex(regex) => regex.is_match(name),
        }
    }
}

/// Search over the contact table.
///
/// # Example
///
/// ```
/// use pressbook::filter::{CategoryFilter, ContactFilter};
/// use pressbook::record::{Category, Contact};
///
/// let contacts = vec![
///     Contact { name: "Alice".into(), ..Contact::default() },
///     Contact { name: "Bob".into(), category: Category::Influencer, ..Contact::default() },
/// ];
///
/// let filter = ContactFilter::new()
///     .with_substring("ALI")
///     .with_category(CategoryFilter::Journalist);
/// let found = filter.apply(&contacts);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Alice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    name: NamePattern,
    category: CategoryFilter,
}

impl ContactFilter {
    /// A filter that matches every contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match names containing `pattern`, ignoring case.
    ///
    /// An empty pattern matches every name.
    #[must_use]
    pub fn with_substring(mut self, pattern: &str) -> Self {
        self.name = if pattern.is_empty() {
            NamePattern::Any
        } else {
            NamePattern::Substring(pattern.to_lowercase())
        };
        self
    }

    /// Match names against a case-insensitive regular expression.
    ///
    /// An empty pattern matches every name.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn with_regex(mut self, pattern: &str) -> Result<Self> {
        self.name = if pattern.is_empty() {
            NamePattern::Any
        } else {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            NamePattern::Regex(regex)
        };
        Ok(self)
    }

    /// Restrict to one category, or [`CategoryFilter::All`].
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Check if a single contact passes both predicates.
    #[must_use]
    pub fn matches(&self, contact: &Contact) -> bool {
        self.category.matches(contact.category) && self.name.matches(&contact.name)
    }

    /// Return the matching contacts, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        let matched: Vec<&Contact> = contacts.iter().filter(|c| self.matches(c)).collect();
        trace!(
            total = contacts.len(),
            matched = matched.len(),
            "Applied contact filter"
        );
        matched
    }
}
