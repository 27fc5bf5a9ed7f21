//! The press book: the three tables kept in one data directory.
//!
//! Every operation here is one complete interaction cycle. The affected table
//! is read in full, at most one row is appended, and the table is rewritten
//! only when a row was appended.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::ContactFilter;
use crate::record::{Contact, EventTask, Release};
use crate::storage::{StoreStats, Table};

/// Handle on a data directory holding the contact, release and event stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressBook {
    dir: PathBuf,
}

impl PressBook {
    /// Use `dir` as the data directory. Nothing is created until a table is
    /// first loaded.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the contact table, creating its store if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created or read.
    pub fn contacts(&self) -> Result<Table<Contact>> {
        Table::load_or_init(&self.dir)
    }

    /// Load the release table, creating its store if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created or read.
    pub fn releases(&self) -> Result<Table<Release>> {
        Table::load_or_init(&self.dir)
    }

    /// Load the event task table, creating its store if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created or read.
    pub fn events(&self) -> Result<Table<EventTask>> {
        Table::load_or_init(&self.dir)
    }

    /// Load the contacts and keep those matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created or read.
    pub fn search_contacts(&self, filter: &ContactFilter) -> Result<Vec<Contact>> {
        let table = self.contacts()?;
        Ok(filter.apply(table.rows()).into_iter().cloned().collect())
    }

    /// Distinct contact names, in order of first appearance.
    ///
    /// These are the options offered when recording a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the contact store cannot be created or read.
    pub fn contact_names(&self) -> Result<Vec<String>> {
        let table = self.contacts()?;
        Ok(distinct_names(table.rows()))
    }

    /// Append a contact and persist the contact table.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn add_contact(&self, contact: Contact) -> Result<Table<Contact>> {
        let mut table = self.contacts()?;
        table.append_and_save(contact)?;
        Ok(table)
    }

    /// Append a release and persist the release table.
    ///
    /// The release must name one of the current contacts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContacts`] if there are no contacts to choose from,
    /// [`Error::UnknownContact`] if the name isn't one of them, or an error if
    /// a store cannot be read or written.
    pub fn add_release(&self, release: Release) -> Result<Table<Release>> {
        let names = self.contact_names()?;
        check_contact(&names, &release.contact_name)?;

        let mut table = self.releases()?;
        table.append_and_save(release)?;
        Ok(table)
    }

    /// Append an event task and persist the event table.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn add_event(&self, task: EventTask) -> Result<Table<EventTask>> {
        let mut table = self.events()?;
        table.append_and_save(task)?;
        Ok(table)
    }

    /// Inspect all three stores without creating any of them.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store cannot be parsed.
    pub fn stats(&self) -> Result<Vec<StoreStats>> {
        Ok(vec![
            StoreStats::collect::<Contact>(&self.dir)?,
            StoreStats::collect::<Release>(&self.dir)?,
            StoreStats::collect::<EventTask>(&self.dir)?,
        ])
    }
}

/// Distinct names of `contacts`, in order of first appearance.
#[must_use]
pub fn distinct_names(contacts: &[Contact]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for contact in contacts {
        if !names.contains(&contact.name) {
            names.push(contact.name.clone());
        }
    }
    names
}

/// Check that `name` is one of the selectable contact names.
///
/// # Errors
///
/// Returns [`Error::NoContacts`] if `names` is empty, or
/// [`Error::UnknownContact`] if `name` isn't in it.
pub fn check_contact(names: &[String], name: &str) -> Result<()> {
    if names.is_empty() {
        return Err(Error::NoContacts);
    }
    if !names.iter().any(|n| n == name) {
        debug!(name, options = names.len(), "Rejected release for unknown contact");
        return Err(Error::unknown_contact(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::record::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn contact(name: &str, category: Category) -> Contact {
        Contact {
            name: name.to_string(),
            category,
            ..Contact::default()
        }
    }

    fn release(contact_name: &str) -> Release {
        Release {
            contact_name: contact_name.to_string(),
            release_name: "Launch".to_string(),
            send_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_new_does_not_touch_disk() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        let book = PressBook::new(&data);

        assert_eq!(book.dir(), data);
        assert!(!data.exists());
    }

    #[test]
    fn test_distinct_names_keep_first_appearance() {
        let contacts = vec![
            contact("Bob", Category::Influencer),
            contact("Alice", Category::Journalist),
            contact("Bob", Category::Journalist),
        ];
        assert_eq!(distinct_names(&contacts), ["Bob", "Alice"]);
    }

    #[test]
    fn test_add_release_without_contacts() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());

        let err = book.add_release(release("Alice")).unwrap_err();
        assert!(matches!(err, Error::NoContacts));
        assert!(book.releases().unwrap().is_empty());
    }

    #[test]
    fn test_add_release_unknown_contact() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());
        book.add_contact(contact("Alice", Category::Journalist))
            .unwrap();

        let err = book.add_release(release("Zoe")).unwrap_err();
        assert!(matches!(err, Error::UnknownContact { ref name } if name == "Zoe"));
        assert!(book.releases().unwrap().is_empty());
    }

    #[test]
    fn test_add_release_known_contact() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());
        book.add_contact(contact("Alice", Category::Journalist))
            .unwrap();

        let table = book.add_release(release("Alice")).unwrap();
        assert_eq!(table.rows(), &[release("Alice")]);
    }

    #[test]
    fn test_add_contact_returns_updated_table() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());

        book.add_contact(contact("Alice", Category::Journalist))
            .unwrap();
        let table = book.add_contact(contact("Bob", Category::Influencer)).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.last().map(|c| c.name.as_str()), Some("Bob"));
    }

    #[test]
    fn test_search_contacts() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());
        for (name, category) in [
            ("Alice", Category::Journalist),
            ("Bob", Category::Influencer),
            ("Alicia", Category::Journalist),
        ] {
            book.add_contact(contact(name, category)).unwrap();
        }

        let filter = ContactFilter::new().with_category(CategoryFilter::Influencer);
        let found = book.search_contacts(&filter).unwrap();
        assert_eq!(found, vec![contact("Bob", Category::Influencer)]);
    }

    #[test]
    fn test_add_event() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());

        let table = book.add_event(EventTask::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(book.events().unwrap().len(), 1);
    }

    #[test]
    fn test_stats_does_not_create_stores() {
        let dir = TempDir::new().unwrap();
        let book = PressBook::new(dir.path());
        book.add_event(EventTask::default()).unwrap();

        let stats = book.stats().unwrap();
        let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["contacts", "releases", "events"]);
        assert!(!stats[0].exists);
        assert!(!stats[1].exists);
        assert!(stats[2].exists);
        assert_eq!(stats[2].rows, 1);
        assert!(!stats[0].path.exists());
    }
}
