//! Record types for pressbook.
//!
//! This module defines the three row types kept by the press book and the
//! [`Record`] trait that binds each of them to its backing store.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::schema;

/// A row type with a fixed, ordered column schema and a backing store.
///
/// Field order of the implementing struct must match [`Record::COLUMNS`], since
/// rows are written positionally beneath the header.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// File name of the backing store inside the data directory.
    const FILE_NAME: &'static str;

    /// Column names, in storage order.
    const COLUMNS: &'static [&'static str];

    /// Human-readable table name used in logs and status output.
    const LABEL: &'static str;

    /// Field values as display strings, in column order.
    fn fields(&self) -> Vec<String>;

    /// Message shown once this row has been saved.
    fn confirmation(&self) -> String;
}

/// Kind of press contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A journalist writing for an outlet.
    #[default]
    Journalist,
    /// An influencer publishing on their own network.
    Influencer,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Self; 2] = [Self::Journalist, Self::Influencer];

    /// The stored value of this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journalist => "journalist",
            Self::Influencer => "influencer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of an event task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Still to be done.
    #[default]
    Todo,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Every status, in selector order.
    pub const ALL: [Self; 2] = [Self::Todo, Self::Done];

    /// The stored value of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invitation answer for an event task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rsvp {
    /// No answer yet.
    #[default]
    Pending,
    /// Attending.
    Yes,
    /// Not attending.
    No,
}

impl Rsvp {
    /// Every answer, in selector order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Yes, Self::No];

    /// The stored value of this answer.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl std::fmt::Display for Rsvp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A journalist or influencer in the press book.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Display name. Not unique.
    pub name: String,
    /// Media outlet or network.
    pub outlet: String,
    /// Email address, unvalidated.
    pub email: String,
    /// Phone number, unvalidated.
    pub phone: String,
    /// Journalist or influencer.
    pub category: Category,
    /// Beat or specialty (fashion, luxury, ...).
    pub specialty: String,
    /// Free-form notes.
    pub notes: String,
}

impl Record for Contact {
    const FILE_NAME: &'static str = schema::CONTACTS_FILE;
    const COLUMNS: &'static [&'static str] = schema::CONTACT_COLUMNS;
    const LABEL: &'static str = "contacts";

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.outlet.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.category.to_string(),
            self.specialty.clone(),
            self.notes.clone(),
        ]
    }

    fn confirmation(&self) -> String {
        format!("Contact {} added.", self.name)
    }
}

/// A press release sent to a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Copy of the contact's name at the time of sending.
    pub contact_name: String,
    /// Title of the release.
    pub release_name: String,
    /// Day the release was sent.
    pub send_date: NaiveDate,
}

impl Record for Release {
    const FILE_NAME: &'static str = schema::RELEASES_FILE;
    const COLUMNS: &'static [&'static str] = schema::RELEASE_COLUMNS;
    const LABEL: &'static str = "releases";

    fn fields(&self) -> Vec<String> {
        vec![
            self.contact_name.clone(),
            self.release_name.clone(),
            self.send_date.format(schema::DATE_FORMAT).to_string(),
        ]
    }

    fn confirmation(&self) -> String {
        format!(
            "Release '{}' recorded for {}.",
            self.release_name, self.contact_name
        )
    }
}

/// A to-do item attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventTask {
    /// Event the task belongs to.
    pub event_name: String,
    /// What needs doing.
    pub task: String,
    /// Whether it is done.
    pub status: TaskStatus,
    /// Invitation answer.
    pub rsvp: Rsvp,
}

impl Record for EventTask {
    const FILE_NAME: &'static str = schema::EVENTS_FILE;
    const COLUMNS: &'static [&'static str] = schema::EVENT_COLUMNS;
    const LABEL: &'static str = "events";

    fn fields(&self) -> Vec<String> {
        vec![
            self.event_name.clone(),
            self.task.clone(),
            self.status.to_string(),
            self.rsvp.to_string(),
        ]
    }

    fn confirmation(&self) -> String {
        format!("Task '{}' added for event '{}'.", self.task, self.event_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_messages() {
        let contact = Contact {
            name: "Alice Martin".to_string(),
            ..Contact::default()
        };
        assert_eq!(contact.confirmation(), "Contact Alice Martin added.");

        let release = Release {
            contact_name: "Alice Martin".to_string(),
            release_name: "Spring launch".to_string(),
            send_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            release.confirmation(),
            "Release 'Spring launch' recorded for Alice Martin."
        );

        let task = EventTask {
            event_name: "Fashion Week".to_string(),
            task: "Book venue".to_string(),
            ..EventTask::default()
        };
        assert_eq!(
            task.confirmation(),
            "Task 'Book venue' added for event 'Fashion Week'."
        );
    }

    #[test]
    fn test_category_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_status_and_rsvp_display() {
        assert_eq!(TaskStatus::Todo.to_string(), "todo");
        assert_eq!(TaskStatus::Done.to_string(), "done");
        assert_eq!(Rsvp::Pending.to_string(), "pending");
        assert_eq!(Rsvp::Yes.to_string(), "yes");
        assert_eq!(Rsvp::No.to_string(), "no");
    }

    #[test]
    fn test_selector_defaults_are_first_option() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(TaskStatus::default(), TaskStatus::ALL[0]);
        assert_eq!(Rsvp::default(), Rsvp::ALL[0]);
    }

    #[test]
    fn test_fields_follow_columns() {
        let contact = Contact {
            name: "Alice".to_string(),
            category: Category::Influencer,
            ..Contact::default()
        };
        let fields = contact.fields();
        assert_eq!(fields.len(), Contact::COLUMNS.len());
        assert_eq!(fields[0], "Alice");
        assert_eq!(fields[4], "influencer");

        let release = Release {
            contact_name: "Alice".to_string(),
            release_name: "Launch".to_string(),
            send_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(release.fields(), vec!["Alice", "Launch", "2024-01-01"]);

        let task = EventTask::default();
        assert_eq!(task.fields(), vec!["", "", "todo", "pending"]);
        assert_eq!(task.fields().len(), EventTask::COLUMNS.len());
    }

    #[test]
    fn test_release_date_serializes_as_iso() {
        let release = Release {
            contact_name: String::new(),
            release_name: String::new(),
            send_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(json["send_date"], "2024-03-09");
    }
}
