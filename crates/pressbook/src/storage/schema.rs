//! Backing store layout for pressbook.
//!
//! File names and header rows of the three CSV stores. These are fixed;
//! only the directory holding them is configurable.

/// Backing store for press contacts.
pub const CONTACTS_FILE: &str = "contacts.csv";

/// Backing store for press-release sends.
pub const RELEASES_FILE: &str = "releases.csv";

/// Backing store for event tasks.
pub const EVENTS_FILE: &str = "events.csv";

/// Header row of the contacts store.
pub const CONTACT_COLUMNS: &[&str] = &[
    "name",
    "outlet",
    "email",
    "phone",
    "category",
    "specialty",
    "notes",
];

/// Header row of the releases store.
pub const RELEASE_COLUMNS: &[&str] = &["contact_name", "release_name", "send_date"];

/// Header row of the events store.
pub const EVENT_COLUMNS: &[&str] = &["event_name", "task", "status", "rsvp"];

/// Storage format of `send_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
