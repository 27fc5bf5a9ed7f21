//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Each of the
//! three views gets an `add` form and a `list` display.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::form::date_or_today;
use crate::record::{Category, Contact, EventTask, Release, Rsvp, TaskStatus};
use crate::render::OutputFormat;

/// Contact book commands.
#[derive(Debug, Subcommand)]
pub enum ContactsCommand {
    /// Add a journalist or influencer
    Add(ContactForm),

    /// Show contacts, optionally filtered
    List(ContactListArgs),
}

/// Press release commands.
#[derive(Debug, Subcommand)]
pub enum ReleasesCommand {
    /// Record a press release sent to a contact
    Add(ReleaseForm),

    /// Show the history of sent releases
    List(ListArgs),
}

/// Event and to-do commands.
#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// Add a task for an event
    Add(EventForm),

    /// Show event tasks
    List(ListArgs),
}

/// Entry form for a new contact.
#[derive(Debug, Args)]
pub struct ContactForm {
    /// Name of the journalist or influencer
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub name: String,

    /// Media outlet or network
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub outlet: String,

    /// Email address
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub phone: String,

    /// Kind of contact
    #[arg(
        short = 't',
        long,
        value_enum,
        default_value = "journalist",
        conflicts_with = "interactive"
    )]
    pub category: CategoryArg,

    /// Specialty (fashion, luxury...)
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub specialty: String,

    /// Free-form notes
    #[arg(long, default_value = "", conflicts_with = "interactive")]
    pub notes: String,

    /// Prompt for each field instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

impl ContactForm {
    /// Build the contact described by the flags.
    #[must_use]
    pub fn to_contact(&self) -> Contact {
        Contact {
            name: self.name.clone(),
            outlet: self.outlet.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            category: self.category.into(),
            specialty: self.specialty.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Entry form for a release send.
#[derive(Debug, Args)]
pub struct ReleaseForm {
    /// Name of an existing contact
    #[arg(long, required_unless_present = "interactive", conflicts_with = "interactive")]
    pub contact: Option<String>,

    /// Name of the release (e.g. "New fragrance launch")
    #[arg(short, long, default_value = "", conflicts_with = "interactive")]
    pub release: String,

    /// Send date as YYYY-MM-DD (defaults to today)
    #[arg(short, long, conflicts_with = "interactive")]
    pub date: Option<String>,

    /// Prompt for each field instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

impl ReleaseForm {
    /// Build the release described by the flags. A missing `--date` means `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if `--date` is not a valid `YYYY-MM-DD` date.
    pub fn to_release(&self, today: NaiveDate) -> Result<Release> {
        Ok(Release {
            contact_name: self.contact.clone().unwrap_or_default(),
            release_name: self.release.clone(),
            send_date: date_or_today(self.date.as_deref(), today)?,
        })
    }
}

/// Entry form for an event task.
#[derive(Debug, Args)]
pub struct EventForm {
    /// Name of the event
    #[arg(short, long, default_value = "", conflicts_with = "interactive")]
    pub event: String,

    /// Task to accomplish
    #[arg(short, long, default_value = "", conflicts_with = "interactive")]
    pub task: String,

    /// Task status
    #[arg(short, long, value_enum, default_value = "todo", conflicts_with = "interactive")]
    pub status: StatusArg,

    /// Invitation answer
    #[arg(
        short,
        long,
        value_enum,
        default_value = "pending",
        conflicts_with = "interactive"
    )]
    pub rsvp: RsvpArg,

    /// Prompt for each field instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

impl EventForm {
    /// Build the event task described by the flags.
    #[must_use]
    pub fn to_event_task(&self) -> EventTask {
        EventTask {
            event_name: self.event.clone(),
            task: self.task.clone(),
            status: self.status.into(),
            rsvp: self.rsvp.into(),
        }
    }
}

/// Options controlling how a table is printed.
#[derive(Debug, Clone, Copy, Args)]
pub struct DisplayArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for listing an unfiltered table.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for listing contacts.
#[derive(Debug, Args)]
pub struct ContactListArgs {
    /// Search by name (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Treat the search as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Filter by kind of contact
    #[arg(short = 't', long, value_enum, default_value = "all")]
    pub category: CategoryFilterArg,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Contact kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Journalist
    Journalist,
    /// Influencer
    Influencer,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Journalist => Self::Journalist,
            CategoryArg::Influencer => Self::Influencer,
        }
    }
}

/// Contact kind selector for `contacts list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryFilterArg {
    /// Every contact
    All,
    /// Journalists only
    Journalist,
    /// Influencers only
    Influencer,
}

impl From<CategoryFilterArg> for CategoryFilter {
    fn from(arg: CategoryFilterArg) -> Self {
        match arg {
            CategoryFilterArg::All => Self::All,
            CategoryFilterArg::Journalist => Self::Journalist,
            CategoryFilterArg::Influencer => Self::Influencer,
        }
    }
}

/// Task status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Still to do
    Todo,
    /// Done
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Todo => Self::Todo,
            StatusArg::Done => Self::Done,
        }
    }
}

/// RSVP argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RsvpArg {
    /// Not confirmed yet
    Pending,
    /// Attending
    Yes,
    /// Not attending
    No,
}

impl From<RsvpArg> for Rsvp {
    fn from(arg: RsvpArg) -> Self {
        match arg {
            RsvpArg::Pending => Self::Pending,
            RsvpArg::Yes => Self::Yes,
            RsvpArg::No => Self::No,
        }
    }
}
