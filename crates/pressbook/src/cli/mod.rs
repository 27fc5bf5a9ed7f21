//! Command-line interface for pressbook.
//!
//! This module provides the CLI structure for the `pressbook` binary. The
//! three views of the press book (contacts, releases, events) are exclusive
//! subcommands; each invocation runs exactly one of them.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CategoryArg, CategoryFilterArg, ConfigCommand, ContactForm, ContactListArgs, ContactsCommand,
    DisplayArgs, EventForm, EventsCommand, ListArgs, ReleaseForm, ReleasesCommand, RsvpArg,
    StatusArg, StatusCommand,
};

/// pressbook - Keep track of press contacts, releases and events
///
/// Stores a contact book of journalists and influencers, the history of
/// press releases sent to them, and a to-do list for events, each in its own
/// CSV file.
#[derive(Debug, Parser)]
#[command(name = "pressbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the CSV files (overrides the configuration)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the press contact book
    #[command(subcommand)]
    Contacts(ContactsCommand),

    /// Track press releases sent to contacts
    #[command(subcommand)]
    Releases(ReleasesCommand),

    /// Plan events and their to-do list
    #[command(subcommand)]
    Events(EventsCommand),

    /// Show where the data lives and how many rows each table has
    Status(StatusCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use crate::render::OutputFormat;
    use clap::CommandFactory;

    fn status_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            data_dir: None,
            verbose,
            quiet,
            command: Command::Status(StatusCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "pressbook");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(status_cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(status_cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(status_cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(status_cli(2, false).verbosity(), Verbosity::Debug);
        assert_eq!(status_cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_contacts_add() {
        let args = vec![
            "pressbook",
            "contacts",
            "add",
            "--name",
            "Alice",
            "--category",
            "influencer",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Contacts(ContactsCommand::Add(form)) = cli.command else {
            panic!("expected contacts add");
        };
        assert_eq!(form.name, "Alice");
        assert_eq!(form.category, CategoryArg::Influencer);
        assert_eq!(form.outlet, "");
        assert!(!form.interactive);
    }

    #[test]
    fn test_parse_contacts_add_defaults() {
        let cli = Cli::try_parse_from(["pressbook", "contacts", "add"]).unwrap();
        let Command::Contacts(ContactsCommand::Add(form)) = cli.command else {
            panic!("expected contacts add");
        };
        assert_eq!(form.name, "");
        assert_eq!(form.category, CategoryArg::Journalist);
    }

    #[test]
    fn test_parse_contacts_list_filters() {
        let args = ["pressbook", "contacts", "list", "-s", "ali", "-t", "journalist"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Contacts(ContactsCommand::List(list)) = cli.command else {
            panic!("expected contacts list");
        };
        assert_eq!(list.search, "ali");
        assert_eq!(list.category, CategoryFilterArg::Journalist);
        assert!(!list.regex);
        assert_eq!(list.display.format, None);
    }

    #[test]
    fn test_parse_contacts_list_defaults_to_all() {
        let cli = Cli::try_parse_from(["pressbook", "contacts", "list"]).unwrap();
        let Command::Contacts(ContactsCommand::List(list)) = cli.command else {
            panic!("expected contacts list");
        };
        assert_eq!(list.search, "");
        assert_eq!(list.category, CategoryFilterArg::All);
    }

    #[test]
    fn test_parse_releases_add() {
        let args = [
            "pressbook",
            "releases",
            "add",
            "--contact",
            "Alice",
            "--release",
            "Launch",
            "--date",
            "2024-01-01",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Releases(ReleasesCommand::Add(form)) = cli.command else {
            panic!("expected releases add");
        };
        assert_eq!(form.contact.as_deref(), Some("Alice"));
        assert_eq!(form.release, "Launch");
        assert_eq!(form.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_parse_releases_add_requires_contact() {
        let result = Cli::try_parse_from(["pressbook", "releases", "add", "--release", "Launch"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["pressbook", "releases", "add", "--interactive"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Releases(ReleasesCommand::Add(ReleaseForm {
                interactive: true,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_interactive_rejects_field_flags() {
        for args in [
            &["pressbook", "contacts", "add", "-i", "--name", "Alice"][..],
            &["pressbook", "contacts", "add", "-i", "--category", "influencer"][..],
            &["pressbook", "releases", "add", "-i", "--contact", "Alice"][..],
            &["pressbook", "releases", "add", "-i", "--date", "2024-01-01"][..],
            &["pressbook", "events", "add", "-i", "--task", "Invites"][..],
            &["pressbook", "events", "add", "-i", "--rsvp", "yes"][..],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(
                err.kind(),
                clap::error::ErrorKind::ArgumentConflict,
                "{args:?}"
            );
        }

        let cli = Cli::try_parse_from(["pressbook", "events", "add", "-i", "-f", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Events(EventsCommand::Add(EventForm {
                interactive: true,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_events_add() {
        let args = [
            "pressbook", "events", "add", "-e", "Gala", "-t", "Invites", "-s", "done", "-r", "yes",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Events(EventsCommand::Add(form)) = cli.command else {
            panic!("expected events add");
        };
        assert_eq!(form.event, "Gala");
        assert_eq!(form.task, "Invites");
        assert_eq!(form.status, StatusArg::Done);
        assert_eq!(form.rsvp, RsvpArg::Yes);
    }

    #[test]
    fn test_parse_rejects_unknown_enum_value() {
        let result = Cli::try_parse_from(["pressbook", "events", "add", "--status", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_format() {
        let cli = Cli::try_parse_from(["pressbook", "events", "list", "--format", "json"]).unwrap();
        let Command::Events(EventsCommand::List(list)) = cli.command else {
            panic!("expected events list");
        };
        assert_eq!(list.display.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = [
            "pressbook",
            "status",
            "--data-dir",
            "/tmp/press",
            "-c",
            "/custom/config.toml",
            "-q",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/press")));
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["pressbook", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }
}
