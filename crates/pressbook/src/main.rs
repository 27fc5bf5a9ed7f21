//! `pressbook` - CLI for the press office record keeper
//!
//! Each invocation is one complete interaction: load the table of the chosen
//! view, append at most one row, save if something was appended, then print
//! the table.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use pressbook::cli::{
    Cli, Command, ConfigCommand, ContactsCommand, DisplayArgs, EventsCommand, ReleasesCommand,
};
use pressbook::form::Prompt;
use pressbook::logging::Verbosity;
use pressbook::{init_logging, Config, ContactFilter, PressBook, Record, Renderer, Screen, Table};

/// What every handler needs besides its own arguments.
#[derive(Debug)]
struct Session {
    config: Config,
    book: PressBook,
    verbosity: Verbosity,
}

impl Session {
    /// Screen for the requested or configured format.
    fn screen(&self, display: DisplayArgs) -> Screen {
        let format = display
            .format
            .unwrap_or(self.config.display.default_format);
        Screen::new(
            Renderer::new(format, self.config.display.max_column_width),
            !self.verbosity.shows_output(),
        )
    }
}

/// Prompt on stdin, asking on stderr so rendered output on stdout stays clean.
fn terminal_prompt() -> Prompt<std::io::StdinLock<'static>, std::io::Stderr> {
    Prompt::new(std::io::stdin().lock(), std::io::stderr())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();

    // Initialize logging based on verbosity
    init_logging(verbosity);

    // Load configuration, then apply the command-line override
    let config = Config::load_from(cli.config.clone())?.with_data_dir(cli.data_dir.clone());
    config.validate()?;

    let session = Session {
        book: PressBook::new(config.data_dir()),
        config,
        verbosity,
    };

    match cli.command {
        Command::Contacts(cmd) => handle_contacts(&session, cmd),
        Command::Releases(cmd) => handle_releases(&session, cmd),
        Command::Events(cmd) => handle_events(&session, cmd),
        Command::Status(status_cmd) => handle_status(&session, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&session.config, &config_cmd),
    }
}

/// Print the confirmation for the last row of `table`, then the table.
fn print_added<R: Record>(screen: Screen, table: &Table<R>) -> anyhow::Result<()> {
    if let Some(added) = table.last() {
        print!("{}", screen.added(added, table.rows())?);
    }
    Ok(())
}

fn print_table<R: Record>(screen: Screen, table: &Table<R>) -> anyhow::Result<()> {
    let refs: Vec<&R> = table.rows().iter().collect();
    print!("{}", screen.listed(&refs)?);
    Ok(())
}

fn handle_contacts(session: &Session, cmd: ContactsCommand) -> anyhow::Result<()> {
    match cmd {
        ContactsCommand::Add(form) => {
            let contact = if form.interactive {
                terminal_prompt().contact()?
            } else {
                form.to_contact()
            };
            let table = session
                .book
                .add_contact(contact)
                .context("failed to add contact")?;
            print_added(session.screen(form.display), &table)
        }
        ContactsCommand::List(args) => {
            let filter = ContactFilter::new().with_category(args.category.into());
            let filter = if args.regex {
                filter.with_regex(&args.search)?
            } else {
                filter.with_substring(&args.search)
            };

            let contacts = session.book.search_contacts(&filter)?;
            let refs: Vec<_> = contacts.iter().collect();
            print!("{}", session.screen(args.display).listed(&refs)?);
            Ok(())
        }
    }
}

fn handle_releases(session: &Session, cmd: ReleasesCommand) -> anyhow::Result<()> {
    match cmd {
        ReleasesCommand::Add(form) => {
            let today = Local::now().date_naive();
            let release = if form.interactive {
                let names = session.book.contact_names()?;
                terminal_prompt().release(&names, today)?
            } else {
                form.to_release(today)?
            };

            let table = session
                .book
                .add_release(release)
                .context("failed to record release")?;
            print_added(session.screen(form.display), &table)
        }
        ReleasesCommand::List(args) => {
            print_table(session.screen(args.display), &session.book.releases()?)
        }
    }
}

fn handle_events(session: &Session, cmd: EventsCommand) -> anyhow::Result<()> {
    match cmd {
        EventsCommand::Add(form) => {
            let task = if form.interactive {
                terminal_prompt().event_task()?
            } else {
                form.to_event_task()
            };
            let table = session
                .book
                .add_event(task)
                .context("failed to add event task")?;
            print_added(session.screen(form.display), &table)
        }
        EventsCommand::List(args) => {
            print_table(session.screen(args.display), &session.book.events()?)
        }
    }
}

fn handle_status(session: &Session, json: bool) -> anyhow::Result<()> {
    let stats = session.book.stats()?;

    if json {
        let status = serde_json::json!({
            "data_dir": session.book.dir(),
            "stores": stats,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("pressbook status");
        println!("----------------");
        println!("Data directory: {}", session.book.dir().display());
        println!();
        for store in &stats {
            let rows = if store.exists {
                format!("{} rows", store.rows)
            } else {
                "not created yet".to_string()
            };
            println!("  {:<10} {:<16} {}", store.label, rows, store.path.display());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!();
                println!("[Display]");
                println!("  Default format:     {:?}", config.display.default_format);
                println!(
                    "  Max column width:   {}",
                    config.display.max_column_width
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
