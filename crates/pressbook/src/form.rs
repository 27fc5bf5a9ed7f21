//! Interactive entry forms.
//!
//! Each form asks for its fields in order on a line-based prompt. Text fields
//! accept anything, including an empty answer. Selectors show numbered
//! options and fall back to the first one on an empty answer.

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::record::{Category, Contact, EventTask, Release, Rsvp, TaskStatus};
use crate::storage::schema::DATE_FORMAT;

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `input` is not a valid date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Error::invalid_date(input))
}

/// Parse an optional `YYYY-MM-DD` date, falling back to `today` when absent.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `input` is given but is not a valid date.
pub fn date_or_today(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    input.map(parse_date).transpose().map(|date| date.unwrap_or(today))
}

/// Line-based prompt over any reader and writer.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt reading answers from `input` and writing questions to `output`.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask for a free-text field.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn text(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Ask the user to pick one of `options`, returning its index.
    ///
    /// Accepts the option's number or its exact text. An empty answer, or the
    /// end of input, picks the first option. Returns `None` when there are no
    /// options to pick from.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn choose<T: Display>(&mut self, label: &str, options: &[T]) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }

        writeln!(self.output, "{label}:")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }

        loop {
            write!(self.output, "Choice [1]: ")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(Some(0));
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(0));
            }
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(Some(n - 1));
                }
            }
            if let Some(i) = options.iter().position(|o| o.to_string() == answer) {
                return Ok(Some(i));
            }
            writeln!(
                self.output,
                "Please enter a number between 1 and {}.",
                options.len()
            )?;
        }
    }

    /// Ask for a date. An empty answer, or the end of input, gives `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn date(&mut self, label: &str, default: NaiveDate) -> Result<NaiveDate> {
        loop {
            write!(
                self.output,
                "{label} [{}]: ",
                default.format(DATE_FORMAT)
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(default);
            };
            if answer.trim().is_empty() {
                return Ok(default);
            }
            match parse_date(&answer) {
                Ok(date) => return Ok(date),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Fill in a new contact.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn contact(&mut self) -> Result<Contact> {
        let name = self.text("Name")?;
        let outlet = self.text("Outlet or network")?;
        let email = self.text("Email")?;
        let phone = self.text("Phone")?;
        let category = self
            .choose("Category", &Category::ALL)?
            .map_or_else(Category::default, |i| Category::ALL[i]);
        let specialty = self.text("Specialty (fashion, luxury...)")?;
        let notes = self.text("Notes")?;

        Ok(Contact {
            name,
            outlet,
            email,
            phone,
            category,
            specialty,
            notes,
        })
    }

    /// Fill in a new release send, choosing among `contact_names`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContacts`] if `contact_names` is empty, or an error
    /// if reading or writing the terminal fails.
    pub fn release(&mut self, contact_names: &[String], today: NaiveDate) -> Result<Release> {
        let contact = self
            .choose("Contact", contact_names)?
            .ok_or(Error::NoContacts)?;
        let release_name = self.text("Release name")?;
        let send_date = self.date("Send date", today)?;

        Ok(Release {
            contact_name: contact_names[contact].clone(),
            release_name,
            send_date,
        })
    }

    /// Fill in a new event task.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the terminal fails.
    pub fn event_task(&mut self) -> Result<EventTask> {
        let event_name = self.text("Event name")?;
        let task = self.text("Task")?;
        let status = self
            .choose("Status", &TaskStatus::ALL)?
            .map_or_else(TaskStatus::default, |i| TaskStatus::ALL[i]);
        let rsvp = self
            .choose("RSVP", &Rsvp::ALL)?
            .map_or_else(Rsvp::default, |i| Rsvp::ALL[i]);

        Ok(EventTask {
            event_name,
            task,
            status,
            rsvp,
        })
    }
}
