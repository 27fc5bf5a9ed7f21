//! `pressbook` - A record keeper for a press office
//!
//! This library keeps three flat CSV tables in one data directory: press
//! contacts, press releases sent to them, and event tasks. Tables are loaded
//! in full, appended to one row at a time, and rewritten after every append.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod book;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod logging;
pub mod record;
pub mod render;
pub mod storage;

pub use book::PressBook;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{CategoryFilter, ContactFilter};
pub use logging::init_logging;
pub use record::{Category, Contact, EventTask, Record, Release, Rsvp, TaskStatus};
pub use render::{OutputFormat, Renderer, Screen};
pub use storage::{StoreStats, Table};
