//! Contact Book - a command-line address book.
//!
//! Stores contacts with validated phone numbers and optional birthdays, and
//! reports whose birthday falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: `Record` and `AddressBook`, including the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence of the book between runs
//! - **cli**: The interactive command session

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use cli::Assistant;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
