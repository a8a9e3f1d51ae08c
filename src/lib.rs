//! QA reminder SMS delivery.
//!
//! Twilio credentials live in the Replit connector service, not in this
//! process: every send fetches them fresh, builds a Twilio client, and
//! submits exactly one message. See [`ReminderService`] for the entry
//! point.

pub mod config;
pub mod connector;
pub mod errors;
pub mod messaging;
pub mod reminders;

pub use config::ConnectorConfig;
pub use connector::CredentialBundle;
pub use errors::Error;
pub use messaging::{deliver_reminder, SendResult, SmsSender};
pub use reminders::ReminderService;
