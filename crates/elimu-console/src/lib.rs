#![forbid(unsafe_code)]
//! The admin back office, minus the browser.
//!
//! Everything the original admin pages decided client-side lives here:
//! the session gate, form validation that runs before any network call,
//! list search and filtering, and the CSV export. All HTTP goes through
//! [`client::CampusApi`], so tests drive the same code paths against a fake.

pub mod client;
pub mod forms;
pub mod session;
pub mod settings;
pub mod views;

pub const CRATE_NAME: &str = "elimu-console";
