//! Helpers shared across the application.
//!
//! - `errors`: color-eyre hooks and the panic hook restoring the terminal
//! - `logging`: tracing subscriber writing to the data directory
//! - `help_msg`: key binding hints shown at the bottom of a page
//! - `key_events`: printable key events

#[cfg(not(tarpaulin_include))]
pub(crate) mod errors;
pub(crate) mod help_msg;
pub(crate) mod key_events;
#[cfg(not(tarpaulin_include))]
pub(crate) mod logging;
