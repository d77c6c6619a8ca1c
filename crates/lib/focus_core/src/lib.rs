//! # focus_core
//!
//! Core response selection for Focus Coach.
//!
//! A chat message is answered by scanning a fixed keyword table, then a
//! short list of profile-personalisation rules, then falling back to a
//! default tip. See [`responder::ResponseSelector`].

pub mod picker;
pub mod profile;
pub mod responder;
pub mod tables;

pub use picker::{FixedPicker, Picker, ThreadRngPicker};
pub use profile::Profile;
pub use responder::{ResponseSelector, Selection, SelectionSource, select_response};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
