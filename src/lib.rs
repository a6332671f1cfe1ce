//! Diff the "on" and "off" markup of a toggle button and derive the
//! selectors and state keys a tracking configuration needs.
//!
//! Pipeline: [`markup::parser::parse`] → [`snapshot::extractor::extract`] →
//! [`diff::engine::diff`] → [`selector::candidates`] →
//! [`workbench::analysis::Analysis`].

pub mod cli;
pub mod diff;
pub mod draft;
pub mod logging;
pub mod markup;
pub mod report;
pub mod selector;
pub mod snapshot;
pub mod trace;
pub mod workbench;
