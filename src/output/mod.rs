//! Rendering of releases and batch results as text or JSON.

mod format;

pub use format::{OutputFormat, format_bulk_results, format_history_results, format_release};
