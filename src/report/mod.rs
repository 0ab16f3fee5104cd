//! Report renderers for award queries.
//!
//! - [`terminal`] — colored headings and tables; respects `--quiet`.
//! - [`json`] — pretty JSON on stdout, with navigation links for `details`.

pub mod json;
pub mod terminal;
