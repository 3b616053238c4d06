#[macro_use]
extern crate lazy_static;

pub mod cli_config;
pub mod common;
pub mod docs_config;
pub mod file_writers;
pub mod logger;
pub mod program_actions;
pub mod snippet_filter;

pub use snippet_filter::{strip_doc_macros, UnbalancedMarkerCall};
