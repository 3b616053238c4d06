mod strip_snippets;
mod check_snippets;
mod default_file_creator;

pub use strip_snippets::*;
pub use check_snippets::*;
pub use default_file_creator::*;
