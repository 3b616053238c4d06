use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const SKY: &'static str = "Skylar Cupit";

#[derive(Parser)]
#[command(version, author = SKY, about = "Strip DOXYGEN_ELLIPSIS() and DOXYGEN_IGNORE() calls from doc snippets")]
pub struct Opts {
  /// Only print warnings and errors
  #[arg(short, long, global = true)]
  pub quiet: bool,

  #[command(subcommand)]
  pub subcommand: SubCommandStruct
}

#[derive(Subcommand)]
pub enum SubCommandStruct {
  /// Strip marker calls from snippets. Reads stdin when no files are given.
  Strip(StripCommand),

  /// Report every unbalanced marker call in snippet files or directories
  Check(CheckCommand),

  /// Generate an m.css conf.py from a docs config file
  GenConf(GenConfCommand),

  /// Write a default docs config file
  GenDefault(GenDefaultCommand)
}

#[derive(Args)]
pub struct StripCommand {
  /// Snippet files. "-" means stdin.
  pub files: Vec<PathBuf>,

  /// Rewrite the files instead of printing the stripped code
  #[arg(short, long)]
  pub in_place: bool,

  /// Run the code filters the docs config lists for this language instead of the marker stripper
  #[arg(short, long)]
  pub language: Option<String>,

  /// Docs config file (or its directory) read when --language is given
  #[arg(short, long, default_value = "docs_config.yaml")]
  pub config: PathBuf
}

#[derive(Args)]
pub struct CheckCommand {
  /// Files or directories to check
  #[arg(default_value = ".")]
  pub paths: Vec<PathBuf>,

  /// File extensions searched for in directories
  #[arg(long = "ext", value_delimiter = ',', default_values_t = default_extensions())]
  pub extensions: Vec<String>
}

#[derive(Args)]
pub struct GenConfCommand {
  /// Docs config file to read
  #[arg(short, long, default_value = "docs_config.yaml")]
  pub config: PathBuf,

  /// Where to write conf.py. Defaults to conf.py next to the config file.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Command conf.py runs to strip snippets. Split on whitespace.
  #[arg(long, default_value = "mcss-snippet-filter")]
  pub strip_command: String,

  /// Overwrite existing files without asking
  #[arg(short, long)]
  pub yes: bool
}

#[derive(Args)]
pub struct GenDefaultCommand {
  /// Directory the docs config is written to
  #[arg(short, long, default_value = ".")]
  pub dir: PathBuf,

  /// Project name used in the footer
  #[arg(long, default_value = "Project")]
  pub project_name: String,

  /// Link target of the project title
  #[arg(long)]
  pub project_url: Option<String>,

  /// Overwrite existing files without asking
  #[arg(short, long)]
  pub yes: bool
}

fn default_extensions() -> Vec<String> {
  return crate::snippet_filter::snippet_checker::DEFAULT_SNIPPET_EXTENSIONS
    .iter()
    .map(|extension| extension.to_string())
    .collect();
}
