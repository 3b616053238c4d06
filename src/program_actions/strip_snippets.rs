use std::{fs, io::{self, Read, Write}, path::Path};

use colored::Colorize;

use crate::{cli_config::{CLIStripInfo, StripFilterSelection, StripInputSource}, docs_config::DocsConfig, logger, snippet_filter::{strip_doc_macros, UnbalancedMarkerCall, snippet_checker::check_snippet}};

pub enum SnippetFilter {
  DocMacros,
  // The filters docs_config.yaml lists for the language, the same ones conf.py runs.
  Configured {
    config: DocsConfig,
    language: String
  }
}

impl SnippetFilter {
  pub fn load(selection: &StripFilterSelection) -> Result<Self, String> {
    match selection {
      StripFilterSelection::DocMacros => Ok(Self::DocMacros),
      StripFilterSelection::ForLanguage { config_path, language } => {
        let config: DocsConfig = DocsConfig::load(config_path)
          .map_err(|load_failure| load_failure.extract_message())?;

        if !config.code_filters_pre.contains_key(language) {
          logger::warn(format!(
            "{} has no code filters for {}. Snippets are passed through unchanged.",
            config_path.to_string_lossy(),
            language.yellow()
          ));
        }

        Ok(Self::Configured {
          config,
          language: language.clone()
        })
      }
    }
  }

  pub fn apply(&self, code: &str) -> Result<String, UnbalancedMarkerCall> {
    match self {
      Self::DocMacros => strip_doc_macros(code),
      Self::Configured { config, language } => config.filter_code(language, code)
    }
  }
}

// Points at the offending call when possible, otherwise falls back to the raw error.
fn unbalanced_call_message(
  source_name: &Path,
  code: &str,
  fallback_message: String
) -> String {
  let problems = check_snippet(source_name, code);

  if problems.is_empty() {
    return format!("{}: {}", source_name.to_string_lossy(), fallback_message);
  }

  return problems
    .iter()
    .map(|problem| problem.describe())
    .collect::<Vec<String>>()
    .join("\n");
}

pub fn strip_source_code(
  filter: &SnippetFilter,
  source_name: &Path,
  code: &str
) -> Result<String, String> {
  return filter.apply(code)
    .map_err(|unbalanced_call| unbalanced_call_message(
      source_name,
      code,
      unbalanced_call.to_string()
    ));
}

fn strip_stdin(filter: &SnippetFilter, output: &mut impl Write) -> Result<(), String> {
  let mut code = String::new();

  io::stdin()
    .read_to_string(&mut code)
    .map_err(|io_error| format!("Failed to read stdin: {}", io_error))?;

  let stripped: String = strip_source_code(filter, Path::new("<stdin>"), &code)?;

  output
    .write_all(stripped.as_bytes())
    .map_err(|io_error| format!("Failed to write stripped code: {}", io_error))
}

/// Returns whether the file changed.
pub fn strip_file_in_place(filter: &SnippetFilter, file_path: &Path) -> Result<bool, String> {
  let code: String = fs::read_to_string(file_path)
    .map_err(|io_error| format!("Failed to read {}: {}", file_path.to_string_lossy(), io_error))?;

  let stripped: String = strip_source_code(filter, file_path, &code)?;

  if stripped == code {
    return Ok(false);
  }

  fs::write(file_path, stripped)
    .map_err(|io_error| format!("Failed to write {}: {}", file_path.to_string_lossy(), io_error))?;

  return Ok(true);
}

fn strip_file_to(filter: &SnippetFilter, file_path: &Path, output: &mut impl Write) -> Result<(), String> {
  let code: String = fs::read_to_string(file_path)
    .map_err(|io_error| format!("Failed to read {}: {}", file_path.to_string_lossy(), io_error))?;

  let stripped: String = strip_source_code(filter, file_path, &code)?;

  output
    .write_all(stripped.as_bytes())
    .map_err(|io_error| format!("Failed to write stripped code: {}", io_error))
}

/// Stops at the first snippet with an unbalanced call. Snippets before it are already
/// written, but nothing of the failing one is.
pub fn handle_strip(strip_info: CLIStripInfo) -> Result<(), String> {
  let stdout = io::stdout();
  let mut output = stdout.lock();

  if strip_info.in_place {
    if strip_info.sources.iter().any(|source| matches!(source, StripInputSource::Stdin)) {
      return Err(String::from("--in-place can't be used when reading from stdin."));
    }
  }

  let filter: SnippetFilter = SnippetFilter::load(&strip_info.filter)?;

  for source in &strip_info.sources {
    match source {
      StripInputSource::Stdin => strip_stdin(&filter, &mut output)?,
      StripInputSource::File(file_path) => {
        if strip_info.in_place {
          if strip_file_in_place(&filter, file_path)? {
            logger::success(format!("Stripped {}", file_path.to_string_lossy().cyan()));
          }
        }
        else {
          strip_file_to(&filter, file_path, &mut output)?;
        }
      }
    }
  }

  output
    .flush()
    .map_err(|io_error| format!("Failed to flush stdout: {}", io_error))
}
