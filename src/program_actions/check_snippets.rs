use std::path::PathBuf;

use colored::Colorize;

use crate::{logger, snippet_filter::snippet_checker::{check_files, snippet_files_in, SnippetProblem}};

pub enum CheckOutcome {
  Clean {
    files_checked: usize
  },
  Problems(Vec<SnippetProblem>)
}

pub fn run_check(paths: &[PathBuf], extensions: &[String]) -> Result<CheckOutcome, String> {
  let snippet_files: Vec<PathBuf> = snippet_files_in(paths, extensions)
    .map_err(|io_error| format!("Failed to list snippet files: {}", io_error))?;

  let problems: Vec<SnippetProblem> = check_files(&snippet_files)
    .map_err(|io_error| format!("Failed to check snippets: {}", io_error))?;

  if problems.is_empty() {
    return Ok(CheckOutcome::Clean { files_checked: snippet_files.len() });
  }

  return Ok(CheckOutcome::Problems(problems));
}

fn clean_summary(files_checked: usize) -> String {
  return format!(
    "{} snippet {} checked, no unbalanced calls.",
    files_checked,
    if files_checked == 1 { "file" } else { "files" }
  );
}

/// Returns false if any snippet has an unbalanced marker call.
pub fn handle_check(paths: &[PathBuf], extensions: &[String]) -> Result<bool, String> {
  match run_check(paths, extensions)? {
    CheckOutcome::Clean { files_checked } => {
      if files_checked == 0 {
        logger::warn("No snippet files found.");
      }
      else {
        logger::success(clean_summary(files_checked));
      }

      return Ok(true);
    },
    CheckOutcome::Problems(problems) => {
      for problem in &problems {
        eprintln!("{}", problem.describe().red());
      }

      logger::info(format!(
        "{} unbalanced marker {} found.",
        problems.len(),
        if problems.len() == 1 { "call" } else { "calls" }
      ));
      return Ok(false);
    }
  }
}
