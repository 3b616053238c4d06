use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::{cli_config::CLIConfGenerationInfo, common::prompt::should_write_file, docs_config::{defaults::default_docs_config, DocsConfig, DOCS_CONFIG_FILE_NAME}, file_writers::{write_conf_py_file, write_docs_config_yaml}, logger};

pub struct DefaultConfigInfo<'a> {
  pub docs_dir: &'a Path,
  pub project_name: &'a str,
  pub project_url: Option<&'a str>,
  pub assume_yes: bool
}

/// Returns the written file, or None if the user chose to keep an existing one.
pub fn write_default_docs_config(info: DefaultConfigInfo) -> Result<Option<PathBuf>, String> {
  let config_path: PathBuf = info.docs_dir.join(DOCS_CONFIG_FILE_NAME);

  let should_write: bool = should_write_file(&config_path, info.assume_yes)
    .map_err(|io_error| format!("Failed to ask about overwriting: {}", io_error))?;

  if !should_write {
    logger::info(format!("Skipping {} creation.", DOCS_CONFIG_FILE_NAME));
    return Ok(None);
  }

  write_docs_config_yaml(
    &default_docs_config(info.project_name, info.project_url),
    &config_path
  )
    .map_err(|io_error| format!("Failed to write {}: {}", config_path.to_string_lossy(), io_error))?;

  logger::success(format!("{} generated successfully!", config_path.to_string_lossy().cyan()));
  return Ok(Some(config_path));
}

pub fn generate_conf_py(info: CLIConfGenerationInfo) -> Result<Option<PathBuf>, String> {
  if info.strip_command.is_empty() {
    return Err(String::from("--strip-command must name the command conf.py runs, but it is empty."));
  }

  let config: DocsConfig = DocsConfig::load(&info.config_path)
    .map_err(|failure_reason| failure_reason.extract_message())?;

  let should_write: bool = should_write_file(&info.output_path, info.assume_yes)
    .map_err(|io_error| format!("Failed to ask about overwriting: {}", io_error))?;

  if !should_write {
    logger::info(format!("Skipping {} creation.", info.output_path.to_string_lossy()));
    return Ok(None);
  }

  write_conf_py_file(&config, &info.strip_command, &info.output_path)
    .map_err(|io_error| format!("Failed to write {}: {}", info.output_path.to_string_lossy(), io_error))?;

  logger::success(format!("{} generated successfully!", info.output_path.to_string_lossy().cyan()));
  return Ok(Some(info.output_path));
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn default_config_feeds_conf_generation() {
    let temp_dir = tempfile::tempdir().unwrap();

    let config_path: PathBuf = write_default_docs_config(DefaultConfigInfo {
      docs_dir: temp_dir.path(),
      project_name: "Corrade",
      project_url: Some("https://magnum.graphics/corrade/"),
      assume_yes: false
    }).unwrap().unwrap();

    let output_path: PathBuf = temp_dir.path().join("conf.py");

    let written = generate_conf_py(CLIConfGenerationInfo {
      config_path,
      output_path: output_path.clone(),
      strip_command: vec![String::from("mcss-snippet-filter")],
      assume_yes: true
    }).unwrap();

    assert_eq!(written, Some(output_path.clone()));

    let conf_py: String = fs::read_to_string(&output_path).unwrap();
    assert!(conf_py.contains("MAIN_PROJECT_URL = 'https://magnum.graphics/corrade/'"));
    assert!(conf_py.contains("<p>Corrade docs."));
  }

  #[test]
  fn missing_config_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    let error: String = generate_conf_py(CLIConfGenerationInfo {
      config_path: temp_dir.path().join(DOCS_CONFIG_FILE_NAME),
      output_path: temp_dir.path().join("conf.py"),
      strip_command: vec![String::from("mcss-snippet-filter")],
      assume_yes: true
    }).unwrap_err();

    assert!(error.contains(DOCS_CONFIG_FILE_NAME));
    assert!(!temp_dir.path().join("conf.py").exists());
  }

  #[test]
  fn empty_strip_command_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = generate_conf_py(CLIConfGenerationInfo {
      config_path: temp_dir.path().join(DOCS_CONFIG_FILE_NAME),
      output_path: temp_dir.path().join("conf.py"),
      strip_command: Vec::new(),
      assume_yes: true
    });

    assert!(result.unwrap_err().contains("--strip-command"));
  }
}
