pub mod clap_cli_config;

use std::path::PathBuf;

use self::clap_cli_config::{StripCommand, GenConfCommand};
use crate::docs_config::DOCS_CONFIG_FILE_NAME;

pub enum StripInputSource {
  Stdin,
  File(PathBuf)
}

pub enum StripFilterSelection {
  DocMacros,
  ForLanguage {
    config_path: PathBuf,
    language: String
  }
}

pub struct CLIStripInfo {
  pub sources: Vec<StripInputSource>,
  pub in_place: bool,
  pub filter: StripFilterSelection
}

impl From<StripCommand> for CLIStripInfo {
  fn from(command: StripCommand) -> Self {
    let sources: Vec<StripInputSource> = if command.files.is_empty() {
      vec![StripInputSource::Stdin]
    }
    else {
      command.files
        .into_iter()
        .map(|file_path| {
          if file_path.as_os_str() == "-" { StripInputSource::Stdin }
          else                            { StripInputSource::File(file_path) }
        })
        .collect()
    };

    let filter: StripFilterSelection = match command.language {
      None => StripFilterSelection::DocMacros,
      Some(language) => StripFilterSelection::ForLanguage {
        config_path: config_file_path(command.config),
        language
      }
    };

    return CLIStripInfo {
      sources,
      in_place: command.in_place,
      filter
    }
  }
}

pub struct CLIConfGenerationInfo {
  pub config_path: PathBuf,
  pub output_path: PathBuf,
  pub strip_command: Vec<String>,
  pub assume_yes: bool
}

impl From<GenConfCommand> for CLIConfGenerationInfo {
  fn from(command: GenConfCommand) -> Self {
    let config_path: PathBuf = config_file_path(command.config);

    let output_path: PathBuf = match command.output {
      Some(output_path) => output_path,
      None => match config_path.parent() {
        Some(config_dir) => config_dir.join("conf.py"),
        None => PathBuf::from("conf.py")
      }
    };

    return CLIConfGenerationInfo {
      config_path,
      output_path,
      strip_command: split_strip_command(&command.strip_command),
      assume_yes: command.yes
    }
  }
}

fn config_file_path(config: PathBuf) -> PathBuf {
  if config.is_dir() {
    return config.join(DOCS_CONFIG_FILE_NAME);
  }

  return config;
}

pub fn split_strip_command(strip_command: &str) -> Vec<String> {
  return strip_command
    .split_whitespace()
    .map(|command_part| command_part.to_string())
    .collect();
}
