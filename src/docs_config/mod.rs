pub mod raw_docs_config;
pub mod defaults;
mod validators;

use std::{collections::{BTreeMap, HashSet}, fs, path::{Path, PathBuf}};

use enum_iterator::Sequence;
use thiserror::Error;

use crate::snippet_filter::{strip_doc_macros, UnbalancedMarkerCall};

use self::{raw_docs_config::{RawDocsConfig, RawNavbarEntry, RawNavbarSubEntry}, validators::{is_valid_page_id, is_valid_code_language, is_blank}};

pub const DOCS_CONFIG_FILE_NAME: &'static str = "docs_config.yaml";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadFailure {
  #[error("{0}")]
  MissingYaml(String),
  #[error("{0}")]
  Parse(String),
  #[error("{0}")]
  Invalid(String)
}

impl ConfigLoadFailure {
  pub fn map_message(
    self,
    mapper: impl FnOnce(String) -> String
  ) -> Self {
    match self {
      Self::MissingYaml(err_message) => Self::MissingYaml(mapper(err_message)),
      Self::Parse(err_message) => Self::Parse(mapper(err_message)),
      Self::Invalid(err_message) => Self::Invalid(mapper(err_message))
    }
  }

  pub fn extract_message(self) -> String {
    match self {
      Self::MissingYaml(msg) => msg,
      Self::Parse(msg) => msg,
      Self::Invalid(msg) => msg
    }
  }
}

/// A transformation m.css runs on a code block of some language before highlighting it.
#[derive(Hash, PartialEq, Eq, Sequence, Clone, Copy, Debug)]
pub enum CodeFilterName {
  DoxygenMacros
}

impl CodeFilterName {
  pub fn from_str(filter_name: &str) -> Option<Self> {
    return enum_iterator::all::<Self>()
      .find(|valid_filter| valid_filter.to_str() == filter_name);
  }

  pub fn to_str(&self) -> &'static str {
    match self {
      Self::DoxygenMacros => "doxygen-macros"
    }
  }

  pub fn apply(&self, code: &str) -> Result<String, UnbalancedMarkerCall> {
    match self {
      Self::DoxygenMacros => strip_doc_macros(code)
    }
  }

  fn valid_names_str() -> String {
    return enum_iterator::all::<Self>()
      .map(|filter_name| format!("'{}'", filter_name.to_str()))
      .collect::<Vec<String>>()
      .join(", ");
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarLink {
  // A Doxygen compound or page. m.css fills in its title.
  Page(String),
  Html(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarEntry {
  pub link: NavbarLink,
  pub sub: Vec<NavbarLink>
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocsConfig {
  pub doxyfile: String,
  pub stylesheets: Vec<String>,
  pub main_project_url: Option<String>,
  pub links_navbar2: Vec<NavbarEntry>,
  pub fine_print: Option<String>,
  pub favicon: Option<String>,
  pub version_labels: bool,
  pub code_filters_pre: BTreeMap<String, Vec<CodeFilterName>>
}

impl DocsConfig {
  pub fn load(config_file_path: impl AsRef<Path>) -> Result<Self, ConfigLoadFailure> {
    let config_file_path: &Path = config_file_path.as_ref();

    if !config_file_path.is_file() {
      return Err(ConfigLoadFailure::MissingYaml(format!(
        "Unable to find {}. Generate one with 'gen-default'.",
        config_file_path.to_string_lossy()
      )));
    }

    let config_contents: String = match fs::read_to_string(config_file_path) {
      Ok(contents) => contents,
      Err(io_error) => return Err(ConfigLoadFailure::MissingYaml(format!(
        "Failed to read {}: {}",
        config_file_path.to_string_lossy(),
        io_error
      )))
    };

    return Self::from_yaml_str(&config_contents)
      .map_err(|failure_reason| failure_reason.map_message(|err_message| {
        format!(
          "When loading docs config '{}':\n{}",
          config_file_path.to_string_lossy(),
          err_message
        )
      }));
  }

  pub fn load_from_dir(config_dir: impl AsRef<Path>) -> Result<Self, ConfigLoadFailure> {
    let config_file_path: PathBuf = config_dir.as_ref().join(DOCS_CONFIG_FILE_NAME);
    return Self::load(config_file_path);
  }

  pub fn from_yaml_str(yaml_contents: &str) -> Result<Self, ConfigLoadFailure> {
    let raw_config: RawDocsConfig = match serde_yaml::from_str(yaml_contents) {
      Ok(raw_config) => raw_config,
      Err(parse_error) => return Err(ConfigLoadFailure::Parse(parse_error.to_string()))
    };

    return Self::from_raw(raw_config)
      .map_err(ConfigLoadFailure::Invalid);
  }

  pub fn from_raw(raw_config: RawDocsConfig) -> Result<Self, String> {
    if is_blank(&raw_config.doxyfile) {
      return Err(String::from("'doxyfile' must name the Doxyfile m.css reads, but it is empty."));
    }

    if raw_config.stylesheets.is_empty() {
      return Err(String::from("'stylesheets' must contain at least one stylesheet."));
    }

    if let Some(index) = raw_config.stylesheets.iter().position(|sheet| is_blank(sheet)) {
      return Err(format!("'stylesheets' entry {} is blank.", index + 1));
    }

    if let Some(url) = &raw_config.main_project_url {
      if is_blank(url) {
        return Err(String::from("'main_project_url' is given but blank. Remove it or give a URL."));
      }
    }

    if let Some(favicon) = &raw_config.favicon {
      if is_blank(favicon) {
        return Err(String::from("'favicon' is given but blank. Remove it or give a path."));
      }
    }

    let links_navbar2: Vec<NavbarEntry> = raw_config.links_navbar2
      .iter()
      .enumerate()
      .map(|(index, raw_entry)| navbar_entry_from_raw(raw_entry)
        .map_err(|err_message| format!("In 'links_navbar2' entry {}: {}", index + 1, err_message))
      )
      .collect::<Result<Vec<NavbarEntry>, String>>()?;

    let mut code_filters_pre: BTreeMap<String, Vec<CodeFilterName>> = BTreeMap::new();

    for (language, raw_filter_names) in raw_config.code_filters_pre {
      if !is_valid_code_language(&language) {
        return Err(format!(
          "'code_filters_pre' language \"{}\" is invalid. Language names may only contain letters, numbers, spaces and the characters - + # _",
          language
        ));
      }

      let mut seen_filters: HashSet<CodeFilterName> = HashSet::new();
      let mut language_filters: Vec<CodeFilterName> = Vec::new();

      for raw_filter_name in raw_filter_names {
        let filter_name: CodeFilterName = match CodeFilterName::from_str(&raw_filter_name) {
          Some(filter_name) => filter_name,
          None => return Err(format!(
            "'code_filters_pre' filter \"{}\" for language \"{}\" doesn't exist. Valid filters are: {}",
            raw_filter_name,
            language,
            CodeFilterName::valid_names_str()
          ))
        };

        if !seen_filters.insert(filter_name) {
          return Err(format!(
            "'code_filters_pre' lists filter \"{}\" more than once for language \"{}\".",
            raw_filter_name,
            language
          ));
        }

        language_filters.push(filter_name);
      }

      code_filters_pre.insert(language, language_filters);
    }

    return Ok(Self {
      doxyfile: raw_config.doxyfile,
      stylesheets: raw_config.stylesheets,
      main_project_url: raw_config.main_project_url,
      links_navbar2,
      fine_print: raw_config.fine_print,
      favicon: raw_config.favicon,
      version_labels: raw_config.version_labels,
      code_filters_pre
    });
  }

  pub fn has_code_filters(&self) -> bool {
    return self.code_filters_pre
      .values()
      .any(|filters| !filters.is_empty());
  }

  // Runs every filter configured for the language, in order. Unknown languages pass through.
  pub fn filter_code(&self, language: &str, code: &str) -> Result<String, UnbalancedMarkerCall> {
    let mut filtered_code: String = code.to_string();

    if let Some(filters) = self.code_filters_pre.get(language) {
      for filter_name in filters {
        filtered_code = filter_name.apply(&filtered_code)?;
      }
    }

    return Ok(filtered_code);
  }
}

fn navbar_link_from_parts(
  page: &Option<String>,
  html: &Option<String>
) -> Result<NavbarLink, String> {
  match (page, html) {
    (Some(page_id), None) => {
      if is_valid_page_id(page_id) {
        Ok(NavbarLink::Page(page_id.clone()))
      }
      else {
        Err(format!(
          "Page \"{}\" is not a valid Doxygen page id. Page ids may only contain letters, numbers and the characters - _ .",
          page_id
        ))
      }
    },
    (None, Some(link_html)) => {
      if is_blank(link_html) {
        Err(String::from("'html' must not be blank."))
      }
      else {
        Ok(NavbarLink::Html(link_html.clone()))
      }
    },
    (Some(_), Some(_)) => Err(String::from("Only one of 'page' or 'html' may be given, but both were.")),
    (None, None) => Err(String::from("Either 'page' or 'html' must be given."))
  }
}

fn navbar_entry_from_raw(raw_entry: &RawNavbarEntry) -> Result<NavbarEntry, String> {
  let link: NavbarLink = navbar_link_from_parts(&raw_entry.page, &raw_entry.html)?;

  let sub: Vec<NavbarLink> = raw_entry.sub
    .iter()
    .enumerate()
    .map(|(index, RawNavbarSubEntry { page, html })| navbar_link_from_parts(page, html)
      .map_err(|err_message| format!("sub-entry {}: {}", index + 1, err_message))
    )
    .collect::<Result<Vec<NavbarLink>, String>>()?;

  return Ok(NavbarEntry { link, sub });
}
