use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

pub type RawCodeFilterMap = BTreeMap<String, Vec<String>>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawNavbarSubEntry {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub html: Option<String>
}

// Exactly one of 'page' or 'html' must be given. That's checked when converting to a NavbarEntry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawNavbarEntry {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub html: Option<String>,
  #[serde(default)]
  pub sub: Vec<RawNavbarSubEntry>
}

impl RawNavbarEntry {
  pub fn page(page_id: &str) -> Self {
    Self {
      page: Some(page_id.to_string()),
      html: None,
      sub: Vec::new()
    }
  }

  pub fn html(link_html: &str) -> Self {
    Self {
      page: None,
      html: Some(link_html.to_string()),
      sub: Vec::new()
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawDocsConfig {
  pub doxyfile: String,
  pub stylesheets: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub main_project_url: Option<String>,
  #[serde(default)]
  pub links_navbar2: Vec<RawNavbarEntry>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fine_print: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub favicon: Option<String>,
  #[serde(default)]
  pub version_labels: bool,
  #[serde(default)]
  pub code_filters_pre: RawCodeFilterMap
}
