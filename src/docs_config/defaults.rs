use std::collections::BTreeMap;

use crate::common::basic_configure_replace;

use super::{raw_docs_config::{RawDocsConfig, RawNavbarEntry}, CodeFilterName};

pub const DEFAULT_DOXYFILE_NAME: &'static str = "Doxyfile-mcss";
pub const DEFAULT_FAVICON: &'static str = "favicon.ico";

pub const DEFAULT_STYLESHEETS: [&'static str; 2] = [
  "https://fonts.googleapis.com/css?family=Source+Sans+Pro:400,400i,600,600i%7CSource+Code+Pro:400,400i,600&subset=latin-ext",
  "../css/m-dark+documentation.compiled.css"
];

// {doxygen_version} is filled in by m.css itself, not by us.
const DEFAULT_FINE_PRINT_IN: &'static str = "<p>@PROJECT_NAME@ docs. Generated by <a href=\"https://doxygen.org/\">Doxygen</a> {doxygen_version} and <a href=\"https://mcss.mosra.cz/\">m.css</a>.</p>";

pub fn default_docs_config(
  project_name: &str,
  maybe_project_url: Option<&str>
) -> RawDocsConfig {
  let mut code_filters_pre: BTreeMap<String, Vec<String>> = BTreeMap::new();
  code_filters_pre.insert(
    String::from("C++"),
    vec![CodeFilterName::DoxygenMacros.to_str().to_string()]
  );

  return RawDocsConfig {
    doxyfile: DEFAULT_DOXYFILE_NAME.to_string(),
    stylesheets: DEFAULT_STYLESHEETS.iter().map(|sheet| sheet.to_string()).collect(),
    main_project_url: maybe_project_url.map(|url| url.to_string()),
    links_navbar2: vec![
      RawNavbarEntry::page("annotated"),
      RawNavbarEntry::page("files")
    ],
    fine_print: Some(basic_configure_replace(
      DEFAULT_FINE_PRINT_IN,
      [("PROJECT_NAME", project_name.to_string())]
    )),
    favicon: Some(DEFAULT_FAVICON.to_string()),
    version_labels: true,
    code_filters_pre
  };
}
