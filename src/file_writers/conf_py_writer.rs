use std::io::{self, Write};

use crate::docs_config::{CodeFilterName, DocsConfig, NavbarEntry, NavbarLink};

const INDENT: &'static str = "    ";

// Single-quoted Python string literal.
pub fn py_str(value: &str) -> String {
  let mut literal = String::with_capacity(value.len() + 2);
  literal.push('\'');

  for some_char in value.chars() {
    match some_char {
      '\\' => literal.push_str("\\\\"),
      '\'' => literal.push_str("\\'"),
      '\n' => literal.push_str("\\n"),
      '\r' => literal.push_str("\\r"),
      '\t' => literal.push_str("\\t"),
      _ => literal.push(some_char)
    }
  }

  literal.push('\'');
  return literal;
}

// Triple-quoted literal for HTML blocks, so they stay readable in the generated file.
fn py_long_str(value: &str) -> String {
  let escaped: String = value
    .replace('\\', "\\\\")
    .replace('"', "\\\"");

  return format!("\"\"\"{}\"\"\"", escaped);
}

fn py_bool(value: bool) -> &'static str {
  return if value { "True" } else { "False" };
}

fn filter_function_name(filter_name: &CodeFilterName) -> String {
  return format!("_{}", filter_name.to_str().replace('-', "_"));
}

fn navbar_sub_link_tuple(link: &NavbarLink) -> String {
  match link {
    NavbarLink::Page(page_id) => format!("(None, {})", py_str(page_id)),
    NavbarLink::Html(link_html) => format!("({}, )", py_str(link_html))
  }
}

fn navbar_entry_tuple(entry: &NavbarEntry) -> String {
  let sub_list: String = format!(
    "[{}]",
    entry.sub
      .iter()
      .map(navbar_sub_link_tuple)
      .collect::<Vec<String>>()
      .join(", ")
  );

  match &entry.link {
    NavbarLink::Page(page_id) => format!("(None, {}, {})", py_str(page_id), sub_list),
    NavbarLink::Html(link_html) => format!("({}, {})", py_str(link_html), sub_list)
  }
}

fn write_py_list(
  writer: &mut impl Write,
  variable_name: &str,
  items: impl IntoIterator<Item=String>
) -> io::Result<()> {
  let item_lines: Vec<String> = items
    .into_iter()
    .map(|item| format!("{}{}", INDENT, item))
    .collect();

  if item_lines.is_empty() {
    writeln!(writer, "{} = []\n", variable_name)?;
  }
  else {
    writeln!(writer, "{} = [\n{}\n]\n", variable_name, item_lines.join(",\n"))?;
  }

  Ok(())
}

fn write_code_filters(
  config: &DocsConfig,
  strip_command: &[String],
  writer: &mut impl Write
) -> io::Result<()> {
  let command_list: String = strip_command
    .iter()
    .map(|command_part| py_str(command_part))
    .chain(std::iter::once(py_str("strip")))
    .collect::<Vec<String>>()
    .join(", ");

  let used_filters: Vec<CodeFilterName> = enum_iterator::all::<CodeFilterName>()
    .filter(|filter_name| config.code_filters_pre
      .values()
      .any(|filters| filters.contains(filter_name))
    )
    .collect();

  for filter_name in &used_filters {
    match filter_name {
      CodeFilterName::DoxygenMacros => {
        writeln!(writer, "# Code wrapped in DOXYGEN_ELLIPSIS() gets replaced by an (Unicode) ellipsis in the")?;
        writeln!(writer, "# output; code wrapped in DOXYGEN_IGNORE() gets replaced by nothing. To keep the")?;
        writeln!(writer, "# snippet compilable, define both as pass-throughs in the snippet code:")?;
        writeln!(writer, "#")?;
        writeln!(writer, "#   #define DOXYGEN_ELLIPSIS(...) __VA_ARGS__")?;
        writeln!(writer, "#   #define DOXYGEN_IGNORE(...) __VA_ARGS__")?;
        writeln!(writer, "def {}(code: str):", filter_function_name(filter_name))?;
        writeln!(
          writer,
          "{}result = subprocess.run([{}], input=code, stdout=subprocess.PIPE, stderr=subprocess.PIPE, encoding='utf-8')",
          INDENT,
          command_list
        )?;
        // stderr carries the marker, line and column of the bad call.
        writeln!(writer, "{}if result.returncode != 0:", INDENT)?;
        writeln!(
          writer,
          "{}{}raise RuntimeError(result.stderr.strip() + '\\nin snippet:\\n' + code)",
          INDENT,
          INDENT
        )?;
        writeln!(writer, "{}return result.stdout\n", INDENT)?;
      }
    }
  }

  let language_lines: Vec<String> = config.code_filters_pre
    .iter()
    .filter(|(_, filters)| !filters.is_empty())
    .map(|(language, filters)| {
      let filter_expr: String = if filters.len() == 1 {
        filter_function_name(&filters[0])
      }
      else {
        // Applied left to right, matching DocsConfig::filter_code.
        let mut composed: String = String::from("code");
        for filter_name in filters {
          composed = format!("{}({})", filter_function_name(filter_name), composed);
        }
        format!("lambda code: {}", composed)
      };

      format!("{}{}: {}", INDENT, py_str(language), filter_expr)
    })
    .collect();

  writeln!(writer, "M_CODE_FILTERS_PRE = {{\n{}\n}}", language_lines.join(",\n"))?;
  Ok(())
}

/// Writes an m.css `conf.py` for the configuration. Code filters run `strip_command strip`
/// as a subprocess, so the docs build fails whenever a snippet has an unbalanced call.
pub fn write_conf_py(
  config: &DocsConfig,
  strip_command: &[String],
  writer: &mut impl Write
) -> io::Result<()> {
  writeln!(writer, "# Generated by mcss-snippet-filter. Edit docs_config.yaml instead.")?;

  if config.has_code_filters() {
    writeln!(writer, "\nimport subprocess")?;
  }

  writeln!(writer, "\nDOXYFILE = {}\n", py_str(&config.doxyfile))?;

  write_py_list(writer, "STYLESHEETS", config.stylesheets.iter().map(|sheet| py_str(sheet)))?;

  if let Some(url) = &config.main_project_url {
    writeln!(writer, "MAIN_PROJECT_URL = {}\n", py_str(url))?;
  }

  write_py_list(writer, "LINKS_NAVBAR2", config.links_navbar2.iter().map(navbar_entry_tuple))?;

  if let Some(fine_print) = &config.fine_print {
    writeln!(writer, "FINE_PRINT = {}\n", py_long_str(fine_print))?;
  }

  if let Some(favicon) = &config.favicon {
    writeln!(writer, "FAVICON = {}\n", py_str(favicon))?;
  }

  writeln!(writer, "VERSION_LABELS = {}", py_bool(config.version_labels))?;

  if config.has_code_filters() {
    writeln!(writer)?;
    write_code_filters(config, strip_command, writer)?;
  }

  Ok(())
}

pub fn render_conf_py(config: &DocsConfig, strip_command: &[String]) -> String {
  let mut rendered: Vec<u8> = Vec::new();

  write_conf_py(config, strip_command, &mut rendered)
    .expect("writing to a Vec cannot fail");

  return String::from_utf8_lossy(&rendered).into_owned();
}
