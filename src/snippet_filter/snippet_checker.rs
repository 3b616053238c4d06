use std::{fs, io, path::{Path, PathBuf}};

use super::{find_call_end, strip_doc_macros, DOC_MACRO_REPLACEMENTS};

pub const DEFAULT_SNIPPET_EXTENSIONS: [&'static str; 6] = ["cpp", "h", "hpp", "cxx", "cc", "c"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetProblem {
  pub path: PathBuf,
  pub line: usize,
  pub column: usize,
  pub marker: &'static str
}

impl SnippetProblem {
  pub fn describe(&self) -> String {
    return format!(
      "{}:{}:{}: unmatched {}) parentheses",
      self.path.to_string_lossy(),
      self.line,
      self.column,
      self.marker
    );
  }
}

// 1-based line and column (in chars) of a byte offset.
pub fn line_and_column(contents: &str, offset: usize) -> (usize, usize) {
  let mut offset: usize = offset.min(contents.len());

  while !contents.is_char_boundary(offset) {
    offset -= 1;
  }

  let before: &str = &contents[..offset];
  let line: usize = before.matches('\n').count() + 1;

  let line_start: usize = match before.rfind('\n') {
    Some(newline_index) => newline_index + 1,
    None => 0
  };

  return (line, before[line_start..].chars().count() + 1);
}

/*
  Unlike strip_doc_macros, this doesn't stop at the first bad call. Every marker occurrence in
  the snippet as written is scanned on its own, so a single file can report several problems.
*/
pub fn check_snippet(path: &Path, contents: &str) -> Vec<SnippetProblem> {
  let mut occurrences: Vec<(usize, &'static str)> = DOC_MACRO_REPLACEMENTS
    .iter()
    .flat_map(|&(marker, _)| {
      contents
        .match_indices(marker)
        .map(move |(offset, _)| (offset, marker))
    })
    .collect();

  occurrences.sort();

  let mut problems: Vec<SnippetProblem> = occurrences
    .into_iter()
    .filter(|&(offset, marker)| find_call_end(contents, offset + marker.len()).is_none())
    .map(|(offset, marker)| {
      let (line, column) = line_and_column(contents, offset);

      SnippetProblem {
        path: path.to_path_buf(),
        line,
        column,
        marker
      }
    })
    .collect();

  // Calls spliced together by a replacement only show up when actually stripping. The offset
  // then points into the partially stripped text, so the position is approximate.
  if problems.is_empty() {
    if let Err(unbalanced_call) = strip_doc_macros(contents) {
      let (line, column) = line_and_column(contents, unbalanced_call.offset);

      problems.push(SnippetProblem {
        path: path.to_path_buf(),
        line,
        column,
        marker: unbalanced_call.marker
      });
    }
  }

  return problems;
}

fn has_snippet_extension(file_path: &Path, extensions: &[String]) -> bool {
  return match file_path.extension() {
    Some(extension) => extensions
      .iter()
      .any(|valid_extension| extension.to_string_lossy() == valid_extension.as_str()),
    None => false
  }
}

// Symlinked directories are skipped. Symlinked files are kept.
fn collect_snippet_files(
  dir_path: &Path,
  extensions: &[String],
  found_files: &mut Vec<PathBuf>
) -> io::Result<()> {
  let mut entries: Vec<(PathBuf, fs::FileType)> = fs::read_dir(dir_path)?
    .map(|entry_result| entry_result.and_then(|entry| Ok((entry.path(), entry.file_type()?))))
    .collect::<io::Result<Vec<(PathBuf, fs::FileType)>>>()?;

  entries.sort_by(|(left_path, _), (right_path, _)| left_path.cmp(right_path));

  for (entry_path, file_type) in entries {
    if file_type.is_dir() {
      collect_snippet_files(&entry_path, extensions, found_files)?;
    }
    else if has_snippet_extension(&entry_path, extensions) {
      if file_type.is_file() || (file_type.is_symlink() && entry_path.is_file()) {
        found_files.push(entry_path);
      }
    }
  }

  Ok(())
}

/// Expands directories (recursively, filtered by extension) into a sorted file list. Paths
/// given explicitly as files are always kept.
pub fn snippet_files_in(paths: &[PathBuf], extensions: &[String]) -> io::Result<Vec<PathBuf>> {
  let mut found_files: Vec<PathBuf> = Vec::new();

  for given_path in paths {
    if given_path.is_dir() {
      collect_snippet_files(given_path, extensions, &mut found_files)?;
    }
    else {
      found_files.push(given_path.clone());
    }
  }

  return Ok(found_files);
}

pub fn check_files(file_paths: &[PathBuf]) -> io::Result<Vec<SnippetProblem>> {
  let mut all_problems: Vec<SnippetProblem> = Vec::new();

  for file_path in file_paths {
    let contents: String = fs::read_to_string(file_path)?;
    all_problems.extend(check_snippet(file_path, &contents));
  }

  return Ok(all_problems);
}

pub fn check_paths(paths: &[PathBuf], extensions: &[String]) -> io::Result<Vec<SnippetProblem>> {
  return check_files(&snippet_files_in(paths, extensions)?);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::snippet_filter::{ELLIPSIS_MARKER, IGNORE_MARKER};

  fn default_extensions() -> Vec<String> {
    DEFAULT_SNIPPET_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
  }

  #[test]
  fn computes_line_and_column() {
    let contents: &str = "ab\ncd\nčxy";

    assert_eq!(line_and_column(contents, 0), (1, 1));
    assert_eq!(line_and_column(contents, 4), (2, 2));
    // 'x' comes after the two-byte 'č'
    assert_eq!(line_and_column(contents, 8), (3, 2));
    assert_eq!(line_and_column(contents, 1000), (3, 4));
  }

  #[test]
  fn well_formed_snippet_has_no_problems() {
    let problems = check_snippet(
      Path::new("ok.cpp"),
      "int main() {\n  DOXYGEN_ELLIPSIS(foo(1, 2));\n  DOXYGEN_IGNORE()\n}\n"
    );

    assert!(problems.is_empty());
  }

  #[test]
  fn reports_every_unbalanced_call() {
    let contents: &str = "DOXYGEN_IGNORE(a\nint x;\n  DOXYGEN_ELLIPSIS(b(c)\n";
    let problems = check_snippet(Path::new("bad.cpp"), contents);

    assert_eq!(
      problems,
      vec![
        SnippetProblem {
          path: PathBuf::from("bad.cpp"),
          line: 1,
          column: 1,
          marker: IGNORE_MARKER
        },
        SnippetProblem {
          path: PathBuf::from("bad.cpp"),
          line: 3,
          column: 3,
          marker: ELLIPSIS_MARKER
        }
      ]
    );

    assert_eq!(problems[1].describe(), "bad.cpp:3:3: unmatched DOXYGEN_ELLIPSIS() parentheses");
  }

  #[test]
  fn reports_spliced_call() {
    let problems = check_snippet(Path::new("splice.cpp"), "DOXYGEN_DOXYGEN_IGNORE()IGNORE(");

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].marker, IGNORE_MARKER);
  }

  #[test]
  fn walks_directories_in_sorted_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_dir = temp_dir.path().join("nested");
    fs::create_dir(&nested_dir).unwrap();

    fs::write(temp_dir.path().join("b.cpp"), "DOXYGEN_IGNORE(").unwrap();
    fs::write(temp_dir.path().join("a.h"), "DOXYGEN_ELLIPSIS(x)").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "DOXYGEN_IGNORE(").unwrap();
    fs::write(nested_dir.join("c.hpp"), "\n DOXYGEN_ELLIPSIS((").unwrap();

    let problems = check_paths(&[temp_dir.path().to_path_buf()], &default_extensions()).unwrap();

    let located: Vec<(String, usize, usize)> = problems
      .iter()
      .map(|problem| (
        problem.path.file_name().unwrap().to_string_lossy().to_string(),
        problem.line,
        problem.column
      ))
      .collect();

    assert_eq!(
      located,
      vec![
        ("b.cpp".to_string(), 1, 1),
        ("c.hpp".to_string(), 2, 2)
      ]
    );
  }

  #[test]
  fn explicit_files_ignore_extension_filter() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snippet_path = temp_dir.path().join("snippet.txt");
    fs::write(&snippet_path, "DOXYGEN_IGNORE(").unwrap();

    let problems = check_paths(&[snippet_path], &default_extensions()).unwrap();
    assert_eq!(problems.len(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn symlinked_directories_are_not_followed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snippets_dir = temp_dir.path().join("snippets");
    fs::create_dir(&snippets_dir).unwrap();
    fs::write(snippets_dir.join("a.cpp"), "DOXYGEN_IGNORE(x)").unwrap();
    fs::write(temp_dir.path().join("real.h"), "int y;").unwrap();

    std::os::unix::fs::symlink(&snippets_dir, snippets_dir.join("loop")).unwrap();
    std::os::unix::fs::symlink(temp_dir.path().join("real.h"), snippets_dir.join("linked.h")).unwrap();

    let found_files: Vec<PathBuf> = snippet_files_in(&[snippets_dir.clone()], &default_extensions()).unwrap();
    assert_eq!(found_files, vec![snippets_dir.join("a.cpp"), snippets_dir.join("linked.h")]);

    assert!(check_paths(&[snippets_dir], &default_extensions()).unwrap().is_empty());
  }
}
