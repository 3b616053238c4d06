pub mod snippet_checker;

use thiserror::Error;

pub const ELLIPSIS_MARKER: &'static str = "DOXYGEN_ELLIPSIS(";
pub const IGNORE_MARKER: &'static str = "DOXYGEN_IGNORE(";

/*
  Code wrapped in DOXYGEN_ELLIPSIS() is replaced by a unicode ellipsis, code wrapped in
  DOXYGEN_IGNORE() is replaced by nothing. Snippets stay compilable by defining both as
  pass-throughs:

    #define DOXYGEN_ELLIPSIS(...) __VA_ARGS__
    #define DOXYGEN_IGNORE(...) __VA_ARGS__

  Markers are resolved in this order. All ellipsis calls are replaced before any ignore call
  is looked at.
*/
pub const DOC_MACRO_REPLACEMENTS: [(&'static str, &'static str); 2] = [
  (ELLIPSIS_MARKER, "…"),
  (IGNORE_MARKER, "")
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unmatched {marker}) parentheses at byte {offset} in:\n{snippet}")]
pub struct UnbalancedMarkerCall {
  pub marker: &'static str,
  // Both refer to the partially stripped text at the point of failure, which isn't
  // necessarily the snippet as written.
  pub offset: usize,
  pub snippet: String
}

/// Returns the byte index of the `)` closing a call whose arguments start at `args_start`
/// (one past the opening parenthesis), or None if the parentheses never balance.
pub fn find_call_end(code: &str, args_start: usize) -> Option<usize> {
  let mut depth: usize = 1;

  // Parentheses are ASCII, so they can't appear inside a multi-byte UTF-8 sequence.
  for (index, some_byte) in code.as_bytes()[args_start..].iter().enumerate() {
    match some_byte {
      b'(' => depth += 1,
      b')' => {
        depth -= 1;

        if depth == 0 {
          return Some(args_start + index);
        }
      },
      _ => continue
    }
  }

  return None;
}

fn floor_char_boundary(the_str: &str, mut index: usize) -> usize {
  while !the_str.is_char_boundary(index) {
    index -= 1;
  }

  return index;
}

/// Replaces every `DOXYGEN_ELLIPSIS(...)` call with `…` and every `DOXYGEN_IGNORE(...)` call
/// with nothing.
///
/// Fails without producing any output if one of the calls never balances its parentheses.
pub fn strip_doc_macros(code: &str) -> Result<String, UnbalancedMarkerCall> {
  let mut stripped: String = code.to_string();

  for &(marker, replacement) in DOC_MACRO_REPLACEMENTS.iter() {
    let mut search_from: usize = 0;

    while let Some(found_at) = stripped[search_from..].find(marker) {
      let call_start: usize = search_from + found_at;

      let call_end: usize = match find_call_end(&stripped, call_start + marker.len()) {
        Some(end_index) => end_index,
        None => return Err(UnbalancedMarkerCall {
          marker,
          offset: call_start,
          snippet: stripped
        })
      };

      stripped.replace_range(call_start..=call_end, replacement);

      // Everything before call_start is unchanged and already known to be marker-free. A new
      // occurrence can only be one spliced together across the replacement, so it starts at
      // most marker.len() - 1 bytes earlier.
      search_from = floor_char_boundary(
        &stripped,
        call_start.saturating_sub(marker.len() - 1)
      );
    }
  }

  return Ok(stripped);
}

pub fn contains_doc_macros(code: &str) -> bool {
  return DOC_MACRO_REPLACEMENTS
    .iter()
    .any(|(marker, _)| code.contains(marker));
}

#[cfg(test)]
mod tests {
  use super::*;

  struct StripTestGroup<'a> {
    raw_code: &'a str,
    expected: &'a str
  }

  #[test]
  fn strips_valid_calls() {
    let groups: Vec<StripTestGroup<'_>> = vec![
      StripTestGroup {
        raw_code: "int a = 3;",
        expected: "int a = 3;"
      },
      StripTestGroup {
        raw_code: "DOXYGEN_ELLIPSIS(foo)",
        expected: "…"
      },
      StripTestGroup {
        raw_code: "DOXYGEN_IGNORE(foo(bar(), baz))",
        expected: ""
      },
      StripTestGroup {
        raw_code: "DOXYGEN_IGNORE()",
        expected: ""
      },
      StripTestGroup {
        raw_code: "a DOXYGEN_ELLIPSIS(1) b DOXYGEN_IGNORE(2) c",
        expected: "a … b  c"
      },
      StripTestGroup {
        raw_code: "f(DOXYGEN_ELLIPSIS(x, y), DOXYGEN_ELLIPSIS(z));",
        expected: "f(…, …);"
      },
      StripTestGroup {
        raw_code: "DOXYGEN_IGNORE(a DOXYGEN_ELLIPSIS(b(c)) d)e",
        expected: "e"
      },
      StripTestGroup {
        raw_code: "DOXYGEN_ELLIPSIS(DOXYGEN_IGNORE(x))",
        expected: "…"
      },
      StripTestGroup {
        raw_code: ") stray DOXYGEN_IGNORE((x)) (",
        expected: ") stray  ("
      },
      StripTestGroup {
        raw_code: "Containers::Array<int> a{DOXYGEN_ELLIPSIS(InPlaceInit, {1, 2})};",
        expected: "Containers::Array<int> a{…};"
      },
      StripTestGroup {
        raw_code: "/* ščř */ DOXYGEN_ELLIPSIS(\"ůň\") ✓",
        expected: "/* ščř */ … ✓"
      }
    ];

    for StripTestGroup { raw_code, expected } in groups {
      assert_eq!(
        strip_doc_macros(raw_code).as_deref(),
        Ok(expected),
        "when stripping {:?}",
        raw_code
      );
    }
  }

  #[test]
  fn replacement_can_expose_new_call() {
    // Removing the inner call joins "DOXYGEN_" and "IGNORE(x)" into a fresh call.
    assert_eq!(
      strip_doc_macros("DOXYGEN_DOXYGEN_IGNORE()IGNORE(x)").as_deref(),
      Ok("")
    );

    // The ellipsis glyph sits between the halves, so nothing is joined here.
    assert_eq!(
      strip_doc_macros("[DOXYGEN_DOXYGEN_ELLIPSIS()IGNORE(x)]").as_deref(),
      Ok("[DOXYGEN_…IGNORE(x)]")
    );
  }

  #[test]
  fn unbalanced_calls_fail() {
    assert_eq!(
      strip_doc_macros("DOXYGEN_ELLIPSIS(foo(bar)"),
      Err(UnbalancedMarkerCall {
        marker: ELLIPSIS_MARKER,
        offset: 0,
        snippet: String::from("DOXYGEN_ELLIPSIS(foo(bar)")
      })
    );

    assert_eq!(
      strip_doc_macros("int a; DOXYGEN_IGNORE("),
      Err(UnbalancedMarkerCall {
        marker: IGNORE_MARKER,
        offset: 7,
        snippet: String::from("int a; DOXYGEN_IGNORE(")
      })
    );

    // Calls already replaced are gone from the reported snippet.
    let error = strip_doc_macros("DOXYGEN_ELLIPSIS(x) DOXYGEN_IGNORE(a) DOXYGEN_IGNORE(b").unwrap_err();
    assert_eq!(error.offset, 5);
    assert_eq!(error.snippet, "…  DOXYGEN_IGNORE(b");
    assert_eq!(
      error.to_string(),
      "unmatched DOXYGEN_IGNORE() parentheses at byte 5 in:\n…  DOXYGEN_IGNORE(b"
    );
  }

  #[test]
  fn finds_call_end() {
    assert_eq!(find_call_end("(a(b)c)d", 1), Some(6));
    assert_eq!(find_call_end("()", 1), Some(1));
    assert_eq!(find_call_end("(a(b)", 1), None);
    assert_eq!(find_call_end("(", 1), None);
  }

  #[test]
  fn detects_markers() {
    assert!(contains_doc_macros("x DOXYGEN_IGNORE(y)"));
    assert!(!contains_doc_macros("DOXYGEN_IGNORE x"));
  }
}
