use mcss_snippet_filter::{snippet_filter::{contains_doc_macros, DOC_MACRO_REPLACEMENTS}, strip_doc_macros};
use proptest::prelude::*;

// Text built from characters that can't spell out either marker.
fn marker_free_text() -> impl Strategy<Value = String> {
  "[a-z0-9 (){};,.…čř\n]{0,64}"
}

// Arguments with balanced parentheses, optionally containing nested marker calls.
fn balanced_args() -> impl Strategy<Value = String> {
  let leaf = "[a-z0-9 ,]{0,8}".prop_map(|text| text);

  leaf.prop_recursive(4, 32, 4, |inner| {
    prop_oneof![
      inner.clone().prop_map(|text| format!("({})", text)),
      inner.clone().prop_map(|text| format!("DOXYGEN_IGNORE({})", text)),
      inner.clone().prop_map(|text| format!("DOXYGEN_ELLIPSIS({})", text)),
      (inner.clone(), inner).prop_map(|(left, right)| format!("{}{}", left, right))
    ]
  })
}

fn snippet_with_calls() -> impl Strategy<Value = String> {
  prop::collection::vec((marker_free_text(), prop::option::of((any::<bool>(), balanced_args()))), 0..6)
    .prop_map(|pieces| {
      pieces
        .into_iter()
        .map(|(text, maybe_call)| match maybe_call {
          Some((true, args)) => format!("{}DOXYGEN_ELLIPSIS({})", text, args),
          Some((false, args)) => format!("{}DOXYGEN_IGNORE({})", text, args),
          None => text
        })
        .collect::<String>()
    })
}

// Restarts the search from the start of the text after every replacement.
fn strip_restarting_from_zero(code: &str) -> Result<String, (&'static str, usize)> {
  let mut stripped: String = code.to_string();

  for &(marker, replacement) in DOC_MACRO_REPLACEMENTS.iter() {
    while let Some(call_start) = stripped.find(marker) {
      let mut depth: usize = 1;
      let mut call_end: Option<usize> = None;

      for (index, some_byte) in stripped.bytes().enumerate().skip(call_start + marker.len()) {
        if some_byte == b'(' {
          depth += 1;
        }
        else if some_byte == b')' {
          depth -= 1;

          if depth == 0 {
            call_end = Some(index);
            break;
          }
        }
      }

      match call_end {
        Some(end_index) => stripped.replace_range(call_start..=end_index, replacement),
        None => return Err((marker, call_start))
      }
    }
  }

  return Ok(stripped);
}

// Concatenated fragments that can splice markers together once a call is removed.
fn marker_fragments() -> impl Strategy<Value = String> {
  let fragments: Vec<&'static str> = vec![
    "DOXYGEN_",
    "IGNORE(",
    "ELLIPSIS(",
    "DOXYGEN_IGNORE(",
    "DOXYGEN_ELLIPSIS(",
    "(",
    ")",
    "x",
    "…",
    " "
  ];

  prop::collection::vec(prop::sample::select(fragments), 0..24)
    .prop_map(|pieces| pieces.concat())
}

proptest! {
  #[test]
  fn matches_restarting_search(code in marker_fragments()) {
    let resumed = strip_doc_macros(&code)
      .map_err(|unbalanced_call| (unbalanced_call.marker, unbalanced_call.offset));

    prop_assert_eq!(resumed, strip_restarting_from_zero(&code));
  }

  #[test]
  fn marker_free_text_is_unchanged(text in marker_free_text()) {
    prop_assert_eq!(strip_doc_macros(&text), Ok(text.clone()));
  }

  #[test]
  fn ellipsis_call_collapses(args in balanced_args()) {
    let code: String = format!("DOXYGEN_ELLIPSIS({})", args);
    prop_assert_eq!(strip_doc_macros(&code), Ok(String::from("…")));
  }

  #[test]
  fn ignore_call_disappears(args in balanced_args()) {
    let code: String = format!("DOXYGEN_IGNORE({})", args);
    prop_assert_eq!(strip_doc_macros(&code), Ok(String::new()));
  }

  #[test]
  fn output_has_no_markers_and_is_stable(code in snippet_with_calls()) {
    let stripped: String = strip_doc_macros(&code).unwrap();

    prop_assert!(!contains_doc_macros(&stripped));
    prop_assert_eq!(strip_doc_macros(&stripped), Ok(stripped.clone()));
  }

  #[test]
  fn missing_close_is_rejected(args in balanced_args(), prefix in marker_free_text()) {
    // The prefix may contain unbalanced parentheses of its own, which must not matter.
    let code: String = format!("{}DOXYGEN_ELLIPSIS(({}", prefix, args);
    prop_assert!(strip_doc_macros(&code).is_err());
  }
}
