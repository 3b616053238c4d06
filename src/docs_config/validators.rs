use regex::Regex;

lazy_static! {
  static ref PAGE_ID_REGEX: Regex = Regex::new("^[-_a-zA-Z0-9.]+$").unwrap();
  static ref CODE_LANGUAGE_REGEX: Regex = Regex::new("^[-+#_a-zA-Z0-9 ]+$").unwrap();
}

pub fn is_valid_page_id(page_id: &str) -> bool {
  return PAGE_ID_REGEX.is_match(page_id);
}

pub fn is_valid_code_language(language: &str) -> bool {
  return CODE_LANGUAGE_REGEX.is_match(language);
}

pub fn is_blank(value: &str) -> bool {
  return value.trim().is_empty();
}

#[test]
fn test_validators() {
  assert!(is_valid_page_id("annotated"));
  assert!(is_valid_page_id("corrade-credits-contributors.html"));
  assert!(!is_valid_page_id("two words"));
  assert!(!is_valid_page_id(""));

  assert!(is_valid_code_language("C++"));
  assert!(is_valid_code_language("C#"));
  assert!(is_valid_code_language("Objective-C"));
  assert!(!is_valid_code_language("C++\n"));
  assert!(!is_valid_code_language("'"));

  assert!(is_blank("  \t"));
  assert!(!is_blank(" x "));
}
