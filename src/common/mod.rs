pub mod prompt;

pub fn basic_configure_replace<'a>(
  the_str: impl AsRef<str>,
  replacements: impl IntoIterator<Item=(&'a str, String)>
) -> String {
  let mut final_string: String = the_str.as_ref().to_string();

  for (to_replace, replacement_text) in replacements {
    final_string = final_string.replace(
      &format!("@{}@", to_replace),
      &replacement_text
    )
  }

  return final_string;
}

#[test]
fn test_configure_replace() {
  assert_eq!(
    basic_configure_replace(
      "<p>@PROJECT_NAME@ docs, @PROJECT_NAME@ @MISSING@</p>",
      [("PROJECT_NAME", String::from("Corrade"))]
    ),
    "<p>Corrade docs, Corrade @MISSING@</p>"
  );
}
