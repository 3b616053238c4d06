use std::{io::{self, BufRead, Write}, path::Path};

use colored::Colorize;

#[derive(Debug, PartialEq)]
pub enum PromptResult {
  Yes,
  No,
  Custom(String),
  Empty
}

impl PromptResult {
  pub fn is_yes_or_no(&self) -> bool {
    return match *self {
      Self::Yes | Self::No => true,
      _ => false
    }
  }

  pub fn from_str(string: &str) -> PromptResult {
    match string.trim() {
      "" => PromptResult::Empty,
      "y" | "Y" => PromptResult::Yes,
      "n" | "N" => PromptResult::No,
      custom_value => PromptResult::Custom(custom_value.to_string())
    }
  }
}

// Asks until the answer satisfies the predicate. Running out of input is an error, since
// otherwise a closed stdin would loop forever.
pub fn prompt_until_with<R, W, T>(
  prompt: &str,
  input: &mut R,
  output: &mut W,
  predicate: T
) -> io::Result<PromptResult>
  where
    R: BufRead,
    W: Write,
    T: Fn(&PromptResult) -> bool
{
  let mut buffer = String::new();

  loop {
    buffer.clear();

    write!(output, "{}", prompt)?;
    output.flush()?;

    if input.read_line(&mut buffer)? == 0 {
      return Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input ended before a valid answer was given"
      ));
    }

    let result: PromptResult = PromptResult::from_str(&buffer);

    if predicate(&result) {
      return Ok(result);
    }
  }
}

pub fn prompt_until_boolean(prompt: &str) -> io::Result<bool> {
  let stdin = io::stdin();
  let stdout = io::stdout();

  return prompt_boolean_with(prompt, &mut stdin.lock(), &mut stdout.lock());
}

pub fn prompt_boolean_with<R: BufRead, W: Write>(
  prompt: &str,
  input: &mut R,
  output: &mut W
) -> io::Result<bool> {
  prompt_until_with(&format!("{} [y/n]: ", prompt), input, output, |result| result.is_yes_or_no())
    .map(|prompt_result_enum| match prompt_result_enum {
      PromptResult::Yes => true,
      PromptResult::No => false,
      _ => unreachable!()
    })
}

/// True if the file doesn't exist yet, the caller already agreed to overwrite, or the user
/// answers yes.
pub fn should_write_file(file_path: &Path, assume_yes: bool) -> io::Result<bool> {
  if !file_path.exists() || assume_yes {
    return Ok(true);
  }

  return prompt_until_boolean(&format!(
    "{} already exists. Do you want to overwrite it?",
    file_path.to_string_lossy().yellow()
  ));
}
