use std::{process::exit, sync::atomic::{AtomicBool, Ordering}};
use colored::Colorize;

static QUIET: AtomicBool = AtomicBool::new(false);

// Only affects info and success messages. Warnings and errors are always printed.
pub fn set_quiet(is_quiet: bool) {
  QUIET.store(is_quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
  return QUIET.load(Ordering::Relaxed);
}

pub fn info(message: impl AsRef<str>) {
  if !is_quiet() {
    eprintln!("{}", message.as_ref());
  }
}

pub fn success(message: impl AsRef<str>) {
  if !is_quiet() {
    eprintln!("{} {}", "✓".green(), message.as_ref());
  }
}

pub fn warn(message: impl AsRef<str>) {
  eprintln!(
    "{}: {}",
    "Warning".yellow(),
    message.as_ref()
  );
}

pub fn error(message: impl AsRef<str>) {
  eprintln!(
    "{}: {}",
    "Error".red(),
    message.as_ref()
  );
}

pub fn exit_error_log(error_message: impl AsRef<str>) -> ! {
  error(error_message);
  exit(1);
}
