use std::process::exit;

use clap::Parser;

use mcss_snippet_filter::{cli_config::{clap_cli_config::{Opts, SubCommandStruct}, CLIConfGenerationInfo, CLIStripInfo}, logger::{self, exit_error_log}, program_actions::{handle_check, handle_strip, generate_conf_py, write_default_docs_config, DefaultConfigInfo}};

fn main() {
  let opts: Opts = Opts::parse();
  logger::set_quiet(opts.quiet);

  let result: Result<(), String> = match opts.subcommand {
    SubCommandStruct::Strip(command) => handle_strip(CLIStripInfo::from(command)),
    SubCommandStruct::Check(command) => {
      match handle_check(&command.paths, &command.extensions) {
        Ok(true) => Ok(()),
        Ok(false) => exit(1),
        Err(err_message) => Err(err_message)
      }
    },
    SubCommandStruct::GenConf(command) => {
      generate_conf_py(CLIConfGenerationInfo::from(command)).map(|_| ())
    },
    SubCommandStruct::GenDefault(command) => {
      write_default_docs_config(DefaultConfigInfo {
        docs_dir: &command.dir,
        project_name: &command.project_name,
        project_url: command.project_url.as_deref(),
        assume_yes: command.yes
      }).map(|_| ())
    }
  };

  if let Err(err_message) = result {
    exit_error_log(err_message);
  }
}
