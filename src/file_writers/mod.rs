mod conf_py_writer;

use std::{fs::{self, File}, io::{self, BufWriter, Write}, path::Path};

use crate::docs_config::{DocsConfig, raw_docs_config::RawDocsConfig};

pub use conf_py_writer::{render_conf_py, write_conf_py};

pub fn write_conf_py_file(
  config: &DocsConfig,
  strip_command: &[String],
  file_path: &Path
) -> io::Result<()> {
  let mut writer = BufWriter::new(File::create(file_path)?);
  write_conf_py(config, strip_command, &mut writer)?;
  writer.flush()?;
  Ok(())
}

pub fn write_docs_config_yaml(raw_config: &RawDocsConfig, file_path: &Path) -> io::Result<()> {
  let yaml_contents: String = serde_yaml::to_string(raw_config)
    .map_err(|yaml_error| io::Error::new(io::ErrorKind::InvalidData, yaml_error))?;

  if let Some(parent_dir) = file_path.parent() {
    if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
      fs::create_dir_all(parent_dir)?;
    }
  }

  fs::write(file_path, yaml_contents)?;
  Ok(())
}
