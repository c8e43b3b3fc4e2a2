//! Final output: generating the module and writing it to disk.
//!
//! Writes go through [`write_atomic`], which writes a sibling temp file and
//! renames it over the destination, so readers never observe a half-written
//! module.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use apigen_define::Api;
use tracing::info;

use crate::codegen::generate;
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;

/// Writes content to a file atomically using a temp file and rename.
///
/// Parent directories are created as needed. The temp file is the
/// destination path with `.tmp` appended.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming the path that could not be
/// created, written or renamed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(GeneratorError::WriteError {
            path: path.display().to_string(),
            source: e,
        });
    }

    Ok(())
}

/// Generates the module for `api` and writes it to `path`.
///
/// Generation completes before anything touches the file system, so a
/// failing run leaves an existing file untouched. With `dry_run` the code is
/// printed to stdout instead of written.
///
/// ## Returns
///
/// The generated module text.
pub fn generate_and_write(
    api: &Api,
    config: &GeneratorConfig,
    path: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate(api, config)?;

    if dry_run {
        println!("{}", code);
    } else {
        write_atomic(path, &code)?;
        info!(path = %path.display(), bytes = code.len(), "wrote module");
    }

    Ok(code)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("out"));
    name.push(".tmp");
    path.with_file_name(name)
}
