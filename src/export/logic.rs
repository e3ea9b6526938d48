// src/export/logic.rs

use crate::core::loader::DataLoader;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{SampleLimits, build_sample, build_session_rows};
use crate::ui::messages::{info, warning};

use std::io::{self, Write};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export of the loaded dataset.
    ///
    /// - `format`: "csv" exports the flat session collection (one row per
    ///   session, message count included); "json" exports the nested
    ///   bounded sample limited by `limits`.
    /// - `file`: absolute path of the output file.
    /// - `force`: overwrite an existing file without asking.
    pub fn export(
        loader: &DataLoader,
        format: &ExportFormat,
        file: &str,
        limits: SampleLimits,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => {
                let rows = build_session_rows(loader);
                if rows.is_empty() {
                    warning("No sessions loaded, nothing to export.");
                    return Ok(());
                }
                export_csv(&rows, path)
            }
            ExportFormat::Json => {
                let sample = build_sample(loader, limits);
                if sample.is_empty() {
                    warning("No users loaded, nothing to export.");
                    return Ok(());
                }
                export_json(&sample, path)
            }
        }
    }
}

/// Verifica se il file di output può essere creato o sovrascritto.
///
/// - file assente → Ok
/// - file presente e `force` → Ok
/// - file presente senza `force` → chiede conferma all'utente.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
