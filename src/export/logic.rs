use crate::core::report::aggregate_month;
use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{
    RecordExport, record_headers, record_to_row, summary_headers, summary_to_row,
};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::Month;
use std::path::Path;

/// High-level export logic: raw per-day records, or the aggregated monthly
/// report when `report` is set.
pub struct ExportLogic;

impl ExportLogic {
    /// - `file`: absolute path of the output file
    /// - `month`: `None` (everything for records, current month for the
    ///   report) or "YYYY-MM"
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: &str,
        month: &Option<String>,
        report: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let month_filter: Option<Month> = month.as_deref().map(Month::parse).transpose()?;

        if report {
            let window = month_filter.unwrap_or_else(Month::current);
            let rows = aggregate_month(
                &state.records,
                &state.users,
                &window,
                &state.settings.default_clock_in,
            );

            if rows.is_empty() {
                warning("No employees to report on.");
                return Ok(());
            }

            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => export_json(&rows, path)?,
                ExportFormat::Xlsx => {
                    let table: Vec<Vec<String>> = rows.iter().map(summary_to_row).collect();
                    export_xlsx(&summary_headers(), &table, path)?;
                }
            }
        } else {
            let mut rows: Vec<RecordExport> = state
                .records
                .iter()
                .filter(|r| month_filter.as_ref().is_none_or(|m| m.contains(r.date)))
                .map(|r| RecordExport::from_record(r, &state.users))
                .collect();
            rows.sort_by(|a, b| (&a.date, &a.user_id).cmp(&(&b.date, &b.user_id)));

            if rows.is_empty() {
                warning("No records found for the selected range.");
                return Ok(());
            }

            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => export_json(&rows, path)?,
                ExportFormat::Xlsx => {
                    let table: Vec<Vec<String>> = rows.iter().map(record_to_row).collect();
                    export_xlsx(&record_headers(), &table, path)?;
                }
            }
        }

        Ok(())
    }
}
