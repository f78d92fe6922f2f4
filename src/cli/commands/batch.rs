use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::core::store::batch_mark;
use crate::db::log::ttlog;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use crate::ui::messages::success;
use crate::utils::date::parse_required_date;

/// Handle the `batch` command: one status, one date, many employees.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        date,
        status,
        users,
        dept,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut state = AppState::load(&store)?;

        let date = parse_required_date(date)?;
        let status = AttendanceStatus::from_code(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut selected: Vec<String> = users.clone();
        if let Some(d) = dept {
            if !state.settings.has_department(d) {
                return Err(AppError::UnknownDepartment(d.clone()));
            }
            selected.extend(
                state
                    .users
                    .iter()
                    .filter(|u| &u.department == d)
                    .map(|u| u.id.clone()),
            );
        }
        selected.sort();
        selected.dedup();

        if selected.is_empty() {
            return Err(AppError::EmptySelection(
                "batch mark needs --users and/or --dept".to_string(),
            ));
        }
        for id in &selected {
            state.require_user(id)?;
        }

        let summary = batch_mark(&mut state.records, date, status, &selected);
        state.save_records(&mut store)?;

        ttlog(
            &store.conn,
            "batch",
            &date.to_string(),
            &format!(
                "{} marked for {} employee(s)",
                status.as_str(),
                selected.len()
            ),
        )?;

        success(format!(
            "Batch mark complete for {}: {} created, {} updated.",
            date, summary.created, summary.updated
        ));
    }
    Ok(())
}
