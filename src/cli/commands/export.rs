use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log::ttlog;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        report,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let state = AppState::load(&store)?;

        ExportLogic::export(&state, *format, file, month, *report, *force)?;

        ttlog(
            &store.conn,
            "export",
            file,
            &format!(
                "{} export ({})",
                format.as_str(),
                if *report { "report" } else { "records" }
            ),
        )?;
    }
    Ok(())
}
