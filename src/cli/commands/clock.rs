use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::worked_hours;
use crate::core::state::AppState;
use crate::core::store::{ClockInOutcome, ClockOutOutcome, clock_in, clock_out};
use crate::db::log::ttlog;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_required_date, today};
use crate::utils::time::{now_hhmm, parse_required_time};

/// Handle the `in` and `out` commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (user, date, time, note, is_in) = match cmd {
        Commands::In {
            user,
            date,
            time,
            note,
        } => (user, date, time, note, true),
        Commands::Out {
            user,
            date,
            time,
            note,
        } => (user, date, time, note, false),
        _ => return Ok(()),
    };

    let mut store = SqliteStore::open(&cfg.database)?;
    let mut state = AppState::load(&store)?;

    let user_id = user
        .clone()
        .or_else(|| cfg.default_user.clone())
        .ok_or_else(|| {
            AppError::Config("No employee given: pass --user or set default_user".to_string())
        })?;
    let user_name = state.require_user(&user_id)?.name.clone();

    let date = match date {
        Some(d) => parse_required_date(d)?,
        None => today(),
    };

    // Explicit --time is validated strictly; only stored values are lenient.
    let time = match time {
        Some(t) => {
            parse_required_time(t)?;
            t.clone()
        }
        None => now_hhmm(),
    };

    if is_in {
        match clock_in(&mut state.records, &user_id, date, &time, note.clone()) {
            ClockInOutcome::Recorded(_) => {
                state.save_records(&mut store)?;
                ttlog(
                    &store.conn,
                    "clock_in",
                    &user_id,
                    &format!("in at {} on {}", time, date),
                )?;
                success(format!("Clocked in {} at {} on {}.", user_name, time, date));
            }
            ClockInOutcome::AlreadyClockedIn => {
                warning(format!(
                    "{} already has a record for {}; nothing to do.",
                    user_name, date
                ));
            }
        }
    } else {
        let policy = state.settings.policy();
        match clock_out(
            &mut state.records,
            &user_id,
            date,
            &time,
            note.clone(),
            &policy,
        ) {
            ClockOutOutcome::Recorded(rec) => {
                state.save_records(&mut store)?;
                ttlog(
                    &store.conn,
                    "clock_out",
                    &user_id,
                    &format!("out at {} on {}", time, date),
                )?;
                let worked = worked_hours(rec.clock_in.as_deref().unwrap_or(""), &time, &policy);
                if rec.ot_hours > 0.0 {
                    success(format!(
                        "Clocked out {} at {} on {}: {:.2}h worked (+{:.1}h overtime).",
                        user_name, time, date, worked, rec.ot_hours
                    ));
                } else {
                    success(format!(
                        "Clocked out {} at {} on {}: {:.2}h worked.",
                        user_name, time, date, worked
                    ));
                }
            }
            ClockOutOutcome::NoOpenSession => {
                warning(format!(
                    "No open session for {} on {}; nothing to do.",
                    user_name, date
                ));
            }
        }
    }

    Ok(())
}
