use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::core::store::find;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::models::status::AttendanceStatus;
use crate::models::user::User;
use crate::ui::messages::warning;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, MAGENTA, RED, RESET, YELLOW};
use crate::utils::date::{is_weekend, resolve_month};
use crate::utils::formatting::pad_display;
use unicode_width::UnicodeWidthStr;

/// Handle the `timeline` command: a per-employee, per-day grid of one month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline { month, dept } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let state = AppState::load(&store)?;

        let month = resolve_month(month)?;
        let days = month.days();

        let users: Vec<&User> = match dept {
            Some(d) => state.users.iter().filter(|u| &u.department == d).collect(),
            None => state.users.iter().collect(),
        };

        if users.is_empty() {
            warning("No employees match the selection.");
            return Ok(());
        }

        println!("\n📅 Attendance timeline for {}:\n", month.label());

        let name_w = users
            .iter()
            .map(|u| UnicodeWidthStr::width(u.name.as_str()))
            .max()
            .unwrap_or(0)
            .max(8);

        // Header: day-of-month numbers, weekends highlighted
        let mut header = pad_display("Employee", name_w);
        for d in &days {
            use chrono::Datelike;
            let cell = format!("{:>3}", d.day());
            if is_weekend(*d) {
                header.push_str(&format!("{MAGENTA}{cell}{RESET}"));
            } else {
                header.push_str(&cell);
            }
        }
        println!("{}", header);

        for u in &users {
            let mut line = pad_display(&u.name, name_w);
            for d in &days {
                // Compose the 3-char cell plain first, then colorize:
                // escapes must not count toward the cell width.
                let cell = match find(&state.records, &u.id, *d) {
                    Some(rec) => {
                        let flag = if rec.ot_hours > 0.0 { '+' } else { ' ' };
                        let text = format!(" {}{}", rec.status.mark(), flag);
                        format!("{}{}{}", status_color(rec.status), text, RESET)
                    }
                    None => format!("{GREY}  ·{RESET}"),
                };
                line.push_str(&cell);
            }
            println!("{}", line);
        }

        println!(
            "\n  {GREEN}P{RESET} Present  {CYAN}H{RESET} Half-day  {RED}A{RESET} Absent  \
             {YELLOW}L{RESET} Late  {BLUE}V{RESET} Leave  {GREY}W{RESET} Weekend  + overtime"
        );
    }
    Ok(())
}

fn status_color(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::HalfDay => CYAN,
        AttendanceStatus::Absent => RED,
        AttendanceStatus::Late => YELLOW,
        AttendanceStatus::Leave => BLUE,
        AttendanceStatus::Weekend => GREY,
    }
}
