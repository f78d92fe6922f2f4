use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::aggregate_month;
use crate::core::state::AppState;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, RESET, color_for_count, color_for_overtime};
use crate::utils::date::resolve_month;
use crate::utils::formatting::{hours_cell, pad_display};
use unicode_width::UnicodeWidthStr;

/// Handle the `report` command: monthly statistics per employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let state = AppState::load(&store)?;

        let month = resolve_month(month)?;
        let rows = aggregate_month(
            &state.records,
            &state.users,
            &month,
            &state.settings.default_clock_in,
        );

        if rows.is_empty() {
            warning("No employees to report on.");
            return Ok(());
        }

        println!("\n📊 Monthly report for {}:\n", month.label());

        let id_w = rows.iter().map(|r| r.user_id.len()).max().unwrap_or(2).max(2);
        let name_w = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(r.name.as_str()))
            .max()
            .unwrap_or(8)
            .max(8);
        let dept_w = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(r.department.as_str()))
            .max()
            .unwrap_or(10)
            .max(10);

        println!(
            "{}{} {} {} Present  Late  OT(h)  Rate{}",
            CYAN,
            pad_display("ID", id_w),
            pad_display("Employee", name_w),
            pad_display("Department", dept_w),
            RESET
        );

        for r in &rows {
            println!(
                "{} {} {} {}{:>7}{}  {}{:>4}{}  {:>5}  {:>3}%",
                pad_display(&r.user_id, id_w),
                pad_display(&r.name, name_w),
                pad_display(&r.department, dept_w),
                color_for_count(r.present),
                r.present,
                RESET,
                color_for_count(r.late),
                r.late,
                RESET,
                hours_cell(r.ot_total),
                r.rate,
            );
        }

        let total_present: u32 = rows.iter().map(|r| r.present).sum();
        let total_late: u32 = rows.iter().map(|r| r.late).sum();
        let total_ot: f64 = rows.iter().map(|r| r.ot_total).sum();

        println!(
            "\nTotals: {} employee(s), present {}, late {}, overtime {}{:.1}h{}",
            rows.len(),
            total_present,
            total_late,
            color_for_overtime(total_ot),
            total_ot,
            RESET
        );
    }
    Ok(())
}
