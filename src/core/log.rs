use crate::db::log::load_log;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Blue,
        "batch" => Colour::Yellow,
        "users" => Colour::Purple,
        "settings" => Colour::Cyan,
        "export" => Colour::Blue,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        let entries = load_log(&store.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        // Operation column: colored op word plus plain target, padded on the
        // visible length (ANSI stripped), capped at 40.
        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);
            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            let visible_len = strip_ansi(&colored).len();
            let padding = " ".repeat(op_w.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
