use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log::ttlog;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{Language, Theme};
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_required_time;

/// Handle the `settings` command: print or mutate the stored settings blob.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        default_in,
        default_out,
        lunch_start,
        lunch_end,
        add_dept,
        theme,
        language,
        logo,
        primary_color,
        accent_color,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut state = AppState::load(&store)?;

        let mut changed: Vec<String> = Vec::new();

        if let Some(t) = default_in {
            parse_required_time(t)?;
            state.settings.default_clock_in = t.clone();
            changed.push(format!("default_clock_in={}", t));
        }
        if let Some(t) = default_out {
            parse_required_time(t)?;
            state.settings.default_clock_out = t.clone();
            changed.push(format!("default_clock_out={}", t));
        }
        if let Some(t) = lunch_start {
            parse_required_time(t)?;
            state.settings.lunch_start = t.clone();
            changed.push(format!("lunch_start={}", t));
        }
        if let Some(t) = lunch_end {
            parse_required_time(t)?;
            state.settings.lunch_end = t.clone();
            changed.push(format!("lunch_end={}", t));
        }
        if let Some(d) = add_dept {
            if state.settings.has_department(d) {
                warning(format!("Department '{}' already exists.", d));
            } else {
                state.settings.departments.push(d.clone());
                changed.push(format!("departments+={}", d));
            }
        }
        if let Some(t) = theme {
            state.settings.theme =
                Theme::from_code(t).ok_or_else(|| AppError::Config(format!("Unknown theme: {t}")))?;
            changed.push(format!("theme={}", state.settings.theme.as_str()));
        }
        if let Some(l) = language {
            state.settings.language = Language::from_code(l)
                .ok_or_else(|| AppError::Config(format!("Unknown language: {l}")))?;
            changed.push(format!("language={}", state.settings.language.as_str()));
        }
        if let Some(path) = logo {
            state.settings.custom_logo = Some(path.clone());
            changed.push("custom_logo".to_string());
        }
        if let Some(c) = primary_color {
            state.settings.primary_color = Some(c.clone());
            changed.push(format!("primary_color={}", c));
        }
        if let Some(c) = accent_color {
            state.settings.accent_color = Some(c.clone());
            changed.push(format!("accent_color={}", c));
        }

        if !changed.is_empty() {
            state.save_settings(&mut store)?;
            ttlog(&store.conn, "settings", "", &changed.join(", "))?;
            success(format!("Settings updated: {}.", changed.join(", ")));
        }

        if *print || changed.is_empty() {
            println!("⚙️  Current settings:\n");
            println!("{}", serde_yaml::to_string(&state.settings).unwrap());
        }
    }
    Ok(())
}
