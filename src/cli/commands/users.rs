use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log::ttlog;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::pad_display;
use unicode_width::UnicodeWidthStr;

/// Handle the `users` command: list, add, edit. There is no delete; ids
/// stay referenced by attendance records forever.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users {
        list,
        add,
        edit,
        name,
        dept,
        role,
        username,
        password,
        email,
        avatar,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut state = AppState::load(&store)?;

        if *add {
            let name = name
                .as_ref()
                .ok_or_else(|| AppError::Config("--add requires --name".to_string()))?;
            let dept = dept
                .as_ref()
                .ok_or_else(|| AppError::Config("--add requires --dept".to_string()))?;
            if !state.settings.has_department(dept) {
                return Err(AppError::UnknownDepartment(dept.clone()));
            }

            let role = match role {
                Some(r) => Role::from_code(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?,
                None => Role::Employee,
            };

            let mut user = User::new(&User::next_id(&state.users), name, role, dept);
            user.username = username.clone();
            user.password = password.clone();
            user.email = email.clone();
            user.avatar = avatar.clone();

            let id = user.id.clone();
            state.users.push(user);
            state.save_users(&mut store)?;

            ttlog(&store.conn, "users", &id, &format!("added {}", name))?;
            success(format!("Added employee {} ({}).", name, id));
            return Ok(());
        }

        if let Some(id) = edit {
            let settings = state.settings.clone();
            let Some(user) = state.users.iter_mut().find(|u| &u.id == id) else {
                return Err(AppError::UnknownUser(id.clone()));
            };

            if let Some(n) = name {
                user.name = n.clone();
            }
            if let Some(d) = dept {
                if !settings.has_department(d) {
                    return Err(AppError::UnknownDepartment(d.clone()));
                }
                user.department = d.clone();
            }
            if let Some(r) = role {
                user.role = Role::from_code(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?;
            }
            if username.is_some() {
                user.username = username.clone();
            }
            if password.is_some() {
                user.password = password.clone();
            }
            if email.is_some() {
                user.email = email.clone();
            }
            if avatar.is_some() {
                user.avatar = avatar.clone();
            }

            let name = user.name.clone();
            state.save_users(&mut store)?;

            ttlog(&store.conn, "users", id, &format!("edited {}", name))?;
            success(format!("Updated employee {} ({}).", name, id));
            return Ok(());
        }

        if *list || (!*add && edit.is_none()) {
            if state.users.is_empty() {
                warning("No employees registered yet.");
                return Ok(());
            }

            let id_w = state.users.iter().map(|u| u.id.len()).max().unwrap_or(2);
            let name_w = state
                .users
                .iter()
                .map(|u| UnicodeWidthStr::width(u.name.as_str()))
                .max()
                .unwrap_or(8)
                .max(8);

            println!("\n👥 Employees ({}):\n", state.users.len());
            println!(
                "{}{} {} Role      Department{}",
                CYAN,
                pad_display("ID", id_w),
                pad_display("Name", name_w),
                RESET
            );
            for u in &state.users {
                let username = u
                    .username
                    .as_deref()
                    .map(|n| format!("  {GREY}@{n}{RESET}"))
                    .unwrap_or_default();
                println!(
                    "{} {} {:<9} {}{}",
                    pad_display(&u.id, id_w),
                    pad_display(&u.name, name_w),
                    u.role.as_str(),
                    u.department,
                    username
                );
            }
        }
    }
    Ok(())
}
