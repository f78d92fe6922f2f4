use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite store with its schema
///  - the seed collections (users, settings, records) for missing keys
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }

    println!("⚙️  Initializing punchcard…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Store      : {}", &cfg.database);

    // Opening creates the schema; loading fills in seeds for missing keys,
    // save_all materializes them.
    let mut store = SqliteStore::open(&cfg.database)?;
    let state = AppState::load(&store)?;
    state.save_all(&mut store)?;

    println!(
        "✅ Store initialized with {} employee(s) and {} record(s)",
        state.users.len(),
        state.records.len()
    );

    // Internal log is best effort here
    if let Err(e) = log::ttlog(&store.conn, "init", "", "Store initialized") {
        eprintln!("⚠️  Could not write internal log: {}", e);
    }

    Ok(())
}
