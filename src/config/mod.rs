use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Local machine configuration: where the store lives and per-user CLI
/// conveniences. Domain settings (default hours, departments, theme, ...)
/// are a stored collection, not part of this file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Employee id used by `in`/`out` when --user is not given.
    #[serde(default)]
    pub default_user: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_user: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchcard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchcard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchcard.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchcard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            let mut cfg: Config =
                serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file");
            cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
            cfg
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            default_user: None,
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("❌ Failed to serialize configuration");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Store:       {:?}", db_path);

        Ok(())
    }
}

/// Expand a leading "~/" using the platform home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
