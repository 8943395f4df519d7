//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory (or the file passed with
//! `--config`), then from `EXPENSES_*` environment variables, e.g.
//! `EXPENSES_APP__LEVEL=debug` or `EXPENSES_DATABASE=memory`.
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_SETTINGS_FILE: &str = "settings";
const DEFAULT_DATABASE_PATH: &str = "expenses.db";
const MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// `tracing` level for this binary and the engine.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Database {
    /// `:memory:` selects a throwaway in-memory store.
    pub fn from_path(path: String) -> Self {
        if path == MEMORY_PATH {
            Self::Memory
        } else {
            Self::Sqlite(path)
        }
    }

    pub fn url(&self) -> String {
        match self {
            Self::Memory => String::from("sqlite::memory:"),
            Self::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite(DEFAULT_DATABASE_PATH.to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Mirror {
    pub path: String,
}

impl Default for Mirror {
    fn default() -> Self {
        Self {
            path: engine::DEFAULT_MIRROR_PATH.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: Database,
    pub mirror: Mirror,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file may not.
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        Self::from_builder(
            Config::builder()
                .add_source(file)
                .add_source(Environment::with_prefix("EXPENSES").separator("__")),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(source: &str) -> Settings {
        Settings::from_builder(
            Config::builder().add_source(File::from_str(source, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.app.level, "info");
        assert_eq!(
            settings.database,
            Database::Sqlite("expenses.db".to_string())
        );
        assert_eq!(settings.mirror.path, "expenses.csv");
    }

    #[test]
    fn reads_every_section() {
        let settings = from_toml(
            r#"
            database = "memory"

            [app]
            level = "debug"

            [mirror]
            path = "/tmp/mirror.csv"
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.database, Database::Memory);
        assert_eq!(settings.mirror.path, "/tmp/mirror.csv");
    }

    #[test]
    fn sqlite_path_becomes_url() {
        let settings = from_toml(
            r#"
            [database]
            sqlite = "data/spese.db"
            "#,
        );
        assert_eq!(settings.database.url(), "sqlite:data/spese.db?mode=rwc");
    }

    #[test]
    fn memory_path_selects_memory() {
        assert_eq!(Database::from_path(":memory:".to_string()), Database::Memory);
        assert_eq!(Database::Memory.url(), "sqlite::memory:");
        assert_eq!(
            Database::from_path("a.db".to_string()),
            Database::Sqlite("a.db".to_string())
        );
    }
}
