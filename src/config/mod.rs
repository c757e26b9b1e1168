use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub visit_log: String,
    pub master_data: String,
    /// Empty means: `Photos` directory next to the visit log.
    #[serde(default)]
    pub photo_dir: String,
    /// Empty means: admin gate disabled.
    #[serde(default)]
    pub admin_password: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visit_log: Self::visit_log_file().to_string_lossy().to_string(),
            master_data: Self::master_data_file().to_string_lossy().to_string(),
            photo_dir: String::new(),
            admin_password: String::new(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fieldlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fieldlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fieldlog.conf")
    }

    /// Return the default path of the visit log
    pub fn visit_log_file() -> PathBuf {
        Self::config_dir().join("visit_log.csv")
    }

    /// Return the default path of the master directory file
    pub fn master_data_file() -> PathBuf {
        Self::config_dir().join("master_data.csv")
    }

    /// Photo directory in effect: configured value, or `Photos` next to
    /// the visit log so `--data` overrides carry it along.
    pub fn resolve_photo_dir(&self) -> PathBuf {
        if self.photo_dir.is_empty() {
            Path::new(&self.visit_log)
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("Photos")
        } else {
            PathBuf::from(&self.photo_dir)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file, pointing the visit log at
    /// `custom_log` when given.
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();

        let log_path = if let Some(name) = custom_log {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::visit_log_file()
        };

        let config = Config {
            visit_log: log_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("cannot serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }

    /// Report configuration values that fall back to defaults or point at
    /// missing files. Used by `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut notes = Vec::new();

        if !Path::new(&self.visit_log).exists() {
            notes.push(format!(
                "visit log does not exist yet: {} (run 'fieldlog init')",
                self.visit_log
            ));
        }
        if !Path::new(&self.master_data).exists() {
            notes.push(format!(
                "master directory file is missing: {} (lookups will resolve to empty RTO/Region)",
                self.master_data
            ));
        }
        if self.admin_password.is_empty() {
            notes.push("admin_password is empty: export and log access are not gated".to_string());
        }

        notes
    }
}
