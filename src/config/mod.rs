use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_registration_days")]
    pub registration_days: i64,
    #[serde(default = "default_user_file")]
    pub user_file: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_session_text_file")]
    pub session_text_file: String,
}

fn default_registration_days() -> i64 {
    30
}
fn default_user_file() -> String {
    "user.csv".to_string()
}
fn default_session_file() -> String {
    "session.csv".to_string()
}
fn default_session_text_file() -> String {
    "session_text.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            registration_days: default_registration_days(),
            user_file: default_user_file(),
            session_file: default_session_file(),
            session_text_file: default_session_text_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("callview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".callview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("callview.conf")
    }

    /// Default dataset directory when none is configured
    pub fn data_dir_default() -> PathBuf {
        PathBuf::from("raw_data")
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

    /// Initialize the configuration file and the dataset directory
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data dir: user provided or default
        let data_dir = custom_data_dir
            .map(PathBuf::from)
            .unwrap_or_else(Self::data_dir_default);

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the dataset directory if not exists
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }
}
