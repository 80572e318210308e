use std::path::PathBuf;

const APP_DIR_NAME: &str = "vocab-trainer";
const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: PathBuf,
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Directory of the rolling log file, `None` when file logging is off
    pub log_dir: Option<PathBuf>,
    pub shuffle_seed: Option<u64>,
    pub front_label: String,
    pub back_label: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let words_path = lookup("WORDS_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/words.json"));

        let data_dir = lookup("DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(".vocab-trainer"));

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let log_dir = file_logs.then(|| {
            lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs"))
        });

        let shuffle_seed = lookup("SHUFFLE_SEED").and_then(|value| value.parse::<u64>().ok());

        let front_label = lookup("FRONT_LABEL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "EN".to_string());
        let back_label = lookup("BACK_LABEL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "RU".to_string());

        Self {
            words_path,
            data_dir,
            log_level,
            log_dir,
            shuffle_seed,
            front_label,
            back_label,
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}
