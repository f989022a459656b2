use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::{AppConfig, OutputFormat};

/// Get the default pizzabot data directory: ~/.pizzabot
pub fn get_pizzabot_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".pizzabot"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.pizzabot/config.toml
    let user_config = get_pizzabot_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let cfg = if user_config.exists() {
        read_config(&user_config)?
    } else if local_config.exists() {
        read_config(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(cfg)
}

/// Loads an explicit config file; a missing file is an error here.
pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let cfg = read_config(path.as_ref())?;
    apply_env_overrides(cfg)
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

// Environment variable overrides (Priority 0: highest)
fn apply_env_overrides(mut cfg: AppConfig) -> anyhow::Result<AppConfig> {
    if let Ok(v) = std::env::var("PIZZABOT_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }

    if let Ok(v) = std::env::var("PIZZABOT_OUTPUT_FORMAT") {
        if !v.trim().is_empty() {
            cfg.output.format = v
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("PIZZABOT_OUTPUT_FORMAT: {e}"))?;
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment variables are process wide; tests that set them run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(key, value);
        let out = f();
        std::env::remove_var(key);
        out
    }

    #[test]
    fn log_level_env_overrides_file_value() {
        let cfg = with_env("PIZZABOT_LOG_LEVEL", "pizzabot_core=trace", || {
            apply_env_overrides(AppConfig::default()).unwrap()
        });
        assert_eq!(cfg.logging.level, "pizzabot_core=trace");
    }

    #[test]
    fn blank_log_level_env_is_ignored() {
        let cfg = with_env("PIZZABOT_LOG_LEVEL", "  ", || {
            apply_env_overrides(AppConfig::default()).unwrap()
        });
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn output_format_env_overrides_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"text\"").unwrap();

        let cfg = with_env("PIZZABOT_OUTPUT_FORMAT", "json", || {
            load_from_path(file.path()).unwrap()
        });
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_output_format_env_is_an_error() {
        let err = with_env("PIZZABOT_OUTPUT_FORMAT", "xml", || {
            apply_env_overrides(AppConfig::default()).unwrap_err()
        });
        assert!(err.to_string().contains("PIZZABOT_OUTPUT_FORMAT"));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn load_from_path_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nconsole = false\nfile = true").unwrap();

        let cfg = read_config(file.path()).unwrap();
        assert!(!cfg.logging.console);
        assert!(cfg.logging.file);
    }

    #[test]
    fn load_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = 3").unwrap();

        let err = read_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }
}
