// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use fleetdesk_app::ScreenKind;
use fleetdesk_data::{APP_NAME, SnapshotSource};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CONFIG_VERSION: i64 = 1;
pub const CONFIG_PATH_ENV: &str = "FLEETDESK_CONFIG_PATH";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_START_SCREEN: ScreenKind = ScreenKind::Maintenance;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub start_screen: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [data], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Run `fleetdesk --print-example-config` for the current schema",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(snapshot_path) = &self.data.snapshot_path {
            fleetdesk_data::validate_snapshot_path(snapshot_path)
                .with_context(|| format!("invalid data.snapshot_path in {}", path.display()))?;
        }

        if let Some(screen) = &self.ui.start_screen
            && ScreenKind::parse(screen).is_none()
        {
            bail!(
                "ui.start_screen in {} must be one of maintenance, trips, trucks, employees, party; got {screen:?}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level {
            EnvFilter::try_new(level).with_context(|| {
                format!(
                    "log.level in {} is not a valid filter directive: {level:?}",
                    path.display()
                )
            })?;
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!("log.file in {} must not be empty", path.display());
        }

        Ok(())
    }

    /// Config path first, then the env override, then the built-in demo data.
    pub fn snapshot_source(&self) -> Result<SnapshotSource> {
        if let Some(path) = &self.data.snapshot_path {
            return Ok(SnapshotSource::File(PathBuf::from(path)));
        }
        Ok(match fleetdesk_data::env_snapshot_path()? {
            Some(path) => SnapshotSource::File(path),
            None => SnapshotSource::Demo,
        })
    }

    pub fn start_screen(&self) -> ScreenKind {
        self.ui
            .start_screen
            .as_deref()
            .and_then(ScreenKind::parse)
            .unwrap_or(DEFAULT_START_SCREEN)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }
        let cache_root = dirs::cache_dir().ok_or_else(|| {
            anyhow!("cannot resolve cache directory; set [log].file in the config")
        })?;
        Ok(cache_root.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# fleetdesk config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# Optional. JSON fleet snapshot; FLEETDESK_DATA_PATH is used when unset,\n# and the built-in demo records when neither is set.\n# snapshot_path = \"/absolute/path/to/fleet.json\"\n\n[ui]\n# One of: maintenance, trips, trucks, employees, party\nstart_screen = \"{}\"\n\n[log]\n# tracing filter directive; FLEETDESK_LOG overrides it\nlevel = \"{}\"\n# Optional. Default is the platform cache dir (for example ~/.cache/fleetdesk/fleetdesk.log)\n# file = \"/absolute/path/to/fleetdesk.log\"\n",
            path.display(),
            DEFAULT_START_SCREEN.label(),
            DEFAULT_LOG_LEVEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CONFIG_PATH_ENV, Config};
    use anyhow::Result;
    use fleetdesk_app::ScreenKind;
    use fleetdesk_data::{DATA_PATH_ENV, SnapshotSource};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.start_screen(), ScreenKind::Maintenance);
        assert_eq!(config.log_level(), "info");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nstart_screen = \"trucks\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[data], [ui], and [log]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[data]\nsnapshot_path = \"/srv/fleet/fleet.json\"\n[ui]\nstart_screen = \"party\"\n[log]\nlevel = \"fleetdesk=debug,warn\"\nfile = \"/tmp/fleetdesk.log\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(
            config.snapshot_source()?,
            SnapshotSource::File(PathBuf::from("/srv/fleet/fleet.json"))
        );
        assert_eq!(config.start_screen(), ScreenKind::Parties);
        assert_eq!(config.log_level(), "fleetdesk=debug,warn");
        assert_eq!(config.log_file()?, PathBuf::from("/tmp/fleetdesk.log"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn unknown_start_screen_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_screen = \"garage\"\n")?;
        let error = Config::load(&path).expect_err("unknown screen should fail");
        let message = error.to_string();
        assert!(message.contains("ui.start_screen"), "got {message}");
        assert!(message.contains("garage"), "got {message}");
        Ok(())
    }

    #[test]
    fn invalid_log_level_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nlevel = \"fleetdesk=loud\"\n")?;
        let error = Config::load(&path).expect_err("bad directive should fail");
        assert!(error.to_string().contains("log.level"));
        Ok(())
    }

    #[test]
    fn empty_log_file_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nfile = \" \"\n")?;
        let error = Config::load(&path).expect_err("empty log file should fail");
        assert!(error.to_string().contains("log.file"));
        Ok(())
    }

    #[test]
    fn snapshot_path_rejects_uri_style_value() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[data]\nsnapshot_path = \"https://evil.example/fleet.json\"\n",
        )?;
        let error = Config::load(&path).expect_err("URI snapshot path should fail validation");
        let message = format!("{error:#}");
        assert!(message.contains("data.snapshot_path"), "got {message}");
        assert!(message.contains("looks like a URI"), "got {message}");
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("fleetdesk/config.toml"));
        Ok(())
    }

    #[test]
    fn snapshot_source_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[data]\nsnapshot_path = \"/explicit/fleet.json\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(DATA_PATH_ENV, "/from/env.json");
        }
        let config = Config::load(&path)?;
        let source = config.snapshot_source()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(DATA_PATH_ENV);
        }
        assert_eq!(
            source,
            SnapshotSource::File(PathBuf::from("/explicit/fleet.json"))
        );
        Ok(())
    }

    #[test]
    fn snapshot_source_uses_env_override_when_config_is_silent() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(DATA_PATH_ENV, "/from/env-only.json");
        }
        let config = Config::load(&path)?;
        let source = config.snapshot_source()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(DATA_PATH_ENV);
        }
        assert_eq!(
            source,
            SnapshotSource::File(PathBuf::from("/from/env-only.json"))
        );
        Ok(())
    }

    #[test]
    fn snapshot_source_falls_back_to_demo_data() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var(DATA_PATH_ENV);
        }
        let config = Config::load(&path)?;
        assert_eq!(config.snapshot_source()?, SnapshotSource::Demo);
        Ok(())
    }

    #[test]
    fn snapshot_source_rejects_uri_style_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(DATA_PATH_ENV, "https://example.com/fleet.json");
        }
        let config = Config::load(&path)?;
        let result = config.snapshot_source();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(DATA_PATH_ENV);
        }
        let error = result.expect_err("uri-style env override should fail");
        let message = format!("{error:#}");
        assert!(message.contains(DATA_PATH_ENV), "got {message}");
        assert!(message.contains("looks like a URI"), "got {message}");
        Ok(())
    }

    #[test]
    fn log_file_defaults_under_cache_dir() -> Result<()> {
        let config = Config::default();
        let file = config.log_file()?;
        assert!(file.ends_with("fleetdesk/fleetdesk.log"), "got {}", file.display());
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[data]"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("[log]"));

        std::fs::write(&path, &example)?;
        let config = Config::load(&path)?;
        assert_eq!(config.start_screen(), ScreenKind::Maintenance);
        assert_eq!(config.log_level(), "info");
        Ok(())
    }
}
