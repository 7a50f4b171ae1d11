// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "FLEETDESK_LOG";

/// Installs the global subscriber, appending plain-text lines to the
/// configured log file. The terminal itself belongs to the TUI.
pub fn init_tracing(config: &Config) -> Result<PathBuf> {
    let path = config.log_file()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| {
            format!(
                "open log file {}; set [log].file to a writable path",
                path.display()
            )
        })?;

    let env_value = env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), config.log_level())?;
    file_subscriber(filter, Mutex::new(file))
        .try_init()
        .context("install tracing subscriber")?;
    Ok(path)
}

/// `FLEETDESK_LOG` wins over the configured level when it is set.
fn build_filter(env_value: Option<&str>, configured: &str) -> Result<EnvFilter> {
    match env_value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("{LOG_ENV}={directives:?} is not a valid filter directive")),
        None => EnvFilter::try_new(configured)
            .with_context(|| format!("log level {configured:?} is not a valid filter directive")),
    }
}

fn file_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer),
    )
}
