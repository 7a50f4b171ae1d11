// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use fleetdesk_app::{AppState, ScreenKind};
use fleetdesk_data::{SnapshotSource, demo_snapshot};
use runtime::DataRuntime;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    if options.print_demo_snapshot {
        let json = serde_json::to_string_pretty(&demo_snapshot())
            .context("serialize demo snapshot")?;
        println!("{json}");
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `fleetdesk --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let source = if options.demo {
        SnapshotSource::Demo
    } else {
        config
            .snapshot_source()
            .context("resolve fleet snapshot path")?
    };
    if options.print_data_path {
        println!("{}", data_path_text(&source));
        return Ok(());
    }

    let log_path = logging::init_tracing(&config)?;
    info!(
        config = %options.config_path.display(),
        source = %source,
        log = %log_path.display(),
        "starting fleetdesk"
    );

    let snapshot = source.load().with_context(|| {
        format!(
            "load fleet records from {source}; set [data].snapshot_path or FLEETDESK_DATA_PATH, or pass --demo"
        )
    })?;
    if options.check_only {
        print_check_summary(&source, &snapshot);
        return Ok(());
    }

    let mut state = AppState {
        active_screen: config.start_screen(),
        ..AppState::default()
    };
    let mut runtime = DataRuntime::with_initial_snapshot(source, snapshot);
    fleetdesk_tui::run_app(&mut state, &mut runtime)
}

fn data_path_text(source: &SnapshotSource) -> String {
    match source {
        SnapshotSource::File(path) => path.display().to_string(),
        SnapshotSource::Demo => "(built-in demo data)".to_owned(),
    }
}

fn print_check_summary(source: &SnapshotSource, snapshot: &fleetdesk_app::FleetSnapshot) {
    let counts = ScreenKind::ALL
        .iter()
        .map(|screen| format!("{} {}", snapshot.record_count(*screen), screen.label()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("ok: {source}: {counts}");
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_data_path: bool,
    print_example: bool,
    print_demo_snapshot: bool,
    demo: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_data_path: false,
        print_example: false,
        print_demo_snapshot: false,
        demo: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-data-path" => {
                options.print_data_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--print-demo-snapshot" => {
                options.print_demo_snapshot = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("fleetdesk: browse trucks, trips, maintenance, employees and parties");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-data-path        Print resolved fleet snapshot path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --print-demo-snapshot    Print the demo records as snapshot JSON");
    println!("  --demo                   Launch with the built-in demo records");
    println!("  --check                  Validate config + snapshot and exit");
    println!("  --help                   Show this help");
}
