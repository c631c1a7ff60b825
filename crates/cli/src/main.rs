// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod config;
mod confirm;
mod render;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use helpdesk_console::{Notice, NoticeLevel};
use helpdesk_console_api::{ApiError, Console, HttpTransport};
use tokio::sync::broadcast;
use tracing::{debug, level_filters::LevelFilter};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::{ConsoleConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};
use crate::confirm::Confirmer;

/// Helpdesk console - manage users, departments and support requests
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API origin, optionally with a path prefix
    #[arg(long, env = "HELPDESK_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "HELPDESK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Answer "yes" to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q. Logs go to stderr; stdout carries lists.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config: ConsoleConfig = ConsoleConfig::new(&args.backend_url, args.timeout_secs, args.yes)
        .wrap_err("Invalid configuration")?;
    debug!(backend = %config.backend_url(), timeout = ?config.timeout(), "Starting console");

    let transport: HttpTransport =
        HttpTransport::new(config.backend_url().clone(), config.timeout())
            .wrap_err("Could not set up the HTTP client")?;
    let console: Console<HttpTransport, Confirmer> =
        Console::new(transport, Confirmer::from_flag(config.assume_yes()));

    let mut notices: broadcast::Receiver<Notice> = console.notices().subscribe();
    let action: &'static str = args.command.action();
    let result: Result<Option<String>, ApiError> = args.command.run(&console).await;
    if let Ok(Some(listing)) = &result {
        println!("{listing}");
    }

    let mut reported: bool = false;
    while let Ok(notice) = notices.try_recv() {
        if notice.level == NoticeLevel::Error {
            reported = true;
            eprintln!("{}", render::notice(&notice));
        } else {
            println!("{}", render::notice(&notice));
        }
    }

    if let Err(err) = result {
        if !reported {
            eprintln!("{}", err.operator_message(action));
        }
        debug!(error = ?err, "Command failed");
        std::process::exit(1);
    }
    Ok(())
}
