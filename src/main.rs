//! Entry point for the book preview window.
//!
//! - Parse command-line arguments.
//! - Load configuration from `conf/config.toml` (or `--config`).
//! - Install logging and the Ctrl+C handler, then launch the GUI.

mod app;
mod config;
mod epub_loader;
mod pagination;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str =
    "Usage: book-preview <path-to-book> [--online] [--preview-pages N] [--config PATH]";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// True once per Ctrl+C; the UI polls this to run its safe shutdown.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::AcqRel)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    path: PathBuf,
    available_online: bool,
    preview_pages: Option<u32>,
    config_path: PathBuf,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if !args.path.exists() {
        return Err(anyhow!("File not found: {}", args.path.display()));
    }

    let mut config = load_config(&args.config_path);
    if args.available_online {
        config.access.available_online = true;
    }
    if args.preview_pages.is_some() {
        config.access.preview_pages = args.preview_pages;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if let Err(err) = ctrlc::set_handler(|| SIGINT_REQUESTED.store(true, Ordering::Release)) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }

    info!(
        path = %args.path.display(),
        level = %config.log_level,
        available_online = config.access.available_online,
        preview_pages = ?config.access.preview_pages,
        "Starting book preview"
    );
    info!(
        scroll_debounce_ms = config.tuning.scroll_debounce_ms,
        resize_debounce_ms = config.tuning.resize_debounce_ms,
        jump_settle_ms = config.tuning.jump_settle_ms,
        min_visible_overlap_px = config.tuning.min_visible_overlap_px,
        load_timeout_secs = config.tuning.load_timeout_secs,
        "Active preview tuning"
    );
    run_app(config, args.path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut path = None;
    let mut available_online = false;
    let mut preview_pages = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--online" => available_online = true,
            "--preview-pages" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--preview-pages needs a value\n{USAGE}"))?;
                let pages = raw
                    .parse::<u32>()
                    .with_context(|| format!("Invalid --preview-pages value {raw:?}"))?;
                preview_pages = Some(pages);
            }
            "--config" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                config_path = PathBuf::from(raw);
            }
            flag if flag.starts_with("--") => {
                return Err(anyhow!("Unknown option {flag}\n{USAGE}"));
            }
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => return Err(anyhow!("Unexpected extra argument {arg:?}\n{USAGE}")),
        }
    }

    let path = path.ok_or_else(|| anyhow!(USAGE))?;
    Ok(CliArgs {
        path,
        available_online,
        preview_pages,
        config_path,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!(%level, "RUST_LOG is set; ignoring config log level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
