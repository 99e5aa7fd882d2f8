#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use std::path::Path;

use folio::{validate, Args, Catalog, DataPath, DataPathType};
use folio_chrome::{setup::generate_native_options, setup::WINDOW_TITLE, FolioApp};
use tracing::{error, info, warn};
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

fn log_writer(path: &DataPath) -> (NonBlocking, WorkerGuard) {
    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        path.path(DataPathType::Log),
        format!("folio-{}.log", env!("CARGO_PKG_VERSION")),
    );

    non_blocking(file_appender)
}

/// The returned guard flushes the log file; keep it alive until exit.
fn setup_logging(path: &DataPath) -> WorkerGuard {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let (writer, guard) = log_writer(path);

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);
    let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    guard
}

fn load_catalog(content: Option<&str>) -> folio::Result<Catalog> {
    match content {
        Some(dir) => Catalog::load_dir(Path::new(dir)),
        None => Catalog::embedded(),
    }
}

fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let (args, unrecognized) = Args::parse(&raw_args);

    let path = match &args.datapath {
        Some(datapath) => DataPath::new(datapath),
        None => DataPath::default(),
    };

    let log_guard = setup_logging(&path);

    for arg in &unrecognized {
        warn!("unrecognized argument: {arg}");
    }

    let catalog = match load_catalog(args.content.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("could not load content: {err}");
            drop(log_guard);
            std::process::exit(1);
        }
    };

    let warnings = validate::log_warnings(&catalog);
    if warnings > 0 {
        info!("content loaded with {warnings} warnings");
    }

    let res = eframe::run_native(
        WINDOW_TITLE,
        generate_native_options(),
        Box::new(move |cc| Ok(Box::new(FolioApp::new(&cc.egui_ctx, &path, &args, catalog)))),
    );

    if let Err(err) = res {
        error!("eframe exited with an error: {err}");
        drop(log_guard);
        std::process::exit(1);
    }
}
