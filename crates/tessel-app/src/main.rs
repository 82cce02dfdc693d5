mod app;
mod cli;

use std::path::PathBuf;

use tessel_config::{toml_loader, validation, ReloadManager, ShellConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "tessel=info";

/// Read the config file, creating it from the template on first run.
/// Also returns the path when there is one to watch.
fn read_config(explicit: Option<&std::path::Path>) -> (ShellConfig, Option<PathBuf>, Vec<String>) {
    let mut problems = Vec::new();
    let path = match tessel_config::config_path(explicit) {
        Ok(path) => path,
        Err(e) => {
            problems.push(format!("no config location, using defaults: {e}"));
            return (ShellConfig::default(), None, problems);
        }
    };
    let config = match toml_loader::load_or_create(&path) {
        Ok(config) => config,
        Err(e) => {
            problems.push(format!("config load failed, using defaults: {e}"));
            ShellConfig::default()
        }
    };
    (config, Some(path), problems)
}

fn log_directive(args: &cli::Args, config: &ShellConfig) -> String {
    match &args.log_level {
        Some(level) => level.clone(),
        None => format!("tessel={}", config.logging.level.as_directive()),
    }
}

fn main() {
    let args = cli::parse();

    let (config, path, problems) = read_config(args.config.as_deref());

    if args.print_config {
        println!("{}", tessel_config::config_to_json(&config));
        return;
    }

    let directive = log_directive(&args, &config);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .or_else(|_| DEFAULT_DIRECTIVE.parse())
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("tessel v{} starting", env!("CARGO_PKG_VERSION"));
    for problem in problems {
        tracing::warn!("{problem}");
    }
    if let Err(e) = validation::validate(&config) {
        tracing::warn!(error = %e, "config has problems, using it as-is");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(rt) => Some(rt),
        Err(e) => {
            tracing::warn!(error = %e, "no async runtime, config reload disabled");
            None
        }
    };

    let config_rx = match (&runtime, path) {
        (Some(rt), Some(path)) => {
            tracing::info!(path = %path.display(), "watching config");
            let _guard = rt.enter();
            let (_, rx) = ReloadManager::start(path);
            Some(rx)
        }
        _ => None,
    };

    let first_url = args
        .url
        .clone()
        .unwrap_or_else(|| config.layout.default_url.clone());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            return;
        }
    };
    let mut app = app::TesselApp::new(config, config_rx, runtime, first_url);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
    }
    tracing::info!("shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tessel_config::schema::LogLevel;

    #[test]
    fn cli_log_level_wins() {
        let args = cli::Args::try_parse_from(["tessel", "--log-level", "debug"]).unwrap();
        assert_eq!(log_directive(&args, &ShellConfig::default()), "debug");
    }

    #[test]
    fn config_log_level_scoped_to_tessel() {
        let args = cli::Args::try_parse_from(["tessel"]).unwrap();
        let mut config = ShellConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(&args, &config), "tessel=warn");
    }

    #[test]
    fn first_run_creates_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (config, watched, problems) = read_config(Some(&path));
        assert!(problems.is_empty(), "{problems:?}");
        assert_eq!(watched, Some(path.clone()));
        assert!(path.exists());
        assert_eq!(config.layout.default_url, ShellConfig::default().layout.default_url);
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout\ngap = ").unwrap();

        let (config, watched, problems) = read_config(Some(&path));
        assert_eq!(problems.len(), 1);
        assert_eq!(watched, Some(path));
        assert_eq!(config.layout.gap, ShellConfig::default().layout.gap);
    }
}
