//! Loads, watches and reloads the config file.

use crate::schema::ShellConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::{Path, PathBuf};
use tessel_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Publishes each successfully reloaded config on a
/// [`tokio::sync::watch`] channel. A reload that fails to parse or validate
/// is logged and the previous config stays current.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Must be called inside a tokio runtime. A missing or unreadable file
    /// yields defaults.
    pub fn start(config_path: PathBuf) -> (ShellConfig, watch::Receiver<ShellConfig>) {
        let initial = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                ShellConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial.clone());

        tokio::spawn(async move {
            let manager = ReloadManager::new(config_path);
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    pub(crate) fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<ShellConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!(error = %e, "failed to create config watcher");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!(error = %e, "config watcher stopped");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => match self.reload_config() {
                    Ok(config) => {
                        info!(path = %self.config_path.display(), "config reloaded");
                        if config_tx.send(config).is_err() {
                            info!("all config receivers dropped, stopping reload manager");
                            break;
                        }
                    }
                    Err(e) => warn!(error = %e, "config reload rejected"),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(skipped = n, "config watcher lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Reload config from disk. Unlike startup, invalid values reject the
    /// reload instead of being applied.
    pub(crate) fn reload_config(&self) -> Result<ShellConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
