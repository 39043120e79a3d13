//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use copyserv_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Structured logger for this run.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, command: &str) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve_against(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("copyserv-cli")
            .with_command(command)
            .with_min_level(if output.is_verbose() {
                LogLevel::Debug
            } else {
                LogLevel::Warn
            })
            .with_format(if output.is_json() {
                LogFormat::Json
            } else {
                LogFormat::Human
            });

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.cwd, path)
    }
}

fn resolve_against(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find the nearest config file, walking up from `start`.
///
/// A file that exists but fails to parse is an error rather than skipped.
pub fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}
