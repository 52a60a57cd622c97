//! Configuration for snag.
//!
//! A [`Config`] is assembled once per invocation from an optional YAML file
//! merged with CLI flags (flags win), then passed explicitly into the
//! substitutor and the enumerator. Nothing reads configuration from ambient
//! global state, which keeps those components testable in isolation.
//!
//! Unknown fields in the YAML are silently ignored for forward compatibility.

use crate::cli::Cli;
use crate::error::{Result, SnagError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Process-wide configuration, read-only once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root folder to enumerate.
    pub root: PathBuf,

    /// Target address substituted for `[IP]` tokens.
    pub ip: String,

    /// Target port substituted for `[PORT]` tokens. Conventionally 1-65535;
    /// the type enforces the upper bound, nothing else is validated.
    pub port: u16,

    /// Whether `[PROTO]` resolves to `https` instead of `http`.
    pub tls: bool,

    /// Glob patterns excluded from enumeration, matched against the
    /// root-relative path.
    pub exclude: Vec<String>,

    /// Optional template file overriding the built-in oneliners template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ip: String::new(),
            port: 8080,
            tls: false,
            exclude: Vec::new(),
            template: None,
        }
    }
}

impl Config {
    /// Assemble the effective config from an optional config file and CLI
    /// flags. Flags override file values; `--exclude` patterns are appended
    /// to file patterns rather than replacing them.
    pub fn assemble(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(root) = &cli.root {
            config.root = root.clone();
        }
        if let Some(ip) = &cli.ip {
            config.ip = ip.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if cli.tls {
            config.tls = true;
        }
        if let Some(template) = &cli.template {
            config.template = Some(template.clone());
        }
        config.exclude.extend(cli.exclude.iter().cloned());

        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SnagError::User(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| SnagError::User(format!("failed to parse config YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// The target address is required: without it the `[IP]` token cannot be
    /// substituted and every generated oneliner would be unusable.
    pub fn validate(&self) -> Result<()> {
        if self.ip.is_empty() {
            return Err(SnagError::User(
                "no target address: pass --ip or set `ip` in the config file".to_string(),
            ));
        }
        Ok(())
    }

    /// The scheme substituted for `[PROTO]` tokens.
    pub fn proto(&self) -> &'static str {
        if self.tls { "https" } else { "http" }
    }

    /// Compile the exclusion patterns into a matcher.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|e| {
                SnagError::User(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| SnagError::User(format!("failed to build exclude set: {}", e)))
    }
}
