//! Configuration management for the documentation linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Rule configuration from TOML (explicit path, project file, user config dir)

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::parser::TagKeywords;
use crate::validation::{DiagnosticCode, Severity};

/// Project-level rule configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".doclint.toml";

/// Command-line arguments for the documentation linter
#[derive(Debug, Parser)]
#[command(name = "doclint")]
#[command(about = "Check that doc comments describe their declaration's parameters and return value")]
#[command(version)]
pub struct Args {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    pub files: Vec<String>,

    /// Rule configuration file
    #[arg(long, help = "Path to a TOML rule configuration file")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for the linter
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Exit with a failure status when any finding is reported
    #[arg(long)]
    pub deny_warnings: bool,
}

/// How findings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Rule settings loaded from TOML
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Severity attached to every finding
    pub severity: Severity,
    /// Diagnostic codes that are never reported
    pub disabled: Vec<DiagnosticCode>,
    /// Tag keywords recognized in comments
    pub keywords: TagKeywords,
}

impl RuleConfig {
    /// Parse rule configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RuleConfig =
            toml::from_str(content).context("Failed to parse rule configuration TOML")?;
        config.check_keywords()?;
        Ok(config)
    }

    /// Load rule configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule configuration: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid rule configuration: {}", path.display()))
    }

    /// Find and load rule configuration.
    ///
    /// Priority: explicit path > project file in `project_dir` > user config dir > defaults.
    pub fn discover(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let project_file = project_dir.join(PROJECT_CONFIG_FILE);
        if project_file.is_file() {
            log::debug!("Using project rule configuration: {:?}", project_file);
            return Self::load(&project_file);
        }

        if let Some(user_file) = user_config_file() {
            if user_file.is_file() {
                log::debug!("Using user rule configuration: {:?}", user_file);
                return Self::load(&user_file);
            }
        }

        Ok(Self::default())
    }

    pub fn is_enabled(&self, code: DiagnosticCode) -> bool {
        !self.disabled.contains(&code)
    }

    fn check_keywords(&self) -> Result<()> {
        let keywords = [
            ("parameter", &self.keywords.parameter),
            ("parameters", &self.keywords.parameters),
            ("returns", &self.keywords.returns),
        ];
        for (field, keyword) in keywords {
            if keyword.is_empty() || keyword.contains(|c: char| c.is_whitespace() || c == ':') {
                bail!("keyword '{}' must be a single word, got {:?}", field, keyword);
            }
        }
        if self.keywords.parameter.eq_ignore_ascii_case(&self.keywords.parameters) {
            bail!("singular and plural parameter keywords must differ");
        }
        Ok(())
    }
}

/// User-global rule configuration: <config dir>/doclint/config.toml
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("doclint").join("config.toml"))
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input patterns; empty means stdin
    pub files: Vec<String>,
    pub format: OutputFormat,
    pub log_level: String,
    pub deny_warnings: bool,
    pub rule: RuleConfig,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        let rule = RuleConfig::discover(args.config.as_deref(), &cwd)?;

        Ok(Config {
            files: args.files,
            format: args.format,
            log_level: args.log_level,
            deny_warnings: args.deny_warnings,
            rule,
        })
    }
}
