use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, ViewerConfig, DEFAULT_ENDPOINT};
use crate::domain::model::{FilterCriteria, ALL_DOMAINS};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "comments-viewer")]
#[command(about = "Search, filter and browse a public comments feed grouped by email domain")]
pub struct CliConfig {
    /// Comments endpoint returning a JSON array [default: jsonplaceholder comments]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search text, or an all-digit comment id
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only show comments from this email domain ("all" for every domain)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Toggle a domain group open; repeat the flag for several domains
    #[arg(long = "expand-domain", value_name = "DOMAIN")]
    pub expand_domains: Vec<String>,

    /// Toggle a comment body open; repeat the flag for several comments
    #[arg(long = "expand-comment", value_name = "ID")]
    pub expand_comments: Vec<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the available domain options and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Read commands from stdin after the first render
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with the command line. Flags given on the
    /// command line win over file values, which win over built-in defaults.
    pub fn resolve(&self) -> Result<ViewerConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let endpoint = self
            .endpoint
            .clone()
            .or(file.source.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let query = self.query.clone().or(file.view.query).unwrap_or_default();
        let domain = self
            .domain
            .clone()
            .or(file.view.domain)
            .unwrap_or_else(|| ALL_DOMAINS.to_string());

        Ok(ViewerConfig {
            endpoint,
            headers: file.source.headers,
            criteria: FilterCriteria::new(query, domain.to_lowercase()),
            format: self.format.or(file.view.format).unwrap_or_default(),
        })
    }
}
