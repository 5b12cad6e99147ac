use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use common::config::Config;
use fetcher::Locator;

/// Decodes a coordinate document into its secret message
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(help = "File path, URL or '-' for stdin; 'sample' and 'test' act like the flags")]
    pub source: Option<String>,

    #[arg(long, help = "Render the built-in offline sample", conflicts_with_all = ["source", "test"])]
    pub sample: bool,

    #[arg(long, help = "Run the built-in self-test", conflicts_with = "source")]
    pub test: bool,

    #[arg(short, long, help = "Path to json config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Document fetched when no source is given")]
    pub url: Option<String>,

    #[arg(long, help = "Fetch timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, default_value = "warn", help = "Log level: error, warn, info, debug, trace")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Fetch the configured document, falling back to the sample
    Default,
    SelfTest,
    Source(Locator),
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.test {
            return Mode::SelfTest;
        }
        if self.sample {
            return Mode::Source(Locator::Sample);
        }

        match self.source.as_deref() {
            None => Mode::Default,
            Some(source) => match source.to_lowercase().as_str() {
                "sample" => Mode::Source(Locator::Sample),
                "test" => Mode::SelfTest,
                _ => Mode::Source(Locator::resolve(source)),
            },
        }
    }

    /// Loads the config file, if any, and applies the command line overrides
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("Could not load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        Ok(config)
    }
}
