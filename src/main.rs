use std::io;
use std::path::PathBuf;

use anyhow::Context;
use bnetza_rufzeichen::config::{DEFAULT_URL, DEFAULT_USER_AGENT};
use bnetza_rufzeichen::{Config, OutputFormat, Source, logging};
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "rufzeichen")]
#[command(version)]
#[command(about = "Extract call signs from the Bundesnetzagentur roster PDF", long_about = None)]
struct Cli {
    /// Roster download URL
    #[arg(long, env = "RUFZEICHEN_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Read a local PDF instead of downloading (takes precedence over --url)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// User-Agent header sent with the download
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Output format
    #[arg(long, value_enum, default_value = "delimited")]
    format: Format,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Delimited,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Delimited => OutputFormat::Delimited,
            Format::Json => OutputFormat::JsonLines,
        }
    }
}

impl Cli {
    fn into_config(self) -> Config {
        let source = match self.input {
            Some(path) => Source::File(path),
            None => Source::Url(self.url),
        };
        Config::default()
            .with_source(source)
            .with_user_agent(self.user_agent)
            .with_format(self.format.into())
            .with_verbosity(self.verbose)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    logging::init(&config).context("failed to install logger")?;

    // A provider may already be installed by a dependency.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let out = io::BufWriter::new(io::stdout().lock());
    bnetza_rufzeichen::run(&config, out)
        .await
        .context("roster extraction failed")?;

    Ok(())
}
