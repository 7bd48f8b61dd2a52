use std::path::PathBuf;

pub const DEFAULT_URL: &str = "https://www.bundesnetzagentur.de/SharedDocs/Downloads/DE/Sachgebiete/Telekommunikation/Unternehmen_Institutionen/Frequenzen/Amateurfunk/Rufzeichenliste/Rufzeichenliste_AFU.pdf?__blob=publicationFile";

// The publisher rejects requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla";

/// Where the roster PDF comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `;`-separated fields, one record per line.
    #[default]
    Delimited,
    /// One JSON object per line.
    JsonLines,
}

/// Settings for a single run. Built once by the binary and handed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub user_agent: String,
    pub format: OutputFormat,
    /// Number of `-v` flags; 0 logs errors only.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Url(DEFAULT_URL.to_string()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: OutputFormat::default(),
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
