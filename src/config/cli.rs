use super::toml_config::TomlConfig;
use super::{Overrides, Settings};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "people-etl")]
#[command(about = "Validate, store, summarize and export people CSV files")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory holding the stored record set
    #[arg(long, global = true)]
    pub store_path: Option<String>,

    /// Directory exports are written to
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    /// Reference date (YYYY-MM-DD) used to infer birth years
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a CSV file and replace the stored records with it
    Import {
        file: String,

        /// Declared media type of the file
        #[arg(long, default_value = "text/csv")]
        content_type: String,
    },
    /// Show stored records sorted by name with per-sex statistics
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Write stored records back out as CSV
    Export {
        /// File name under the output path; "-" prints to stdout
        #[arg(long)]
        output: Option<String>,
    },
}

impl CliConfig {
    /// Loads the TOML file, if any, and merges it under the command line flags.
    pub fn settings(&self) -> Result<Settings> {
        let file = self
            .config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()?;

        if let Some(file) = &file {
            crate::utils::validation::Validate::validate(file)?;
        }

        let overrides = Overrides {
            store_path: self.store_path.clone(),
            output_path: self.output_path.clone(),
            today: self.today.clone(),
            json_logs: self.json_logs,
        };

        Settings::resolve(overrides, file.as_ref())
    }
}
