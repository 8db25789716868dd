pub mod cli;

use crate::domain::model::DumpFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const MAX_BYTE_COUNT: usize = 65536;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "byteprobe")]
#[command(about = "Print the leading bytes of a binary file as integers")]
pub struct CliConfig {
    /// File to inspect
    pub input_path: String,

    #[arg(long, default_value = "200", help = "How many bytes to read from the start")]
    pub byte_count: usize,

    #[arg(long, value_enum, default_value = "decimal")]
    pub format: DumpFormat,

    #[arg(long, help = "Emit a JSON report instead of the plain dump")]
    pub json: bool,

    #[arg(long, help = "Also write the output to this file")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system resource monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn byte_count(&self) -> usize {
        self.byte_count
    }

    fn format(&self) -> DumpFormat {
        self.format
    }

    fn json(&self) -> bool {
        self.json
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_range("byte_count", self.byte_count, 1, MAX_BYTE_COUNT)?;

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}
