pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "record-cleaner")]
#[command(about = "Cleans a CSV of user registration records")]
pub struct CliConfig {
    #[arg(long, help = "Input CSV file with a header row")]
    pub input: String,

    #[arg(long, default_value = "./invalid_data.csv")]
    pub invalid_output: String,

    #[arg(long, default_value = "./cleaned_data.csv")]
    pub clean_output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn invalid_output_path(&self) -> &str {
        &self.invalid_output
    }

    fn clean_output_path(&self) -> &str {
        &self.clean_output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_path("input", &self.input)?;
        validate_path("invalid-output", &self.invalid_output)?;
        validate_path("clean-output", &self.clean_output)?;
        Ok(())
    }
}
