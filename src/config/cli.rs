use crate::core::{ConfigProvider, Context};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "accessory-etl")]
#[command(about = "Flattens HomeKit /accessories documents into a device catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "accessories.json")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "51826")]
    pub port: u16,

    #[arg(long, required_unless_present = "config")]
    pub bridge_id: Option<String>,

    #[arg(long)]
    pub instance_id: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Sort records by name and category")]
    pub sort: bool,

    #[arg(long, help = "Also write a ZIP bundle with a manifest")]
    pub bundle: bool,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn sort_records(&self) -> bool {
        self.sort
    }

    fn bundle(&self) -> bool {
        self.bundle
    }

    fn base_context(&self) -> Context {
        Context::new(
            self.host.clone(),
            self.port,
            self.bridge_id.clone().unwrap_or_default(),
            self.instance_id.clone().unwrap_or_default(),
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_range("port", self.port, 1, u16::MAX)?;
        let bridge_id = validation::validate_required_field("bridge_id", &self.bridge_id)?;
        validation::validate_non_empty_string("bridge_id", bridge_id)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;
        Ok(())
    }
}
