pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::ConfigProvider;
    use crate::domain::model::FeedingUnit;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_output_formats, validate_path, validate_range, validate_url, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    pub const DEFAULT_PETS_ENDPOINT: &str =
        "https://mocki.io/v1/42b89a90-f013-4f30-a5db-759b0b33aab7";

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "pawmi-care")]
    #[command(about = "Feeding recommendations and schedules for your pets")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_PETS_ENDPOINT)]
        pub api_endpoint: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_enum, default_value = "kg")]
        pub unit: FeedingUnit,

        #[arg(long, value_delimiter = ',', default_values = ["csv", "json"])]
        pub formats: Vec<String>,

        #[arg(long, help = "Bundle the output files into a single zip archive")]
        pub zip: bool,

        #[arg(long, default_value = "30")]
        pub timeout_seconds: u64,

        #[arg(long, help = "Print the guidance cards to stdout")]
        pub print: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn feeding_unit(&self) -> FeedingUnit {
            self.unit
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn archive_name(&self) -> Option<&str> {
            self.zip.then_some("feeding_guidance.zip")
        }

        fn request_timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("api_endpoint", &self.api_endpoint)?;
            validate_path("output_path", &self.output_path)?;
            validate_output_formats("formats", &self.formats)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            Ok(())
        }
    }

}
