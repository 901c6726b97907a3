pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::TomlConfig;
pub use crate::core::{engine::GuidanceEngine, pipeline::GuidancePipeline};
pub use domain::model::{FeedingUnit, PetGuidance, PetRecord};
pub use domain::services::{convert_amount, feeding_schedule, food_recommendation};
pub use utils::error::{PawmiError, Result};
