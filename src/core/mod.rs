pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{GuidanceReport, PetGuidance, PetRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
