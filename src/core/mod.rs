//! Core error handling, configuration, and trait seams for the ticket
//! recognition pipeline.

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{EngineConfig, ScanConfig};
pub use errors::{ProcessingStage, ScanError, ScanResult};
pub use traits::{RawFragment, TextRecognizer};
