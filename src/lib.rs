pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod hostinger;
mod http;
pub mod logger;
pub mod models;
pub mod probe;
pub mod storage;

pub use batch::{BatchDriver, TaskOutcome};
pub use config::{GeminiConfig, HostingerConfig};
pub use error::{BrandkitError, Result};
pub use gemini::{ImageClient, ImageGenerator};
pub use hostinger::DnsClient;
pub use models::*;
pub use storage::AssetSaver;
