//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: compute measures for a project snapshot
//! - **metrics**: list the metric catalog
//! - **validate-config**: check the rating settings
//! - **init**: write a default configuration file

pub mod analyze;
pub mod init;
pub mod metrics;
pub mod validate_config;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use metrics::list_metrics;
pub use validate_config::validate_config;
