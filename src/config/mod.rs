//! Configuration: the `.qualityrate.toml` file and the rating settings derived from it.

mod core;
mod loader;
pub mod rating;

pub use self::core::QualityRateConfig;
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, load_config_search,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use rating::{DebtRatingGrid, LanguageCost, RatingConfig, RatingSettings};
