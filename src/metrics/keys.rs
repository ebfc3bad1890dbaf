//! Keys of the built-in metrics.

pub const NCLOC: &str = "ncloc";
pub const NCLOC_DATA: &str = "ncloc_data";
pub const ALERT_STATUS: &str = "alert_status";

// Maintainability
pub const TECHNICAL_DEBT: &str = "sqale_index";
pub const DEVELOPMENT_COST: &str = "development_cost";
pub const SQALE_DEBT_RATIO: &str = "sqale_debt_ratio";
pub const MAINTAINABILITY_RATING: &str = "sqale_rating";
pub const EFFORT_TO_REACH_MAINTAINABILITY_RATING_A: &str =
    "effort_to_reach_maintainability_rating_a";

pub const NEW_TECHNICAL_DEBT: &str = "new_technical_debt";
pub const NEW_DEVELOPMENT_COST: &str = "new_development_cost";
pub const NEW_SQALE_DEBT_RATIO: &str = "new_sqale_debt_ratio";
pub const NEW_MAINTAINABILITY_RATING: &str = "new_maintainability_rating";

// Reliability and security
pub const RELIABILITY_RATING: &str = "reliability_rating";
pub const SECURITY_RATING: &str = "security_rating";
pub const NEW_RELIABILITY_RATING: &str = "new_reliability_rating";
pub const NEW_SECURITY_RATING: &str = "new_security_rating";

pub const SOFTWARE_QUALITY_RELIABILITY_RATING: &str = "software_quality_reliability_rating";
pub const SOFTWARE_QUALITY_SECURITY_RATING: &str = "software_quality_security_rating";
pub const NEW_SOFTWARE_QUALITY_RELIABILITY_RATING: &str =
    "new_software_quality_reliability_rating";
pub const NEW_SOFTWARE_QUALITY_SECURITY_RATING: &str = "new_software_quality_security_rating";

// Security review
pub const SECURITY_REVIEW_RATING: &str = "security_review_rating";
pub const SECURITY_HOTSPOTS_REVIEWED: &str = "security_hotspots_reviewed";
pub const SECURITY_HOTSPOTS_REVIEWED_STATUS: &str = "security_hotspots_reviewed_status";
pub const SECURITY_HOTSPOTS_TO_REVIEW_STATUS: &str = "security_hotspots_to_review_status";

pub const NEW_SECURITY_REVIEW_RATING: &str = "new_security_review_rating";
pub const NEW_SECURITY_HOTSPOTS_REVIEWED: &str = "new_security_hotspots_reviewed";
pub const NEW_SECURITY_HOTSPOTS_REVIEWED_STATUS: &str = "new_security_hotspots_reviewed_status";
pub const NEW_SECURITY_HOTSPOTS_TO_REVIEW_STATUS: &str =
    "new_security_hotspots_to_review_status";
