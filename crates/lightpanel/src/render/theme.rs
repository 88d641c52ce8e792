//! Panel colors.

pub const BACKGROUND: &str = "#222222";

/// Powered edges and lit indicators.
pub const CONNECTION: &str = "#7DF9FF";

/// Unlit indicators.
pub const NO_CONNECTION: &str = "#FFFFFF";
