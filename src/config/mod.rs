//! Configuration for the intake service.

/// Configuration for [`IntakeService`](crate::intake::IntakeService)
///
/// These are caller-side validation bounds: the scorer itself accepts any
/// value it is handed, so out-of-window measurements must be rejected here.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Lowest temperature (°C) accepted from a questionnaire
    pub temperature_min: f64,
    /// Highest temperature (°C) accepted from a questionnaire
    pub temperature_max: f64,
    /// Whether a SUS card number is mandatory at registration
    pub require_sus: bool,
    /// Log the component score breakdown for every questionnaire
    pub log_scoring: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            temperature_min: 35.0,
            temperature_max: 42.0,
            require_sus: false,
            log_scoring: true,
        }
    }
}
