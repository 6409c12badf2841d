use crate::config::Config;
use crate::models::SafetyStatus;

/// Fallback shown for safe ingredients without a dedicated description.
pub const GENERIC_SAFE: &str = "This ingredient is considered safe based on current analysis.";

/// Fallback shown for harmful ingredients without a dedicated description.
pub const GENERIC_HARMFUL: &str = "This ingredient has been identified as potentially harmful. \
                                   Consult with a dermatologist for more information.";

/// Fallback shown for neutral ingredients, which are always upstream-supplied.
pub const GENERIC_NEUTRAL: &str = "This ingredient has mixed or inconclusive evidence; \
                                   review it before use.";

/// Display text for an ingredient: the configured per-name description when
/// one exists, else a generic string for the status.
pub fn describe(config: &Config, name: &str, status: SafetyStatus) -> String {
    if let Some(text) = config.descriptions.get(&name.to_lowercase()) {
        return text.clone();
    }
    match status {
        SafetyStatus::Safe => GENERIC_SAFE.to_string(),
        SafetyStatus::Harmful => GENERIC_HARMFUL.to_string(),
        SafetyStatus::Neutral => GENERIC_NEUTRAL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        let config = Config::default();
        let text = describe(&config, "parabens", SafetyStatus::Harmful);
        assert!(text.contains("Endocrine disruptors"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let config = Config::default();
        assert_eq!(
            describe(&config, "Parabens", SafetyStatus::Harmful),
            describe(&config, "parabens", SafetyStatus::Harmful)
        );
    }

    #[test]
    fn test_generic_fallbacks() {
        let config = Config::default();
        assert_eq!(describe(&config, "water", SafetyStatus::Safe), GENERIC_SAFE);
        assert_eq!(
            describe(&config, "mystery compound", SafetyStatus::Harmful),
            GENERIC_HARMFUL
        );
        assert_eq!(
            describe(&config, "fragrance", SafetyStatus::Neutral),
            GENERIC_NEUTRAL
        );
    }
}
