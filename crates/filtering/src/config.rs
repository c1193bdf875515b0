//! Filter configuration.
//!
//! Defaults match the storefront: a minimum-rating ladder of 3.0 / 3.5 / 4.0 / 4.5.
//! Overridable from the environment:
//!
//! - `STROYPRICE_RATING_LADDER`: comma-separated thresholds, e.g. `3,4,4.5`

use serde::{Deserialize, Serialize};
use stroyprice_catalog::{RATING_MAX, RATING_MIN};
use stroyprice_core::{DomainError, DomainResult};

pub const RATING_LADDER_ENV: &str = "STROYPRICE_RATING_LADDER";

const DEFAULT_LADDER: [f64; 4] = [3.0, 3.5, 4.0, 4.5];

/// Fixed set of selectable minimum-rating thresholds, ascending and distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingLadder(Vec<f64>);

impl RatingLadder {
    /// Build a ladder, discarding thresholds that are non-finite, outside the
    /// rating scale, or zero (zero already means "no rating filter").
    pub fn new(thresholds: impl IntoIterator<Item = f64>) -> Self {
        let mut steps: Vec<f64> = thresholds
            .into_iter()
            .filter(|t| t.is_finite() && *t > RATING_MIN && *t <= RATING_MAX)
            .collect();
        steps.sort_by(f64::total_cmp);
        steps.dedup();
        Self(steps)
    }

    /// Parse a comma-separated list such as `"3, 3.5, 4"`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let thresholds = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>()
                    .map_err(|e| DomainError::validation(format!("rating threshold {s:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ladder = Self::new(thresholds);
        if ladder.is_empty() {
            return Err(DomainError::validation(format!(
                "no usable rating thresholds in {raw:?}"
            )));
        }
        Ok(ladder)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, threshold: f64) -> bool {
        self.0.contains(&threshold)
    }
}

impl Default for RatingLadder {
    fn default() -> Self {
        Self::new(DEFAULT_LADDER)
    }
}

/// Configuration shared by every browse session over a catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub rating_ladder: RatingLadder,
}

impl FilterConfig {
    /// Load from process environment, falling back to defaults on bad input.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(RATING_LADDER_ENV) {
            match RatingLadder::parse(&raw) {
                Ok(ladder) => config.rating_ladder = ladder,
                Err(error) => {
                    tracing::warn!(
                        key = RATING_LADDER_ENV,
                        %error,
                        "invalid rating ladder; using default"
                    );
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_ladder_is_storefront_ladder() {
        assert_eq!(RatingLadder::default().thresholds(), &[3.0, 3.5, 4.0, 4.5]);
    }

    #[test]
    fn ladder_is_sorted_deduped_and_bounded() {
        let ladder = RatingLadder::new([4.5, 3.0, 4.5, 0.0, -1.0, 6.0, f64::NAN, 5.0]);
        assert_eq!(ladder.thresholds(), &[3.0, 4.5, 5.0]);
    }

    #[test]
    fn parses_comma_separated_thresholds() {
        let ladder = RatingLadder::parse(" 4, 3.5 ,,2 ").unwrap();
        assert_eq!(ladder.thresholds(), &[2.0, 3.5, 4.0]);
    }

    #[test]
    fn parse_rejects_garbage_and_empty() {
        match RatingLadder::parse("3,four").unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("\"four\"")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(matches!(RatingLadder::parse("9,10"), Err(DomainError::Validation(_))));
        assert!(matches!(RatingLadder::parse(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn lookup_overrides_ladder() {
        let config = FilterConfig::from_lookup(lookup(&[(RATING_LADDER_ENV, "4,4.5")]));
        assert_eq!(config.rating_ladder.thresholds(), &[4.0, 4.5]);
    }

    #[test]
    fn invalid_lookup_value_falls_back_to_default() {
        let config = FilterConfig::from_lookup(lookup(&[(RATING_LADDER_ENV, "high")]));
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn missing_key_yields_default() {
        assert_eq!(FilterConfig::from_lookup(lookup(&[])), FilterConfig::default());
    }
}
