//! Wizard behaviour configuration

use serde::Deserialize;

use crate::domain::affectation::DiagnosisStrategy;

use super::error::ValidationError;

const MIN_SESSION_TTL_SECS: u64 = 1;
const MAX_SESSION_TTL_SECS: u64 = 86_400;

/// Wizard session lifetime and pipeline options
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Idle time after which an in-progress session is dropped
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// How multiple diagnoses reach the single-slot model
    #[serde(default)]
    pub diagnosis_strategy: DiagnosisStrategy,
}

impl WizardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ValidationError::InvalidSessionTtl {
                min: MIN_SESSION_TTL_SECS,
                max: MAX_SESSION_TTL_SECS,
                actual: self.session_ttl_secs,
            });
        }
        Ok(())
    }

    /// TTL as signed seconds for timestamp arithmetic
    pub fn session_ttl(&self) -> i64 {
        self.session_ttl_secs as i64
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            diagnosis_strategy: DiagnosisStrategy::default(),
        }
    }
}

fn default_session_ttl() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_bounds_are_enforced() {
        let mut config = WizardConfig::default();
        assert!(config.validate().is_ok());

        config.session_ttl_secs = 0;
        assert!(config.validate().is_err());

        config.session_ttl_secs = 86_401;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSessionTtl {
                min: 1,
                max: 86_400,
                actual: 86_401
            })
        );
    }
}
