use serde::{Deserialize, Serialize};

use crate::domain::errors::EngineError;

/// Response-time boundary above which a non-failed transaction is long-running.
///
/// Always finite and strictly positive; the only way to build one is
/// [`Threshold::new`], so every engine call downstream can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    /// Above 350 ms the synthetic generator labels a transaction Critical.
    pub const DEFAULT: Self = Self(350.0);

    /// Validates a raw threshold value.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if the value is zero,
    /// negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidConfiguration(format!(
                "threshold must be a finite number, got {value}"
            )));
        }
        if value <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "threshold must be greater than 0, got {value}"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Threshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for Threshold {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| {
            EngineError::InvalidConfiguration(format!("threshold '{s}' is not a number"))
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
