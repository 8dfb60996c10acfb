use serde::{Deserialize, Serialize};

/// Verdict assigned to a transaction by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Normal,
    LongRunning,
    Failed,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::LongRunning => write!(f, "LONG RUNNING"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Normal, Self::LongRunning, Self::Failed];

    /// Failed and long-running transactions raise an alert, normal ones never do.
    #[must_use]
    pub const fn is_alert_worthy(&self) -> bool {
        matches!(self, Self::Failed | Self::LongRunning)
    }

    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Normal => "✅",
            Self::LongRunning => "🐢",
            Self::Failed => "🔴",
        }
    }
}
