use std::io::Write;
use std::path::PathBuf;

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, NotificationError, Notifier};
use crate::domain::value_objects::time_unit::TimeUnit;

const DEFAULT_LOG_PATH: &str = "~/.local/share/txpulse/alerts.log";

/// Appends one JSON object per notification to a log file
pub struct LogFileNotifier {
    path: PathBuf,
    unit: TimeUnit,
}

impl LogFileNotifier {
    #[must_use]
    pub fn new(path: &str, unit: TimeUnit) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
            unit,
        }
    }

    fn append_json_line(&self, value: &serde_json::Value) -> Result<(), NotificationError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NotificationError::SendFailed(format!("cannot create log directory: {e}"))
            })?;
        }

        let json = serde_json::to_string(value)
            .map_err(|e| NotificationError::SendFailed(format!("JSON serialization error: {e}")))?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NotificationError::SendFailed(format!("cannot open log file: {e}")))?;

        writeln!(file, "{json}")
            .map_err(|e| NotificationError::SendFailed(format!("cannot write log file: {e}")))
    }
}

impl Default for LogFileNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH, TimeUnit::default())
    }
}

impl Notifier for LogFileNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        let entry = serde_json::json!({
            "timestamp": alert.raised_at.to_rfc3339(),
            "kind": "transaction",
            "category": format!("{:?}", alert.category),
            "transaction_id": alert.record.transaction_id,
            "region": alert.record.region,
            "response_time": alert.record.response_time,
            "unit": self.unit.suffix(),
            "status": alert.record.status.to_string(),
            "subject": alert.subject(),
            "message": alert.message(self.unit),
        });

        self.append_json_line(&entry)?;
        Ok(Delivery::Sent)
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        let entry = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "kind": "region_down",
            "region": down.region,
            "total": down.total,
            "subject": down.subject(),
            "message": down.message(),
        });

        self.append_json_line(&entry)?;
        Ok(Delivery::Sent)
    }
}
