use std::time::Duration;

use serde_json::{json, Value};

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, NotificationError, Notifier};
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;

/// Webhook notification format, auto-detected from the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WebhookFormat {
    Slack,
    Discord,
    Generic,
}

/// Sends alert notifications to an HTTP webhook endpoint.
///
/// Supports Slack (colored attachments), Discord (embeds) and generic JSON
/// payloads. The format is auto-detected from the webhook URL.
///
/// Alerts below `min_category` are reported as `Delivery::Skipped`. HTTP
/// failures are returned as `NotificationError::SendFailed` so that the
/// dispatcher can record them.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
    min_category: Category,
    unit: TimeUnit,
}

impl WebhookNotifier {
    /// Creates a new webhook notifier targeting the given URL.
    ///
    /// The HTTP client is configured with a 5-second timeout covering
    /// DNS resolution, connection, and response.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if the HTTP client
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(
        url: String,
        min_category: Category,
        unit: TimeUnit,
    ) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                NotificationError::ChannelUnavailable(format!("cannot build HTTP client: {e}"))
            })?;

        Ok(Self {
            url,
            client,
            min_category,
            unit,
        })
    }

    fn detect_format(&self) -> WebhookFormat {
        // Extract host from URL (scheme://host/path) to avoid substring false positives
        let host = self
            .url
            .split("//")
            .nth(1)
            .and_then(|s| s.split('/').next())
            .and_then(|h| h.split(':').next())
            .unwrap_or("");

        if host == "hooks.slack.com" {
            WebhookFormat::Slack
        } else if host == "discord.com" || host == "discordapp.com" {
            WebhookFormat::Discord
        } else {
            WebhookFormat::Generic
        }
    }

    /// Posts a JSON payload, blocking the current worker thread until the
    /// response arrives. Requires a multi-threaded tokio runtime.
    fn send_payload(&self, payload: &Value) -> Result<(), NotificationError> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| {
            NotificationError::ChannelUnavailable("no async runtime for webhook delivery".into())
        })?;

        let result = tokio::task::block_in_place(|| {
            handle.block_on(self.client.post(&self.url).json(payload).send())
        });

        match result {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(NotificationError::SendFailed(format!(
                "webhook HTTP {}",
                resp.status()
            ))),
            Err(e) => Err(NotificationError::SendFailed(format!("webhook error: {e}"))),
        }
    }

    // --- Color helpers ---

    const fn category_color_hex(category: Category) -> &'static str {
        match category {
            Category::Normal => "#2ECC71",
            Category::LongRunning => "#E67E22",
            Category::Failed => "#FF0000",
        }
    }

    const fn category_color_decimal(category: Category) -> u32 {
        match category {
            Category::Normal => 0x00_2E_CC_71,
            Category::LongRunning => 0x00_E6_7E_22,
            Category::Failed => 0x00_FF_00_00,
        }
    }

    // --- Alert formatting ---

    fn format_alert(&self, alert: &AlertEvent) -> Value {
        match self.detect_format() {
            WebhookFormat::Slack => self.format_alert_slack(alert),
            WebhookFormat::Discord => self.format_alert_discord(alert),
            WebhookFormat::Generic => self.format_alert_generic(alert),
        }
    }

    fn format_alert_slack(&self, alert: &AlertEvent) -> Value {
        json!({
            "attachments": [{
                "color": Self::category_color_hex(alert.category),
                "blocks": [
                    {
                        "type": "header",
                        "text": {
                            "type": "plain_text",
                            "text": format!("{} txpulse \u{2014} {}", alert.category.emoji(), alert.subject())
                        }
                    },
                    {
                        "type": "section",
                        "fields": [
                            { "type": "mrkdwn", "text": format!("*Category:*\n{}", alert.category) },
                            { "type": "mrkdwn", "text": format!("*Region:*\n{}", alert.record.region) }
                        ]
                    },
                    {
                        "type": "section",
                        "text": { "type": "mrkdwn", "text": alert.message(self.unit) }
                    }
                ]
            }]
        })
    }

    fn format_alert_discord(&self, alert: &AlertEvent) -> Value {
        json!({
            "username": "txpulse",
            "embeds": [{
                "title": format!("{} {}", alert.category.emoji(), alert.subject()),
                "description": alert.message(self.unit),
                "color": Self::category_color_decimal(alert.category),
                "fields": [
                    { "name": "Category", "value": alert.category.to_string(), "inline": true },
                    { "name": "Region", "value": &alert.record.region, "inline": true },
                    { "name": "Transaction", "value": &alert.record.transaction_id, "inline": true }
                ],
                "timestamp": alert.raised_at.to_rfc3339()
            }]
        })
    }

    fn format_alert_generic(&self, alert: &AlertEvent) -> Value {
        json!({
            "source": "txpulse",
            "type": "transaction",
            "category": format!("{:?}", alert.category),
            "subject": alert.subject(),
            "message": alert.message(self.unit),
            "transaction_id": &alert.record.transaction_id,
            "region": &alert.record.region,
            "response_time": alert.record.response_time,
            "unit": self.unit.suffix(),
            "timestamp": alert.raised_at.to_rfc3339()
        })
    }

    // --- Region-down formatting ---

    fn format_region_down(&self, down: &RegionDown) -> Value {
        match self.detect_format() {
            WebhookFormat::Slack => json!({
                "attachments": [{
                    "color": Self::category_color_hex(Category::Failed),
                    "blocks": [
                        {
                            "type": "header",
                            "text": { "type": "plain_text", "text": format!("\u{26a0}\u{fe0f} txpulse \u{2014} {}", down.subject()) }
                        },
                        {
                            "type": "section",
                            "text": { "type": "mrkdwn", "text": down.message() }
                        }
                    ]
                }]
            }),
            WebhookFormat::Discord => json!({
                "username": "txpulse",
                "embeds": [{
                    "title": down.subject(),
                    "description": down.message(),
                    "color": Self::category_color_decimal(Category::Failed),
                    "fields": [
                        { "name": "Region", "value": &down.region, "inline": true },
                        { "name": "Transactions", "value": down.total.to_string(), "inline": true }
                    ]
                }]
            }),
            WebhookFormat::Generic => json!({
                "source": "txpulse",
                "type": "region_down",
                "subject": down.subject(),
                "message": down.message(),
                "region": &down.region,
                "total": down.total
            }),
        }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        if alert.category < self.min_category {
            return Ok(Delivery::Skipped);
        }
        let payload = self.format_alert(alert);
        self.send_payload(&payload)?;
        Ok(Delivery::Sent)
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        let payload = self.format_region_down(down);
        self.send_payload(&payload)?;
        Ok(Delivery::Sent)
    }
}
