pub mod twilio;

use async_trait::async_trait;
use serde::Serialize;

/// Outbound SMS seam. Implementations own transport and auth; callers
/// hand over a destination and a finished body.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Submit one message and return the provider's message sid.
    async fn send_sms(&self, to: &str, body: &str) -> anyhow::Result<String>;
}

/// Outcome of a reminder send. Failures are reported as a value so the
/// calling flow never has to unwind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendResult {
    Success { message_sid: String },
    Failure { error: String },
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SendResult::Success { .. })
    }
}

/// Reminder text: title line, then the description as its own
/// paragraph when present.
pub fn reminder_body(title: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("QA Reminder: {title}\n\n{description}"),
        None => format!("QA Reminder: {title}"),
    }
}

/// Send one reminder through the given sender, mapping any failure
/// into [`SendResult::Failure`].
pub async fn deliver_reminder(
    sender: &dyn SmsSender,
    to: &str,
    title: &str,
    description: Option<&str>,
) -> SendResult {
    let body = reminder_body(title, description);
    tracing::info!(to, "sending QA reminder SMS");

    match sender.send_sms(to, &body).await {
        Ok(message_sid) => {
            tracing::info!(%message_sid, "reminder SMS sent");
            SendResult::Success { message_sid }
        }
        Err(e) => {
            tracing::error!(error = %e, to, "failed to send reminder SMS");
            SendResult::Failure {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_without_description_is_just_the_title_line() {
        assert_eq!(
            reminder_body("Check login flow", None),
            "QA Reminder: Check login flow"
        );
    }

    #[test]
    fn description_becomes_a_second_paragraph() {
        assert_eq!(
            reminder_body("Check login flow", Some("Verify 2FA path")),
            "QA Reminder: Check login flow\n\nVerify 2FA path"
        );
    }
}
