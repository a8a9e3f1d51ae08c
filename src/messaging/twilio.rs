use anyhow::Context;
use async_trait::async_trait;

use super::SmsSender;
use crate::connector::CredentialBundle;

/// Twilio Messages API client authenticated with a connector-issued
/// API key pair.
pub struct TwilioSmsProvider {
    account_sid: String,
    api_key: String,
    api_key_secret: String,
    from_number: Option<String>,
    client: reqwest::Client,
}

impl TwilioSmsProvider {
    pub fn new(credentials: CredentialBundle) -> Self {
        Self {
            account_sid: credentials.account_sid,
            api_key: credentials.api_key,
            api_key_secret: credentials.api_key_secret,
            from_number: credentials.phone_number,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_number(&self) -> Option<&str> {
        self.from_number.as_deref()
    }
}

#[async_trait]
impl SmsSender for TwilioSmsProvider {
    async fn send_sms(&self, to: &str, body: &str) -> anyhow::Result<String> {
        let from = self
            .from_number
            .as_deref()
            .context("no phone number connected for this Twilio account")?;

        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.api_key_secret))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await
            .context("failed to send Twilio SMS")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Twilio response")?;

        if !status.is_success() {
            let message = data["message"].as_str().unwrap_or("unknown error");
            anyhow::bail!("Twilio API error ({status}): {message}");
        }

        data["sid"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing sid in Twilio response"))
    }
}
