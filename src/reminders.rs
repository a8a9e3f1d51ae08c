use crate::config::ConnectorConfig;
use crate::connector::ConnectorClient;
use crate::errors::Error;
use crate::messaging::twilio::TwilioSmsProvider;
use crate::messaging::{deliver_reminder, SendResult};

/// Sends QA reminder SMS through the Twilio account registered with
/// the Replit connector service.
///
/// Credentials are fetched fresh for every operation; the connector
/// owns the secrets and nothing is cached here.
pub struct ReminderService {
    connector: ConnectorClient,
}

impl ReminderService {
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            connector: ConnectorClient::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ConnectorConfig::from_env())
    }

    /// Resolve credentials and build a ready-to-send Twilio client.
    pub async fn twilio_client(&self) -> Result<TwilioSmsProvider, Error> {
        let credentials = self.connector.fetch_credentials().await?;
        Ok(TwilioSmsProvider::new(credentials))
    }

    /// The phone number connected for outbound sends, if one is set.
    pub async fn from_number(&self) -> Result<Option<String>, Error> {
        let credentials = self.connector.fetch_credentials().await?;
        Ok(credentials.phone_number)
    }

    /// Resolve credentials and send one reminder. Every failure, from
    /// credential resolution through the Twilio API call, is reported
    /// in the returned [`SendResult`]; this never returns an error.
    pub async fn send_reminder(
        &self,
        to: &str,
        title: &str,
        description: Option<&str>,
    ) -> SendResult {
        let sender = match self.twilio_client().await {
            Ok(sender) => sender,
            Err(e) => {
                tracing::error!(error = %e, "could not build Twilio client for reminder");
                return SendResult::Failure {
                    error: e.to_string(),
                };
            }
        };

        deliver_reminder(&sender, to, title, description).await
    }
}
