use serde::Deserialize;

use crate::config::ConnectorConfig;
use crate::errors::Error;

/// Validated Twilio credential material served by the connector.
/// Built once per fetch and discarded after use; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialBundle {
    pub account_sid: String,
    pub api_key: String,
    pub api_key_secret: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConnectorResponse {
    #[serde(default)]
    pub items: Vec<ConnectorItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConnectorItem {
    #[serde(default)]
    pub settings: ConnectorSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConnectorSettings {
    pub account_sid: Option<String>,
    pub api_key: Option<String>,
    pub api_key_secret: Option<String>,
    pub phone_number: Option<String>,
}

/// Client for the Replit connector registry that stores the Twilio
/// account's credentials.
pub struct ConnectorClient {
    config: ConnectorConfig,
    client: reqwest::Client,
}

impl ConnectorClient {
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the Twilio connection settings and validate them into a
    /// [`CredentialBundle`]. Transport failures propagate to the
    /// caller; there is no retry.
    pub async fn fetch_credentials(&self) -> Result<CredentialBundle, Error> {
        let hostname = self.config.connector_hostname()?;
        let token = self.config.replit_token()?;

        tracing::debug!(hostname, "fetching Twilio connection settings");

        let url = format!(
            "https://{hostname}/api/v2/connection?include_secrets=true&connector_names=twilio"
        );
        let response: ConnectorResponse = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X_REPLIT_TOKEN", token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let bundle = CredentialBundle::from_response(response)?;
        tracing::debug!(
            account_sid = %bundle.account_sid,
            has_phone_number = bundle.phone_number.is_some(),
            "Twilio credentials validated"
        );
        Ok(bundle)
    }
}

impl CredentialBundle {
    /// Takes the first connector item and checks that every required
    /// field is present and non-empty.
    pub fn from_response(response: ConnectorResponse) -> Result<Self, Error> {
        let item = response.items.into_iter().next().ok_or_else(|| {
            Error::NotConnected("connector returned no Twilio connection".to_string())
        })?;
        let settings = item.settings;

        Ok(Self {
            account_sid: require(settings.account_sid, "account_sid")?,
            api_key: require(settings.api_key, "api_key")?,
            api_key_secret: require(settings.api_key_secret, "api_key_secret")?,
            phone_number: settings.phone_number.filter(|p| !p.is_empty()),
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, Error> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::NotConnected(format!("missing {field} in connector settings")))
}
