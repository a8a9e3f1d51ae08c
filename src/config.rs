use std::env;

use crate::errors::Error;

/// Environment identifiers for the Replit connector service. Empty
/// variables are treated as unset.
#[derive(Clone, Debug, Default)]
pub struct ConnectorConfig {
    pub hostname: Option<String>,
    pub repl_identity: Option<String>,
    pub web_repl_renewal: Option<String>,
}

impl ConnectorConfig {
    pub fn from_env() -> Self {
        Self {
            hostname: non_empty(env::var("REPLIT_CONNECTORS_HOSTNAME")),
            repl_identity: non_empty(env::var("REPL_IDENTITY")),
            web_repl_renewal: non_empty(env::var("WEB_REPL_RENEWAL")),
        }
    }

    /// Value for the `X_REPLIT_TOKEN` header. The repl identity token
    /// wins over the deployment renewal token when both are set.
    pub fn replit_token(&self) -> Result<String, Error> {
        if let Some(identity) = &self.repl_identity {
            Ok(format!("repl {identity}"))
        } else if let Some(renewal) = &self.web_repl_renewal {
            Ok(format!("depl {renewal}"))
        } else {
            Err(Error::Config(
                "neither REPL_IDENTITY nor WEB_REPL_RENEWAL is set".to_string(),
            ))
        }
    }

    pub fn connector_hostname(&self) -> Result<&str, Error> {
        self.hostname
            .as_deref()
            .ok_or_else(|| Error::Config("REPLIT_CONNECTORS_HOSTNAME is not set".to_string()))
    }
}

fn non_empty(var: Result<String, env::VarError>) -> Option<String> {
    var.ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repl_identity_token_wins() {
        let config = ConnectorConfig {
            hostname: Some("connectors.example.com".to_string()),
            repl_identity: Some("id-token".to_string()),
            web_repl_renewal: Some("renewal-token".to_string()),
        };
        assert_eq!(config.replit_token().unwrap(), "repl id-token");
    }

    #[test]
    fn renewal_token_used_without_identity() {
        let config = ConnectorConfig {
            hostname: Some("connectors.example.com".to_string()),
            repl_identity: None,
            web_repl_renewal: Some("renewal-token".to_string()),
        };
        assert_eq!(config.replit_token().unwrap(), "depl renewal-token");
    }

    #[test]
    fn no_token_is_a_configuration_error() {
        let config = ConnectorConfig::default();
        assert!(matches!(config.replit_token(), Err(Error::Config(_))));
    }

    #[test]
    fn missing_hostname_is_a_configuration_error() {
        let config = ConnectorConfig {
            hostname: None,
            repl_identity: Some("id-token".to_string()),
            web_repl_renewal: None,
        };
        assert!(matches!(config.connector_hostname(), Err(Error::Config(_))));
    }
}
