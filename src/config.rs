use serde::Deserialize;

/// Connection settings for [`crate::client::CqlClient::connect`].
///
/// Defaults to a single local contact point on the standard CQL port with no
/// keyspace selected; callers that want a keyspace set it explicitly rather
/// than relying on a baked-in name.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Cluster contact points (host names or addresses, without port)
    pub contact_points: Vec<String>,
    /// CQL native transport port, applied to every contact point
    pub port: u16,
    /// Keyspace to USE after connecting, if any
    pub keyspace: Option<String>,
    /// Credentials, when the cluster requires authentication
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            contact_points: vec!["127.0.0.1".to_string()],
            port: 9042,
            keyspace: None,
            username: None,
            password: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(contact_points: Vec<String>) -> Self {
        Self {
            contact_points,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Contact points rendered as `host:port` node addresses.
    #[must_use]
    pub fn node_addresses(&self) -> Vec<String> {
        self.contact_points
            .iter()
            .map(|host| format!("{host}:{}", self.port))
            .collect()
    }
}
