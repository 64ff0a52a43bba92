/// The configuration parameters for the application.
///
/// Pulled from environment variables, which is how the hosting runtime
/// populates the container.
///
/// See `.env.sample` in the repository root for details.
#[derive(Debug, Clone)]
pub struct Config {
    /// The project that owns the target data store.
    pub project_id: Option<String>,

    /// The data store location, e.g. "global" or "us".
    pub location: Option<String>,

    /// The data store receiving the imports.
    pub data_store_id: Option<String>,

    /// Port the event listener binds to.
    pub port: u16,

    /// Override for the Discovery Engine endpoint.
    /// Derived from the location when unset.
    pub discovery_engine_url: Option<String>,

    /// Static access token for local runs.
    /// Ambient Google credentials are used when unset.
    pub access_token: Option<String>,
}

impl Config {
    /// Reads the process environment once, at startup.
    ///
    /// PROJECT_ID, LOCATION and DATA_STORE_ID are not fatal when absent: the
    /// listener still serves, and every invocation no-ops with a logged error
    /// until the deployment is fixed.
    pub fn from_env() -> Self {
        Config {
            project_id: non_empty_var("PROJECT_ID"),
            location: non_empty_var("LOCATION"),
            data_store_id: non_empty_var("DATA_STORE_ID"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            discovery_engine_url: non_empty_var("DISCOVERY_ENGINE_URL"),
            access_token: non_empty_var("ACCESS_TOKEN"),
        }
    }

    /// Endpoint serving the configured location.
    /// Regional data stores are served from a regional host.
    pub fn api_endpoint(&self) -> String {
        if let Some(url) = &self.discovery_engine_url {
            return url.clone();
        }

        match self.location.as_deref() {
            Some(location) if location != "global" => {
                format!("https://{}-discoveryengine.googleapis.com", location)
            }
            _ => "https://discoveryengine.googleapis.com".to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
