//! Application configuration. Service credentials from the environment.

use serde::Deserialize;

/// Credentials and identifiers for both collaborators. Opaque to the core;
/// the adapters are the only consumers.
///
/// Environment keys are the field names upper-cased: ESA_ACCESS_TOKEN,
/// ESA_CURRENT_TEAM, ESA_SCREEN_NAME, HATENA_USERNAME, HATENA_BLOG_DOMAIN,
/// HATENA_API_KEY.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// esa personal access token (read scope). Read from ESA_ACCESS_TOKEN.
    #[serde(default)]
    pub esa_access_token: Option<String>,

    /// esa team name, the subdomain of `<team>.esa.io`. Read from ESA_CURRENT_TEAM.
    #[serde(default)]
    pub esa_current_team: Option<String>,

    /// Screen name whose daily reports are collected. Read from ESA_SCREEN_NAME.
    #[serde(default)]
    pub esa_screen_name: Option<String>,

    /// Hatena ID owning the blog. Read from HATENA_USERNAME.
    #[serde(default)]
    pub hatena_username: Option<String>,

    /// Blog domain, e.g. `example.hatenablog.com`. Read from HATENA_BLOG_DOMAIN.
    #[serde(default)]
    pub hatena_blog_domain: Option<String>,

    /// AtomPub API key from the blog's settings page. Read from HATENA_API_KEY.
    #[serde(default)]
    pub hatena_api_key: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::default());
        if let Ok(path) = std::env::var("REMARKS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }
}
