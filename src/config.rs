use std::time::Duration;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "local")]
    pub environment: String,

    #[clap(env, long, default_value_t = 8080)]
    pub port: u16,

    /// Comma separated list of origins allowed through CORS
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long, hide_env_values = true)]
    pub google_api_key: String,

    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api/place")]
    pub google_places_url: String,

    /// Upper bound on concurrent provider lookups within a single request
    #[clap(env, long, default_value_t = num_cpus::get())]
    pub fanout_limit: usize,

    #[clap(env, long, default_value_t = 30)]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn photo_url(&self) -> String {
        format!("{}/photo", self.google_places_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults_with_only_api_key() {
        let config = Config::try_parse_from(["app", "--google-api-key", "secret"]).unwrap();
        assert_eq!(config.google_api_key, "secret");
        assert!(config.fanout_limit >= 1);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.photo_url(),
            "https://maps.googleapis.com/maps/api/place/photo"
        );
    }

    #[test]
    fn photo_url_tolerates_trailing_slash() {
        let config = Config::try_parse_from([
            "app",
            "--google-api-key",
            "secret",
            "--google-places-url",
            "http://localhost:9000/place/",
        ]).unwrap();
        assert_eq!(config.photo_url(), "http://localhost:9000/place/photo");
    }
}
