use anyhow::{Result, anyhow};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub auth: Auth,
    #[serde(default)]
    pub navigation: Navigation,
    pub notification: Notification,
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    pub backend: String, // "fake" or "http"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Auth {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Navigation {
    #[serde(default = "default_destination")]
    pub destination: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            destination: default_destination(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Notification {
    pub auto_dismiss_ms: u64, // 0 keeps notifications until dismissed
}

impl Notification {
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.auto_dismiss_ms > 0).then(|| Duration::from_millis(self.auto_dismiss_ms))
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

fn default_login_path() -> String {
    "/api/auth/login".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_destination() -> String {
    "/dashboard".to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

const ENV_PREFIX: &str = "SIGNIN";

/// `SIGNIN_AUTH__BACKEND=http` overrides `auth.backend`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    load_settings(path.unwrap_or(SETTINGS_PATH), environment())
}

fn load_settings(path: &str, environment: Environment) -> Result<Settings> {
    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .add_source(environment)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_full_file() {
        let file = write_settings(
            r#"
            [auth]
            backend = "http"
            base_url = "http://localhost:8080"
            login_path = "/v1/login"
            timeout_ms = 2500

            [navigation]
            destination = "/home"

            [notification]
            auto_dismiss_ms = 0

            [log]
            filter = "debug"
            "#,
        );

        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.auth.backend, "http");
        assert_eq!(settings.auth.login_path, "/v1/login");
        assert_eq!(settings.auth.timeout(), Duration::from_millis(2500));
        assert_eq!(settings.navigation.destination, "/home");
        assert_eq!(settings.notification.auto_dismiss(), None);
        assert_eq!(settings.log.filter, "debug");
    }

    #[test]
    fn fills_defaults() {
        let file = write_settings(
            r#"
            [auth]
            backend = "fake"

            [notification]
            auto_dismiss_ms = 5000

            [log]
            filter = "info"
            "#,
        );

        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.auth.login_path, "/api/auth/login");
        assert_eq!(settings.auth.timeout(), Duration::from_secs(10));
        assert_eq!(settings.navigation.destination, "/dashboard");
        assert_eq!(
            settings.notification.auto_dismiss(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_settings(
            r#"
            [auth]
            backend = "fake"

            [notification]
            auto_dismiss_ms = 5000

            [log]
            filter = "info"
            "#,
        );
        let vars = config::Map::from([
            ("SIGNIN_AUTH__BACKEND".to_string(), "http".to_string()),
            (
                "SIGNIN_NOTIFICATION__AUTO_DISMISS_MS".to_string(),
                "250".to_string(),
            ),
            ("OTHER_AUTH__BACKEND".to_string(), "ldap".to_string()),
        ]);

        let settings =
            load_settings(file.path().to_str().unwrap(), environment().source(Some(vars)))
                .unwrap();
        assert_eq!(settings.auth.backend, "http");
        assert_eq!(
            settings.notification.auto_dismiss(),
            Some(Duration::from_millis(250))
        );
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn double_underscore_prefix_is_not_an_override() {
        let file = write_settings(
            r#"
            [auth]
            backend = "fake"

            [notification]
            auto_dismiss_ms = 5000

            [log]
            filter = "info"
            "#,
        );
        let vars = config::Map::from([(
            "SIGNIN__AUTH__BACKEND".to_string(),
            "http".to_string(),
        )]);

        let settings =
            load_settings(file.path().to_str().unwrap(), environment().source(Some(vars)))
                .unwrap();
        assert_eq!(settings.auth.backend, "fake");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("does/not/exist.toml")).is_err());
    }
}
