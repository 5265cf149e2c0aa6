//! Publisher and user settings, their JSON files and import/export.

use crate::ConfigError;
use crate::policy::InclusionPolicy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_SERVER: &str = "localhost";
pub const DEFAULT_TOPIC: &str = "racing/driver_name";
pub const DEFAULT_LOGIN: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Broker connection parameters plus the inclusion policy.
///
/// The JSON form is a single flat object: `Server`, `Topic`, `Login`,
/// `Password` and one boolean per toggle key. Missing members take their
/// defaults, unknown members are ignored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PublisherSettings {
    pub server: String,
    /// Topic template, may contain placeholders.
    pub topic: String,
    pub login: String,
    pub password: String,
    #[serde(flatten)]
    pub policy: InclusionPolicy,
}

impl Default for PublisherSettings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            login: DEFAULT_LOGIN.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            policy: InclusionPolicy::default(),
        }
    }
}

impl fmt::Debug for PublisherSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublisherSettings")
            .field("server", &self.server)
            .field("topic", &self.topic)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Shareable view of the settings. The password is never part of it.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ExportedSettings<'a> {
    server: &'a str,
    topic: &'a str,
    login: &'a str,
    #[serde(flatten)]
    policy: &'a InclusionPolicy,
}

impl PublisherSettings {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pretty JSON suitable for sharing, without the password.
    pub fn export_json(&self) -> Result<String, ConfigError> {
        let exported = ExportedSettings {
            server: &self.server,
            topic: &self.topic,
            login: &self.login,
            policy: &self.policy,
        };
        Ok(serde_json::to_string_pretty(&exported)?)
    }

    /// Merge settings received from an export.
    ///
    /// Connection strings are taken only when non-empty and the password is
    /// never taken. Every toggle is replaced.
    pub fn import_from(&mut self, imported: &PublisherSettings) {
        for (current, incoming) in [
            (&mut self.server, &imported.server),
            (&mut self.topic, &imported.topic),
            (&mut self.login, &imported.login),
        ] {
            if !incoming.is_empty() {
                current.clone_from(incoming);
            }
        }
        self.policy = imported.policy;
    }

    pub fn import_json(&mut self, text: &str) -> Result<(), ConfigError> {
        let imported = Self::from_json_str(text)?;
        self.import_from(&imported);
        Ok(())
    }

    pub fn export_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        write_text(path, &self.export_json()?)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = read_text(path)?;
        self.import_json(&text)
    }
}

/// Per-installation identity stamped on every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(rename = "UserId", default = "Uuid::new_v4")]
    pub user_id: Uuid,
}

impl UserSettings {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::new(Uuid::new_v4())
    }
}

/// Read and parse a JSON settings file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = read_text(path)?;
    let value = serde_json::from_str(&text)?;
    debug!(path = %path.display(), "Loaded settings file");
    Ok(value)
}

/// Write `value` as pretty JSON, replacing the file.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let text = serde_json::to_string_pretty(value)?;
    write_text(path, &text)?;
    debug!(path = %path.display(), "Saved settings file");
    Ok(())
}

fn read_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_text(path: &Path, text: &str) -> Result<(), ConfigError> {
    fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Preset;
    use crate::toggle::Toggle;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn defaults() {
        let settings = PublisherSettings::default();
        assert_eq!(settings.server, "localhost");
        assert_eq!(settings.topic, "racing/driver_name");
        assert_eq!(settings.login, "admin");
        assert_eq!(settings.password, "admin");
        assert_eq!(settings.policy, InclusionPolicy::default());
    }

    #[test]
    fn empty_object_yields_defaults() -> TestResult {
        assert_eq!(
            PublisherSettings::from_json_str("{}")?,
            PublisherSettings::default()
        );
        Ok(())
    }

    #[test]
    fn parses_flat_settings_object() -> TestResult {
        let settings = PublisherSettings::from_json_str(
            r#"{"Server":"broker.lan","Topic":"sim/{gameName}","Include_Flags":false,"Include_Fuel":true,"WindowWidth":800}"#,
        )?;
        assert_eq!(settings.server, "broker.lan");
        assert_eq!(settings.topic, "sim/{gameName}");
        assert_eq!(settings.login, "admin");
        assert!(!settings.policy.is_enabled(Toggle::Flags));
        assert!(settings.policy.is_enabled(Toggle::Fuel));
        Ok(())
    }

    #[test]
    fn full_json_round_trip() -> TestResult {
        let mut settings = PublisherSettings::default();
        settings.password = "s3cret".to_string();
        settings.policy = InclusionPolicy::preset(Preset::Strategy);
        let back = PublisherSettings::from_json_str(&settings.to_json_pretty()?)?;
        assert_eq!(back, settings);
        Ok(())
    }

    #[test]
    fn export_omits_password() -> TestResult {
        let mut settings = PublisherSettings::default();
        settings.password = "s3cret".to_string();
        let exported = settings.export_json()?;
        assert!(!exported.contains("Password"));
        assert!(!exported.contains("s3cret"));
        assert!(exported.contains("\"EnableDebugMode\": false"));
        Ok(())
    }

    #[test]
    fn import_keeps_password_and_skips_empty_strings() -> TestResult {
        let mut settings = PublisherSettings::default();
        settings.password = "local".to_string();
        settings.import_json(
            r#"{"Server":"","Topic":"team/{carName}","Login":"","Password":"remote","Include_TireDirt":true,"Include_Gear":false}"#,
        )?;
        assert_eq!(settings.server, "localhost");
        assert_eq!(settings.topic, "team/{carName}");
        assert_eq!(settings.login, "admin");
        assert_eq!(settings.password, "local");
        assert!(settings.policy.is_enabled(Toggle::TireDirt));
        assert!(!settings.policy.is_enabled(Toggle::Gear));
        Ok(())
    }

    #[test]
    fn debug_redacts_password() {
        let mut settings = PublisherSettings::default();
        settings.password = "s3cret".to_string();
        assert!(!format!("{settings:?}").contains("s3cret"));
    }

    #[test]
    fn user_settings_generate_id_when_missing() -> TestResult {
        let user: UserSettings = serde_json::from_str("{}")?;
        assert_eq!(user.user_id.get_version_num(), 4);
        let fixed: UserSettings =
            serde_json::from_str(r#"{"UserId":"6f0f7c7e-0a4b-4f8e-9d59-6c3f1d5b2a10"}"#)?;
        assert_eq!(
            fixed.user_id.to_string(),
            "6f0f7c7e-0a4b-4f8e-9d59-6c3f1d5b2a10"
        );
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = load_json::<PublisherSettings>(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
