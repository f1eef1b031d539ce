//! Environment overrides for client settings.
//!
//! Applied after the settings file is loaded:
//! - `LUDEX_API_URL`: catalog base URL
//! - `LUDEX_API_KEY`: catalog API key
//! - `LUDEX_PAGE_SIZE`: games per page
//! - `LUDEX_DATABASE`: favorites database file
//!
//! Empty values and numbers that do not parse are ignored.

use std::path::PathBuf;

use ludex_domain::ClientSettings;
use tracing::warn;

/// Catalog base URL override.
pub const ENV_API_URL: &str = "LUDEX_API_URL";
/// Catalog API key override.
pub const ENV_API_KEY: &str = "LUDEX_API_KEY";
/// Page size override.
pub const ENV_PAGE_SIZE: &str = "LUDEX_PAGE_SIZE";
/// Database file override.
pub const ENV_DATABASE: &str = "LUDEX_DATABASE";

/// Applies overrides read through `lookup`.
pub fn apply_env_overrides<F>(settings: &mut ClientSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(url) = read(ENV_API_URL) {
        settings.api_base_url = url;
    }
    if let Some(key) = read(ENV_API_KEY) {
        settings.api_key = Some(key);
    }
    if let Some(raw) = read(ENV_PAGE_SIZE) {
        match raw.trim().parse() {
            Ok(page_size) => settings.page_size = page_size,
            Err(_) => warn!(variable = ENV_PAGE_SIZE, value = %raw, "ignoring invalid page size"),
        }
    }
    if let Some(path) = read(ENV_DATABASE) {
        settings.database_file = Some(PathBuf::from(path));
    }
}

/// Applies overrides from the process environment.
pub fn apply_process_env(settings: &mut ClientSettings) {
    apply_env_overrides(settings, |name| std::env::var(name).ok());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut settings = ClientSettings::default();

        apply_env_overrides(
            &mut settings,
            lookup(&[
                (ENV_API_URL, "http://localhost:8080/api"),
                (ENV_API_KEY, "env-key"),
                (ENV_PAGE_SIZE, "40"),
                (ENV_DATABASE, "/var/lib/ludex/favorites.db"),
            ]),
        );

        assert_eq!(
            settings,
            ClientSettings {
                api_base_url: "http://localhost:8080/api".to_string(),
                api_key: Some("env-key".to_string()),
                page_size: 40,
                request_timeout_secs: 30,
                database_file: Some(PathBuf::from("/var/lib/ludex/favorites.db")),
            }
        );
    }

    #[test]
    fn empty_and_invalid_values_are_ignored() {
        let mut settings = ClientSettings {
            api_key: Some("from-file".to_string()),
            ..ClientSettings::default()
        };

        apply_env_overrides(
            &mut settings,
            lookup(&[(ENV_API_KEY, "  "), (ENV_PAGE_SIZE, "lots")]),
        );

        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.page_size, 20);
    }
}
