use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Backend service
    pub backend_url: String,

    // Translations
    pub translations_path: String,

    // Preference persistence
    pub preference_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend service
            backend_url: std::env::var("VIDGRAB_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            // Translations
            translations_path: std::env::var("VIDGRAB_TRANSLATIONS_PATH")
                .unwrap_or_else(|_| "/static/translations".to_string()),

            // Preference persistence
            preference_file: std::env::var("VIDGRAB_PREFERENCE_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "VIDGRAB_BACKEND_URL",
            "VIDGRAB_TRANSLATIONS_PATH",
            "VIDGRAB_PREFERENCE_FILE",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.translations_path, "/static/translations");
        assert_eq!(config.preference_file, "data/preferences.json");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("VIDGRAB_BACKEND_URL", "https://vidgrab.example.com");
        std::env::set_var("VIDGRAB_PREFERENCE_FILE", "/tmp/vidgrab/prefs.json");

        let config = Config::from_env().expect("should load");

        assert_eq!(config.backend_url, "https://vidgrab.example.com");
        assert_eq!(config.preference_file, "/tmp/vidgrab/prefs.json");

        clear_env();
    }
}
