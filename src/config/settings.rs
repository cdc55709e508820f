use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file alternative to CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub ai: AiSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub photos: PhotoSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoSettings {
    pub lookup_delay_ms: u64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.blink.new/ai/generate".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: "./cache".to_string(),
        }
    }
}

impl Default for PhotoSettings {
    fn default() -> Self {
        Self {
            lookup_delay_ms: 500,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ai: AiSettings::default(),
            cache: CacheSettings::default(),
            photos: PhotoSettings::default(),
        }
    }
}

impl AppSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: AppSettings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for AppSettings {
    fn ai_endpoint(&self) -> &str {
        &self.ai.endpoint
    }

    fn ai_model(&self) -> &str {
        &self.ai.model
    }

    fn ai_max_tokens(&self) -> u32 {
        self.ai.max_tokens
    }

    fn cache_dir(&self) -> &str {
        &self.cache.dir
    }

    fn photo_lookup_delay_ms(&self) -> u64 {
        self.photos.lookup_delay_ms
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validate_url("ai.endpoint", &self.ai.endpoint)?;
        validate_positive_number("ai.max_tokens", self.ai.max_tokens, 1)?;
        validate_path("cache.dir", &self.cache.dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_a_full_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[ai]
endpoint = "http://localhost:9000/generate"
model = "gpt-4o-mini"
max_tokens = 300

[cache]
dir = "/tmp/photo-cache"

[photos]
lookup_delay_ms = 0
"#
        )
        .unwrap();

        let settings = AppSettings::load(file.path()).unwrap();
        assert_eq!(settings.ai_endpoint(), "http://localhost:9000/generate");
        assert_eq!(settings.ai_max_tokens(), 300);
        assert_eq!(settings.cache_dir(), "/tmp/photo-cache");
        assert_eq!(settings.photo_lookup_delay_ms(), 0);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\ndir = \"./elsewhere\"").unwrap();

        let settings = AppSettings::load(file.path()).unwrap();
        assert_eq!(settings.cache_dir(), "./elsewhere");
        assert_eq!(settings.ai_model(), "gpt-4o-mini");
        assert_eq!(settings.ai_max_tokens(), 500);
    }

    #[test]
    fn rejects_bad_endpoint() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[ai]\nendpoint = \"ftp://nope\"\nmodel = \"gpt-4o-mini\"\nmax_tokens = 500"
        )
        .unwrap();

        assert!(AppSettings::load(file.path()).is_err());
    }
}
