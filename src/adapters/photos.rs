use crate::domain::model::City;
use crate::domain::ports::PhotoSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Specialization -> stock photo. Keys are lower-cased specialization names.
const SPECIALIZATION_PHOTOS: &[(&str, &str)] = &[
    (
        "general physician",
        "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "cardiologist",
        "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "pediatrician",
        "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "dermatologist",
        "https://images.unsplash.com/photo-1594824475317-87b0b5b0c3e1?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "orthopedic",
        "https://images.unsplash.com/photo-1607990281513-2c110a25bd8c?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "ent specialist",
        "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "gynecologist",
        "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    ),
    (
        "neurologist",
        "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=400&fit=crop&crop=face",
    ),
];

/// Stand-in for a real image search API: a fixed lookup table keyed by
/// specialization, with an optional simulated request latency.
#[derive(Debug, Clone)]
pub struct StaticPhotoSource {
    delay: Duration,
}

impl StaticPhotoSource {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StaticPhotoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoSource for StaticPhotoSource {
    async fn search(
        &self,
        _name: &str,
        specialization: &str,
        _city: City,
    ) -> Result<Option<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let key = specialization.to_lowercase();
        Ok(SPECIALIZATION_PHOTOS
            .iter()
            .find(|(spec, _)| *spec == key)
            .map(|(_, url)| (*url).to_string()))
    }
}
