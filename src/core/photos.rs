use crate::domain::model::{City, PhotoCache, PhotoCacheEntry};
use crate::domain::ports::{KeyValueStore, PhotoSource};
use crate::utils::error::Result;
use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;
use tokio::sync::Mutex;

/// Storage key for the serialized photo cache mapping.
pub const CACHE_KEY: &str = "doctor_photos_cache";

/// Fixed ordered pool of professional avatar placeholders.
const AVATAR_PLACEHOLDERS: &[&str] = &[
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1594824475317-87b0b5b0c3e1?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1607990281513-2c110a25bd8c?w=400&h=400&fit=crop&crop=face",
];

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Composite cache key: name, specialization and city joined with underscores,
/// lower-cased, runs of whitespace collapsed to single underscores.
pub fn normalize_key(name: &str, specialization: &str, city: City) -> String {
    let raw = format!("{}_{}_{}", name, specialization, city).to_lowercase();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    re.replace_all(&raw, "_").into_owned()
}

/// Deterministic placeholder: the same doctor name always maps to the same
/// avatar, even across cache clears.
pub fn placeholder_avatar(name: &str) -> &'static str {
    let hash: u32 = name.chars().map(|c| c as u32).sum();
    AVATAR_PLACEHOLDERS[hash as usize % AVATAR_PLACEHOLDERS.len()]
}

/// Resolves doctor photo URLs: persisted cache first, then the photo source,
/// then the deterministic placeholder. Never fails outward.
///
/// Write-backs to the shared cache blob are read-modify-write cycles and are
/// serialized through an internal mutex so concurrent resolutions for
/// different doctors cannot clobber each other's entries.
pub struct PhotoResolver<S: KeyValueStore, P: PhotoSource> {
    store: S,
    source: P,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore, P: PhotoSource> PhotoResolver<S, P> {
    pub fn new(store: S, source: P) -> Self {
        Self {
            store,
            source,
            write_lock: Mutex::new(()),
        }
    }

    /// Resolve the display photo for one doctor. Always returns a usable URL;
    /// persistence and lookup failures degrade to the placeholder path.
    pub async fn resolve(&self, name: &str, specialization: &str, city: City) -> String {
        let key = normalize_key(name, specialization, city);

        if let Some(url) = self.cached(&key).await {
            tracing::debug!("Photo cache hit for {}", key);
            return url;
        }

        let url = match self.source.search(name, specialization, city).await {
            Ok(Some(url)) => url,
            Ok(None) => placeholder_avatar(name).to_string(),
            Err(e) => {
                tracing::warn!("Photo lookup failed for {}: {}", key, e);
                placeholder_avatar(name).to_string()
            }
        };

        self.store_entry(&key, &url).await;
        url
    }

    /// Drop the whole cache mapping (explicit reset).
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(CACHE_KEY).await
    }

    /// Fresh cached URL for `key`, if any. An absent or unreadable blob and an
    /// expired entry all read as a miss.
    async fn cached(&self, key: &str) -> Option<String> {
        let cache = self.load_cache().await;
        let entry = cache.get(key)?;
        if entry.is_fresh(Utc::now()) {
            Some(entry.url.clone())
        } else {
            None
        }
    }

    async fn load_cache(&self) -> PhotoCache {
        match self.store.read(CACHE_KEY).await {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(cache) => cache,
                Err(e) => {
                    tracing::warn!("Discarding unreadable photo cache: {}", e);
                    PhotoCache::default()
                }
            },
            Err(_) => PhotoCache::default(),
        }
    }

    async fn store_entry(&self, key: &str, url: &str) {
        let _guard = self.write_lock.lock().await;

        let mut cache = self.load_cache().await;
        cache.insert(
            key.to_string(),
            PhotoCacheEntry::new(url.to_string(), Utc::now()),
        );

        match serde_json::to_vec(&cache) {
            Ok(bytes) => {
                if let Err(e) = self.store.write(CACHE_KEY, &bytes).await {
                    tracing::warn!("Failed to persist photo cache: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize photo cache: {}", e),
        }
    }
}
