use crate::domain::model::City;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence port for small named blobs (the photo cache lives under a
/// single key).
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Secondary photo resolution source. `Ok(None)` means no match; the resolver
/// falls through to its deterministic placeholder.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn search(&self, name: &str, specialization: &str, city: City)
        -> Result<Option<String>>;
}

/// Hosted AI text generation: prompt in, free text out, fails transiently.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str, max_tokens: u32) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn ai_endpoint(&self) -> &str;
    fn ai_model(&self) -> &str;
    fn ai_max_tokens(&self) -> u32;
    fn cache_dir(&self) -> &str;
    fn photo_lookup_delay_ms(&self) -> u64;
}
