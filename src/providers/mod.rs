//! Text generation providers

use async_trait::async_trait;

pub mod gemini;

// Re-export for convenience
pub use gemini::GeminiClient;

/// Capability to turn a prompt into text with a given model.
///
/// Implementations return the raw service text; trimming and
/// empty-response handling belong to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync
{   async fn generate(
      &self
    , prompt: &str
    , model: &str
    ) -> Result<String, crate::error::Error>;
}
