//! Generation client: one service call, one normalized result

use log::{debug, error, info};
use crate::config::AppConfig;
use crate::prompt::Prompt;
use crate::providers::{GeminiClient, TextGenerator};

/// Outcome of a generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult
{   /// Trimmed generated text
    Success(String)
  , /// Human-readable failure message
    Failure(String)
}

impl GenerationResult
{   pub fn is_success(&self) -> bool
    {   matches!(self, GenerationResult::Success(_))
    }

    /// Text to display: the document or the failure message
    pub fn display_text(&self) -> &str
    {   match self
        {   GenerationResult::Success(text) => text
          , GenerationResult::Failure(message) => message
        }
    }
}

impl From<Result<String, crate::error::Error>> for GenerationResult
{   fn from(result: Result<String, crate::error::Error>) -> Self
    {   match result
        {   Ok(text) => {
              let trimmed = text.trim();
              if trimmed.is_empty()
              {   GenerationResult::Failure(
                    crate::error::Error::EmptyResponse.to_string()
                  )
              } else
              {   GenerationResult::Success(trimmed.to_string())
              }
            }
          , Err(e) => GenerationResult::Failure(e.to_string())
        }
    }
}

/// Owns the credential-bound generator and the model identifier
pub struct GenerationClient<G>
{   generator: Option<G>
  , model: String
}

impl GenerationClient<GeminiClient>
{   /// Production client talking to Gemini
    pub fn from_config(config: &AppConfig) -> Self
    {   let generator = config.api_key.clone().map(|key| {
          GeminiClient::new(key, config.api_base.clone())
        });
        GenerationClient
        {   generator
          , model: config.model.clone()
        }
    }
}

impl<G: TextGenerator> GenerationClient<G>
{   /// Client over any generator.
    /// Without a configured credential the generator is never called.
    pub fn new(config: &AppConfig, generator: G) -> Self
    {   GenerationClient
        {   generator: config.api_key.as_ref().map(|_| generator)
          , model: config.model.clone()
        }
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    /// Run one generation; every error becomes a `Failure`
    pub async fn generate(&self, prompt: &Prompt) -> GenerationResult
    {   let generator = match &self.generator
        {   Some(generator) => generator
          , None => {
              error!("Generation requested without a credential");
              return GenerationResult::Failure(
                crate::error::Error::MissingApiKey.to_string()
              );
            }
        };

        debug!("Generating with model: {}", self.model);
        let result: GenerationResult = generator
          .generate(prompt.as_str(), &self.model)
          .await
          .into();

        match &result
        {   GenerationResult::Success(text) => {
              info!("Generated {} characters", text.chars().count());
            }
          , GenerationResult::Failure(message) => {
              error!("Generation failed: {}", message);
            }
        }
        result
    }
}
