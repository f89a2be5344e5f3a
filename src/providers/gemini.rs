use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part
{   #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content
{   #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>
  , #[serde(default)]
    pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest
{   pub contents: Vec<Content>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   #[serde(default)]
    pub content: Option<Content>
  , #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope
{   error: ApiErrorBody
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody
{   #[serde(default)]
    code: Option<u16>
  , message: String
  , #[serde(default)]
    status: Option<String>
}

impl GenerateContentResponse
{   /// Text of the first candidate, all parts joined.
    /// Empty when the service returned no usable text.
    pub fn text(&self) -> String
    {   self.candidates.first()
          .and_then(|c| c.content.as_ref())
          .map(|content| {
            content.parts
              .iter()
              .filter_map(|p| p.text.as_deref())
              .collect::<String>()
          })
          .unwrap_or_default()
    }
}

/// Readable message from an error response body
fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String
{   match serde_json::from_str::<ApiErrorEnvelope>(body)
    {   Ok(envelope) => {
          let code = envelope.error.code
            .unwrap_or_else(|| status.as_u16());
          match envelope.error.status
          {   Some(kind) => format!(
                "{} {}: {}", code, kind, envelope.error.message
              )
            , None => format!("{}: {}", code, envelope.error.message)
          }
        }
      , Err(_) => format!("{}: {}", status, body)
    }
}

// ===== Gemini Client =====

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient
{   api_key: String
  , api_base: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   pub fn new(api_key: String, api_base: String) -> Self
    {   debug!("Creating GeminiClient for {}", api_base);
        GeminiClient
        {   api_key
          , api_base: api_base.trim_end_matches('/').to_string()
          , http_client: reqwest::Client::new()
        }
    }

    fn endpoint(&self, model: &str) -> String
    {   format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait]
impl crate::providers::TextGenerator for GeminiClient
{   async fn generate(
      &self
    , prompt: &str
    , model: &str
    ) -> Result<String, crate::error::Error>
    {   debug!("Sending prompt to Gemini model: {}", model);

        let request = GenerateContentRequest
        {   contents: vec![
              Content
              {   role: Some("user".to_string())
                , parts: vec![
                    Part { text: Some(prompt.to_string()) }
                  ]
              }
            ]
        };

        let response = self.http_client
          .post(self.endpoint(model))
          .header("x-goog-api-key", &self.api_key)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              describe_api_error(status, &error_text)
            ));
        }

        let body: GenerateContentResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        if let Some(reason) = body.candidates.first()
          .and_then(|c| c.finish_reason.as_deref())
        {   debug!("Gemini finish reason: {}", reason);
        }

        let text = body.text();
        trace!("Gemini returned {} bytes", text.len());
        Ok(text)
    }
}
