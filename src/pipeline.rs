//! Request → Prompt → GenerationResult → ExportedDocument

use log::{debug, info};
use crate::export::ExportedDocument;
use crate::generation::{GenerationClient, GenerationResult};
use crate::providers::TextGenerator;
use crate::request::GenerationRequest;

/// What the caller displays and, on success, offers for download
#[derive(Debug, Clone)]
pub enum PipelineOutcome
{   /// A field was empty; the service was not called
    Invalid
    {   message: String
    }
  , /// The service call failed
    Failed
    {   message: String
    }
  , /// Generated text and its exported document
    Generated
    {   text: String
      , document: ExportedDocument
    }
}

impl PipelineOutcome
{   pub fn display_text(&self) -> &str
    {   match self
        {   PipelineOutcome::Invalid { message } => message
          , PipelineOutcome::Failed { message } => message
          , PipelineOutcome::Generated { text, .. } => text
        }
    }

    /// Document to offer, only when generation succeeded
    pub fn document(&self) -> Option<&ExportedDocument>
    {   match self
        {   PipelineOutcome::Generated { document, .. } => Some(document)
          , _ => None
        }
    }

    pub fn into_document(self) -> Option<ExportedDocument>
    {   match self
        {   PipelineOutcome::Generated { document, .. } => Some(document)
          , _ => None
        }
    }
}

/// Run one full generate-and-export cycle.
///
/// Only an export failure is returned as `Err`; validation and
/// generation problems are part of the outcome.
pub async fn run_pipeline<G: TextGenerator>(
  client: &GenerationClient<G>
, request: &GenerationRequest
) -> Result<PipelineOutcome, crate::error::Error>
{   if let Err(message) = request.validate()
    {   debug!("Rejecting incomplete request");
        return Ok(PipelineOutcome::Invalid
        {   message: message.to_string()
        });
    }

    let prompt = crate::prompt::build(request);
    match client.generate(&prompt).await
    {   GenerationResult::Success(text) => {
          let document = crate::export::export(
            &text,
            request.document_type
          )?;
          info!("Prepared {}", document.filename());
          Ok(PipelineOutcome::Generated { text, document })
        }
      , GenerationResult::Failure(message) => {
          Ok(PipelineOutcome::Failed { message })
        }
    }
}
