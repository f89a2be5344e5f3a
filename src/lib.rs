pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod generation;
pub mod export;
pub mod pipeline;
pub mod client;

/*

atsdoc turns job-posting details into a tailored resume or cover
letter. The text comes from Gemini; the result is offered as a .docx
built entirely in memory.

atsdoc/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and backend channel types
│   ├── error.rs        # Error type shared by every stage
│   ├── config.rs       # Credential/model loading (secret store, env)
│   ├── request.rs      # Document type and job details
│   ├── prompt.rs       # Fixed prompt template
│   ├── providers/      # TextGenerator capability + Gemini client
│   ├── generation.rs   # Normalizes a service call into a result
│   ├── export.rs       # In-memory .docx export
│   ├── pipeline.rs     # Validate → prompt → generate → export
│   ├── client.rs       # Backend task serializing pipeline runs
│   └── main.rs         # Command-line front end
└── tests/

*/

pub use client::WriterBackend;
pub use config::AppConfig;
pub use error::Error;
pub use export::{ExportedDocument, DOCX_MIME_TYPE};
pub use generation::{GenerationClient, GenerationResult};
pub use pipeline::{run_pipeline, PipelineOutcome};
pub use prompt::Prompt;
pub use providers::{GeminiClient, TextGenerator};
pub use request::{DocumentType, GenerationRequest, MISSING_DETAILS_MESSAGE};

/// WRITER BACKEND INTERFACE:

// ===== Generate =====

pub type GenerateReply
  = Result<crate::pipeline::PipelineOutcome, crate::error::Error>;
pub type GenerateReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateReply>;

pub struct GenerateArgs
{   pub request: crate::request::GenerationRequest
  , pub reply: GenerateReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== WriterHand (sender side) =====

pub struct WriterHand
{   pub generate_tx
      : tokio::sync::mpsc::UnboundedSender<GenerateArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== WriterFoot (receiver side) =====

pub struct WriterFoot
{   pub generate_rx
      : tokio::sync::mpsc::UnboundedReceiver<GenerateArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}
