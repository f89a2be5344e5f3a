//! Prompt construction for the generation service

use std::fmt;
use log::{debug, trace};
use crate::request::GenerationRequest;

/// System-role instruction placed at the top of every prompt.
pub const SYSTEM_INSTRUCTIONS: &str
  = "You are a professional resume and cover letter writer \
     specializing in ATS-optimized documents.";

/// Immutable prompt text for exactly one generation call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prompt(String);

impl Prompt
{   pub fn as_str(&self) -> &str
    {   &self.0
    }

    pub fn into_string(self) -> String
    {   self.0
    }
}

impl fmt::Display for Prompt
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt
{   fn as_ref(&self) -> &str
    {   &self.0
    }
}

/// Build the prompt for a validated request.
///
/// Field values are embedded verbatim; the same request always
/// yields the same prompt.
pub fn build(request: &GenerationRequest) -> Prompt
{   debug!(
      "Building {} prompt for {} at {}",
      request.document_type,
      request.job_title,
      request.company_name
    );
    let text = format!(
r#"
{system_instructions}
Generate a detailed and well-structured {doc_type} tailored to the job description below.
Ensure the {doc_type} includes all essential sections and follows professional formatting.

**Important Instructions:**
1. Only provide the {doc_type} content. Do NOT include any additional notes, explanations, or disclaimers.
2. Do NOT include phrases like "Note:", "Remember to", "Best of luck", or "For demonstration purposes".
3. Be specific and direct. Only provide the {doc_type} content.

Job Title: {job_title}
Company: {company_name}
Job Description: {job_description}

### {doc_type} ###
"#,
      system_instructions = SYSTEM_INSTRUCTIONS,
      doc_type = request.document_type.label(),
      job_title = request.job_title,
      company_name = request.company_name,
      job_description = request.job_description,
    );
    trace!("Prompt: {}", text);
    Prompt(text)
}
