//! Request types supplied by the caller

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Message shown when any of the job fields is left empty.
pub const MISSING_DETAILS_MESSAGE: &str
  = "Please provide all details.";

/// The two kinds of document the writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType
{   Resume
  , CoverLetter
}

impl DocumentType
{   /// Label substituted into the prompt ("Resume" / "Cover Letter")
    pub fn label(&self) -> &'static str
    {   match self
        {   DocumentType::Resume => "Resume"
          , DocumentType::CoverLetter => "Cover Letter"
        }
    }

    /// Suggested download filename
    pub fn filename(&self) -> &'static str
    {   match self
        {   DocumentType::Resume => "resume.docx"
          , DocumentType::CoverLetter => "cover_letter.docx"
        }
    }
}

impl fmt::Display for DocumentType
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.label())
    }
}

impl FromStr for DocumentType
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.trim().to_ascii_lowercase().as_str()
        {   "resume" => Ok(DocumentType::Resume)
          , "cover letter" | "cover-letter" | "cover_letter"
          | "coverletter" => Ok(DocumentType::CoverLetter)
          , other => Err(crate::error::Error::Other(
              format!("unknown document type: {}", other)
            ))
        }
    }
}

/// Job details for one generate-and-download cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub document_type: DocumentType
  , pub job_title: String
  , pub company_name: String
  , pub job_description: String
}

impl GenerationRequest
{   pub fn new(
      document_type: DocumentType
    , job_title: impl Into<String>
    , company_name: impl Into<String>
    , job_description: impl Into<String>
    ) -> Self
    {   GenerationRequest
        {   document_type
          , job_title: job_title.into()
          , company_name: company_name.into()
          , job_description: job_description.into()
        }
    }

    /// Check that every field is filled in.
    /// On failure the error is the exact user-facing message.
    pub fn validate(&self) -> Result<(), &'static str>
    {   if self.job_title.is_empty()
          || self.company_name.is_empty()
          || self.job_description.is_empty()
        {   return Err(MISSING_DETAILS_MESSAGE);
        }
        Ok(())
    }
}
