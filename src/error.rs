use std::fmt;

/// Error type shared by every stage of the writer.
/// Implements Clone so it can travel through reply channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API credential was configured
    MissingApiKey
  , /// HTTP transport failure
    HttpError(String)
  , /// Generation service answered with an error status
    ApiError(String)
  , /// Failed to parse the service response
    ParseError(String)
  , /// Service answered but produced no text
    EmptyResponse
  , /// Invalid configuration (secrets file, endpoint, ...)
    InvalidConfiguration(String)
  , /// Document serialization failed
    Export(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "no credential configured")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::EmptyResponse => {
              write!(f, "No response generated.")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Export(msg) => {
              write!(f, "Document export failed: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
