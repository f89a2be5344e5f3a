use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error, info};
use atsdoc::{AppConfig, DocumentType, GenerationRequest, PipelineOutcome, WriterBackend};

/// Generate an ATS-optimized resume or cover letter as a .docx
#[derive(Parser, Debug)]
#[command(name = "atsdoc", version, about)]
struct Cli
{   /// Document to write: resume or cover-letter
    document_type: DocumentType
  , /// Job title of the posting
    job_title: String
  , /// Company name
    company: String
  , /// Job description text, or "-" to read it from stdin
    job_description: String
  , /// Directory the document is saved into
    #[arg(default_value = ".")]
    out_dir: PathBuf
}

impl Cli
{   fn into_request(self) -> Result<(GenerationRequest, PathBuf), String>
    {   let job_description = if self.job_description == "-"
        {   let mut buf = String::new();
            std::io::stdin()
              .read_to_string(&mut buf)
              .map_err(|e| format!("failed to read stdin: {}", e))?;
            buf
        } else
        {   self.job_description
        };

        let request = GenerationRequest::new(
          self.document_type,
          self.job_title,
          self.company,
          job_description
        );
        Ok((request, self.out_dir))
    }
}

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);
    let (request, out_dir) = match cli.into_request()
    {   Ok(parts) => parts
      , Err(message) => {
          eprintln!("{}", message);
          return ExitCode::from(2);
        }
    };

    let config = AppConfig::load();
    let backend = WriterBackend::new(config);
    let reply = backend.generate_and_wait(request).await;
    if let Err(e) = backend.shutdown().await
    {   debug!("Shutdown: {}", e);
    }

    let outcome = match reply
    {   Ok(outcome) => outcome
      , Err(e) => {
          error!("Pipeline aborted: {}", e);
          eprintln!("{}", e);
          return ExitCode::from(2);
        }
    };

    println!("{}", outcome.display_text());

    match outcome
    {   PipelineOutcome::Generated { document, .. } => {
          let path = out_dir.join(document.filename());
          if let Err(e) = std::fs::write(&path, document.as_bytes())
          {   eprintln!("failed to write {}: {}", path.display(), e);
              return ExitCode::from(2);
          }
          info!("Saved {} ({})", path.display(), document.mime_type());
          eprintln!("Saved {}", path.display());
          ExitCode::SUCCESS
        }
      , _ => ExitCode::from(1)
    }
}
