use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::WriterFoot;
use crate::generation::GenerationClient;
use crate::providers::TextGenerator;

/// Public API for the writer backend - owns the task
pub struct WriterBackend
{   hand: crate::WriterHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl WriterBackend
{   /// Create and spawn a backend talking to Gemini.
    /// Returns immediately - spawns background task
    pub fn new(config: crate::config::AppConfig) -> Self
    {   debug!("Creating WriterBackend for model: {}", config.model);
        let client = GenerationClient::from_config(&config);
        Self::spawn(client)
    }

    /// Create and spawn a backend over any generator
    pub fn with_generator<G>(
      config: crate::config::AppConfig
    , generator: G
    ) -> Self
    where G: TextGenerator + 'static
    {   debug!("Creating WriterBackend with custom generator");
        let client = GenerationClient::new(&config, generator);
        Self::spawn(client)
    }

    fn spawn<G>(client: GenerationClient<G>) -> Self
    where G: TextGenerator + 'static
    {   let (generate_tx, generate_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::WriterHand
        {   generate_tx
          , kill_process_tx
        };

        let foot = crate::WriterFoot
        {   generate_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, client).await
        });

        WriterBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue a request - returns almost immediately
    pub async fn generate(
      &self
    , request: crate::request::GenerationRequest
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GenerateReply>,
        crate::error::Error
      >
    {   debug!("generate queuing {} request", request.document_type);
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GenerateArgs
        {   request
          , reply: reply_tx
        };

        self.hand.generate_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Queue a request and wait for its outcome
    pub async fn generate_and_wait(
      &self
    , request: crate::request::GenerationRequest
    ) -> crate::GenerateReply
    {   let mut reply_rx = self.generate(request).await?;
        match reply_rx.recv().await
        {   Some(reply) => reply
          , None => {
              error!("Backend dropped the reply");
              Err(crate::error::Error::Other(
                "Backend disconnected".to_string()
              ))
            }
        }
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down WriterBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        match reply_rx.recv().await
        {   Some(result) => {
              debug!("Backend shutdown confirmed");
              result
            }
          , None => {
              error!("Backend exited without confirming shutdown");
              Err(crate::error::Error::Other(
                "Backend already shutdown".to_string()
              ))
            }
        }
    }
}

/// Main backend event loop
///
/// Requests are handled one at a time: a pipeline run completes
/// before the next queued command is read.
async fn run_backend_loop<G: TextGenerator>(
  foot: crate::WriterFoot
, client: GenerationClient<G>
)
{   debug!("Starting WriterBackend event loop");
    let WriterFoot
    {   mut generate_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { biased;
        Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("WriterBackend shutting down");
          break;
        }
      , Some(cmd) = generate_rx.recv() => {
          debug!("Received Generate for {}", cmd.request.document_type);
          let result = crate::pipeline::run_pipeline(
            &client,
            &cmd.request
          ).await;
          let _ = cmd.reply.send(result);
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}
