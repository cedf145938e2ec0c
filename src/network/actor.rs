//! Network actor - runs generation requests and file decodes in Tokio

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::generate_url;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_generate};
use crate::network::file_import::decode_file;

/// Network actor that processes generation and file-decode commands.
/// Work is fire-and-forget: there is no cancellation, an operation started
/// before the user navigated away still reports back.
pub struct NetworkActor {
    client: reqwest::Client,
    generate_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    tasks: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            generate_url: generate_url(),
            response_tx,
            tasks: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Generate { id, prompt, decal_type }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.generate_url.clone();

                            self.tasks.spawn(async move {
                                tracing::info!(id, decal_type, "executing generation request");
                                let result = execute_generate(&client, &url, id, decal_type, &prompt).await;
                                tracing::info!(id, "generation request completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::DecodeFile { id, path, decal_type }) => {
                            let response_tx = self.response_tx.clone();

                            self.tasks.spawn(async move {
                                tracing::info!(id, path = %path.display(), "decoding file");
                                let result = match decode_file(&path).await {
                                    Ok(image) => NetworkResponse::Decoded { id, decal_type, image },
                                    Err(e) => NetworkResponse::DecodeFailed { id, message: e.to_string() },
                                };
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.tasks.join_next() => {}
            }
        }
    }
}
