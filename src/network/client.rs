//! Generation client - one POST to the image service, one JSON body back

use serde::{Deserialize, Serialize};

use crate::messages::NetworkResponse;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    photo: String,
}

/// Wrap the service's base64 payload in the data-URI form the store keeps
pub fn data_uri(photo: &str) -> String {
    format!("data:image/png;base64,{photo}")
}

/// Submit a prompt and await the single response. Failures come back as
/// `GenerateFailed` with a message fit for the alert popup; the caller's
/// cleanup runs the same way either direction.
pub async fn execute_generate(
    client: &reqwest::Client,
    url: &str,
    id: u64,
    decal_type: &'static str,
    prompt: &str,
) -> NetworkResponse {
    let result = client
        .post(url)
        .json(&GenerateRequest { prompt })
        .send()
        .await;

    match result {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return NetworkResponse::GenerateFailed {
                    id,
                    message: format!("Generation failed: HTTP {}", status.as_u16()),
                };
            }
            match resp.json::<GenerateResponse>().await {
                Ok(body) => NetworkResponse::Generated {
                    id,
                    decal_type,
                    image: data_uri(&body.photo),
                },
                Err(e) => NetworkResponse::GenerateFailed {
                    id,
                    message: format!("Malformed response: {e}"),
                },
            }
        }
        Err(e) => {
            let message = if e.is_timeout() {
                String::from("Generation request timed out")
            } else if e.is_connect() {
                format!("Connection failed: {e}")
            } else {
                format!("Request failed: {e}")
            };
            NetworkResponse::GenerateFailed { id, message }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_a_prompt_object() {
        let body = serde_json::to_string(&GenerateRequest {
            prompt: "blue dragon logo",
        })
        .unwrap();
        assert_eq!(body, r#"{"prompt":"blue dragon logo"}"#);
    }

    #[test]
    fn response_body_parses_photo_field() {
        let body: GenerateResponse = serde_json::from_str(r#"{"photo":"QUJD"}"#).unwrap();
        assert_eq!(body.photo, "QUJD");
    }

    #[test]
    fn data_uri_wraps_the_payload() {
        assert_eq!(data_uri("QUJD"), "data:image/png;base64,QUJD");
    }

    /// Serve one canned response and hand back the endpoint URL
    fn mock_server(response: tiny_http::Response<std::io::Cursor<Vec<u8>>>) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let _ = request.respond(response);
            }
        });
        format!("http://{addr}/api/v1/dalle")
    }

    #[tokio::test]
    async fn generation_round_trip_against_mock_server() {
        let url = mock_server(tiny_http::Response::from_string(r#"{"photo":"QUJD"}"#));
        let client = create_client();

        let resp = execute_generate(&client, &url, 7, "logo", "blue dragon logo").await;
        assert_eq!(
            resp,
            NetworkResponse::Generated {
                id: 7,
                decal_type: "logo",
                image: String::from("data:image/png;base64,QUJD"),
            }
        );
    }

    #[tokio::test]
    async fn non_2xx_is_a_generation_failure() {
        let url = mock_server(tiny_http::Response::from_string("boom").with_status_code(500));
        let client = create_client();

        let resp = execute_generate(&client, &url, 1, "logo", "a fox").await;
        match resp {
            NetworkResponse::GenerateFailed { id, message } => {
                assert_eq!(id, 1);
                assert!(message.contains("HTTP 500"), "got: {message}");
            }
            other => panic!("expected GenerateFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_generation_failure() {
        let url = mock_server(tiny_http::Response::from_string("not json"));
        let client = create_client();

        let resp = execute_generate(&client, &url, 2, "full", "a fox").await;
        assert!(matches!(resp, NetworkResponse::GenerateFailed { id: 2, .. }));
    }

    #[tokio::test]
    async fn connection_failure_is_a_generation_failure() {
        // Bind then drop to get a port nothing is listening on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = create_client();

        let url = format!("http://127.0.0.1:{port}/api/v1/dalle");
        let resp = execute_generate(&client, &url, 3, "logo", "a fox").await;
        assert!(matches!(resp, NetworkResponse::GenerateFailed { id: 3, .. }));
    }
}
