use std::error::Error as StdError;
use std::fmt;

use tracing::debug;

use crate::api::{GenerateQuery, GenerateResponse};
use crate::utils::url::construct_api_url;

/// Shown when a failure carries no description of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Ways a single `/generate` call can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The server answered with a non-2xx status code.
    Status(u16),

    /// The request could not be sent or the body could not be read.
    Transport(String),

    /// The body was not JSON or had no `output` string.
    Decode(String),
}

impl GenerateError {
    fn transport(err: impl fmt::Display) -> Self {
        GenerateError::Transport(err.to_string())
    }

    fn decode(err: impl fmt::Display) -> Self {
        GenerateError::Decode(err.to_string())
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Status(status) => write!(f, "API error: {status}"),
            GenerateError::Transport(message) | GenerateError::Decode(message) => {
                if message.trim().is_empty() {
                    f.write_str(GENERIC_ERROR_MESSAGE)
                } else {
                    f.write_str(message)
                }
            }
        }
    }
}

impl StdError for GenerateError {}

/// Issue one `GET {base_url}/generate` and return the `output` field.
///
/// No retries and no timeout beyond whatever the client was built with.
pub async fn fetch_generation(
    client: &reqwest::Client,
    base_url: &str,
    query: &GenerateQuery<'_>,
) -> Result<String, GenerateError> {
    let url = construct_api_url(base_url, "generate");
    debug!(
        url = %url,
        provider = query.provider,
        model = query.ai_model,
        "sending generate request"
    );

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(GenerateError::transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenerateError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(GenerateError::transport)?;
    let parsed: GenerateResponse = serde_json::from_str(&body).map_err(GenerateError::decode)?;
    Ok(parsed.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn hello_query() -> GenerateQuery<'static> {
        GenerateQuery {
            input: "Hello",
            provider: "openai",
            ai_model: "gpt-4",
        }
    }

    #[tokio::test]
    async fn returns_output_field_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/generate")
            .match_query(Matcher::Exact(
                "input=Hello&provider=openai&ai_model=gpt-4".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"output":"Hi there"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let output = fetch_generation(&client, &server.url(), &hello_query())
            .await
            .expect("generation should succeed");

        assert_eq!(output, "Hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn form_encodes_query_values() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/generate")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("input".into(), "what is 2+2? & why".into()),
                Matcher::UrlEncoded("provider".into(), "deepseek".into()),
                Matcher::UrlEncoded("ai_model".into(), "deepseek-r1:1.5b".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"output":"4","provider":"deepseek"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let query = GenerateQuery {
            input: "what is 2+2? & why",
            provider: "deepseek",
            ai_model: "deepseek-r1:1.5b",
        };
        let base = format!("{}/", server.url());
        let output = fetch_generation(&client, &base, &query)
            .await
            .expect("generation should succeed");

        assert_eq!(output, "4");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_reports_status_code() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/generate")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"output":"ignored"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fetch_generation(&client, &server.url(), &hello_query())
            .await
            .expect_err("500 must fail");

        assert_eq!(err, GenerateError::Status(500));
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[tokio::test]
    async fn missing_output_field_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/generate")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"result":"Hi there"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fetch_generation(&client, &server.url(), &hello_query())
            .await
            .expect_err("body without output must fail");

        assert!(matches!(err, GenerateError::Decode(_)));
        assert!(err.to_string().contains("missing field `output`"));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/generate")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fetch_generation(&client, &server.url(), &hello_query())
            .await
            .expect_err("html must fail");

        assert!(matches!(err, GenerateError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client = reqwest::Client::new();
        let err = fetch_generation(&client, &format!("http://{addr}"), &hello_query())
            .await
            .expect_err("closed port must fail");

        assert!(matches!(err, GenerateError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn empty_descriptions_fall_back_to_generic_message() {
        assert_eq!(
            GenerateError::Transport(String::new()).to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            GenerateError::Decode("  ".into()).to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            GenerateError::Transport("connection reset".into()).to_string(),
            "connection reset"
        );
    }
}
