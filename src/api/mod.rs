use serde::{Deserialize, Serialize};

pub mod generate;

pub use generate::{fetch_generation, GenerateError};

/// Query string of `GET /generate`. Field order is the order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateQuery<'a> {
    pub input: &'a str,
    pub provider: &'a str,
    pub ai_model: &'a str,
}

/// Successful `/generate` body. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub output: String,
}
