//! The read side the web client uses: one fixed query listing every director
//! with the names of their movies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DIRECTORS_QUERY: &str = r#"
    query directorsQuery {
        directors {
            id
            name
            age
            movies {
                id
                name
            }
        }
    }
"#;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectorSummary {
    pub id: String,
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub movies: Option<Vec<MovieSummary>>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned errors: {0}")]
    Graphql(String),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// Pull the director rows out of a `DIRECTORS_QUERY` response body.
///
/// Field errors alongside data are tolerated; a response with no data at all
/// is an error.
pub fn decode_directors(body: serde_json::Value) -> Result<Vec<DirectorSummary>, ClientError> {
    let envelope: Envelope = serde_json::from_value(body)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        tracing::warn!(errors = ?messages, "directors query returned errors");
    }

    let directors = envelope
        .data
        .and_then(|mut data| data.get_mut("directors").map(serde_json::Value::take))
        .filter(|d| !d.is_null());

    match directors {
        Some(directors) => Ok(serde_json::from_value(directors)?),
        None => Err(ClientError::Graphql(
            envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        )),
    }
}

/// Render directors as a plain-text table, one row per director.
pub fn render_table(directors: &[DirectorSummary]) -> String {
    let mut out = format!("{:<24} {:>4}  {}\n", "NAME", "AGE", "MOVIES");
    for director in directors {
        let movies = director
            .movies
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{:<24} {:>4}  {}\n",
            director.name, director.age, movies
        ));
    }
    out
}

pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn directors(&self) -> Result<Vec<DirectorSummary>, ClientError> {
        let body: serde_json::Value = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": DIRECTORS_QUERY }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        decode_directors(body)
    }
}
