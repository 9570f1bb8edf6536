//! Best-effort structured extraction over the generative API.
//!
//! Flow: credential check → prompt → one upstream call → scan reply for a JSON
//! object → typed record, or a deterministic fallback when the reply has no
//! usable object. Only a missing credential or an upstream failure becomes an
//! error; parse problems never do.
//!
//! Each feature describes its record by implementing `StructuredReply`.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;

pub mod extract;

pub use extract::{excerpt, extract_json_object, Extraction, ReplyFields};

pub const MISSING_CREDENTIAL: &str = "Gemini API key not configured";

/// A record that can be requested from the model and recovered from its reply.
///
/// The three constructors cover the three extraction outcomes. All of them
/// must be deterministic in their inputs.
pub trait StructuredReply: Sized {
    type Request;

    /// Operation name for logs.
    const OPERATION: &'static str;
    /// Message reported when the upstream call itself fails.
    const FAILURE: &'static str;

    fn prompt(request: &Self::Request) -> String;

    /// Builds the record from a parsed object. Well-typed fields pass through;
    /// absent or mistyped fields come from `when_malformed`.
    fn from_parsed(object: Map<String, Value>, request: &Self::Request) -> Self;

    /// Braces were found but nothing parsed.
    fn when_malformed(request: &Self::Request) -> Self;

    /// The reply had no JSON at all.
    fn when_missing(request: &Self::Request, reply: &str) -> Self;
}

/// Holds the injected credential and the transport.
#[derive(Clone)]
pub struct Assistant {
    generator: Arc<dyn TextGenerator>,
    api_key: Option<String>,
}

impl Assistant {
    pub fn new(generator: Arc<dyn TextGenerator>, api_key: Option<String>) -> Self {
        Self {
            generator,
            api_key: api_key.and_then(crate::config::non_blank),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fails with a configuration error, before any network traffic, when no
    /// credential was injected.
    pub fn ensure_credential(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration(MISSING_CREDENTIAL.to_string()))
    }

    /// Runs one extraction round for `T`.
    pub async fn request<T: StructuredReply>(&self, request: &T::Request) -> Result<T, AppError> {
        let api_key = self.ensure_credential()?;
        let prompt = T::prompt(request);

        let reply = self
            .generator
            .generate(api_key, &prompt)
            .await
            .map_err(|source| AppError::Upstream {
                context: T::FAILURE,
                source,
            })?;

        Ok(match extract_json_object(&reply) {
            Extraction::Found(object) => {
                info!("{}: parsed structured reply ({} fields)", T::OPERATION, object.len());
                T::from_parsed(object, request)
            }
            Extraction::Malformed => {
                warn!("{}: reply JSON did not parse, using fallback", T::OPERATION);
                T::when_malformed(request)
            }
            Extraction::Missing => {
                warn!("{}: reply contained no JSON, using fallback", T::OPERATION);
                T::when_missing(request, &reply)
            }
        })
    }
}
