//! Job search — model-generated listings for a free-text query.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use tracing::info;
use uuid::Uuid;

use crate::assistant::{Assistant, ReplyFields, StructuredReply};
use crate::errors::AppError;
use crate::jobs::links::resolve_link;
use crate::jobs::prompts::JOB_SEARCH_PROMPT;
use crate::llm_client::prompts::{fill_template, RESPOND_IN_JSON};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchRequest {
    pub query: String,
    pub user_id: Option<Uuid>,
}

/// One listing. Everything except `url` is optional: parsed listings keep only
/// the fields the model supplied with the right type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_reasons: Option<Vec<String>>,
    /// Always a usable link once `normalize_link` has run.
    #[serde(default, deserialize_with = "url_or_empty")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Anything but a string reads as no link; `resolve_link` fills it in later.
fn url_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) => url,
        _ => String::new(),
    })
}

impl JobListing {
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(object) = value else {
            return None;
        };
        let mut fields = ReplyFields::new(object);
        Some(Self {
            title: fields.take("title"),
            company: fields.take("company"),
            location: fields.take("location"),
            salary: fields.take("salary"),
            description: fields.take("description"),
            match_score: fields.take("matchScore"),
            match_reasons: fields.take_strings("matchReasons"),
            url: fields.take("url").unwrap_or_default(),
            extra: fields.into_rest(),
        })
    }

    fn canned(
        title: String,
        company: &str,
        location: &str,
        salary: &str,
        description: &str,
        match_score: u64,
        match_reasons: &[&str],
    ) -> Self {
        Self {
            title: Some(title),
            company: Some(company.to_string()),
            location: Some(location.to_string()),
            salary: Some(salary.to_string()),
            description: Some(description.to_string()),
            match_score: Some(Number::from(match_score)),
            match_reasons: Some(match_reasons.iter().map(|s| s.to_string()).collect()),
            url: String::new(),
            extra: Map::new(),
        }
    }

    pub fn normalize_link(&mut self) {
        self.url = resolve_link(
            Some(self.url.as_str()),
            self.title.as_deref(),
            self.location.as_deref(),
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSearchResults {
    pub jobs: Vec<JobListing>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobSearchResults {
    pub fn normalize_links(&mut self) {
        for job in &mut self.jobs {
            job.normalize_link();
        }
    }
}

impl StructuredReply for JobSearchResults {
    type Request = JobSearchRequest;

    const OPERATION: &'static str = "search_jobs";
    const FAILURE: &'static str = "Failed to search jobs";

    fn prompt(request: &JobSearchRequest) -> String {
        fill_template(
            JOB_SEARCH_PROMPT,
            &[
                ("query", request.query.as_str()),
                ("respond_in_json", RESPOND_IN_JSON),
            ],
        )
    }

    fn from_parsed(object: Map<String, Value>, request: &JobSearchRequest) -> Self {
        let mut fields = ReplyFields::new(object);
        let jobs = fields
            .take_items("jobs", JobListing::from_value)
            .unwrap_or_else(|| Self::when_malformed(request).jobs);
        JobSearchResults {
            jobs,
            extra: fields.into_rest(),
        }
    }

    fn when_malformed(request: &JobSearchRequest) -> Self {
        let title = if request.query.contains("Software") {
            "Software Engineer"
        } else {
            "Professional"
        };
        JobSearchResults {
            jobs: vec![JobListing::canned(
                title.to_string(),
                "TechCorp Inc.",
                "San Francisco, CA",
                "$80,000 - $120,000",
                "Join our team and work on exciting projects with cutting-edge technology.",
                75,
                &[
                    "Matches your search query",
                    "Good growth opportunities",
                    "Competitive salary",
                ],
            )],
            extra: Map::new(),
        }
    }

    fn when_missing(request: &JobSearchRequest, _reply: &str) -> Self {
        JobSearchResults {
            jobs: vec![JobListing::canned(
                format!("{} Position", request.query),
                "Growing Startup",
                "Remote",
                "$60,000 - $90,000",
                "Exciting opportunity to grow your career in a dynamic environment.",
                70,
                &["Relevant to your search", "Remote flexibility"],
            )],
            extra: Map::new(),
        }
    }
}

/// Searches for listings and guarantees every listing carries a usable link.
pub async fn search_jobs(
    assistant: &Assistant,
    request: &JobSearchRequest,
) -> Result<JobSearchResults, AppError> {
    let mut results = assistant.request::<JobSearchResults>(request).await?;
    results.normalize_links();

    match request.user_id {
        Some(user_id) => info!("Job search for user {user_id}: {} listings", results.jobs.len()),
        None => info!("Job search: {} listings", results.jobs.len()),
    }
    Ok(results)
}
