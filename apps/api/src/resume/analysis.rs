//! Résumé analysis — asks the model for a summary, skills and improvement
//! suggestions for a pasted résumé.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::assistant::{excerpt, Assistant, ReplyFields, StructuredReply};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, RESPOND_IN_JSON};
use crate::resume::prompts::RESUME_ANALYSIS_PROMPT;

/// Length of the reply excerpt used as a summary when the model returns prose.
const SUMMARY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub summary: String,
    pub skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub experience_years: Number,
    pub key_strengths: Vec<String>,
    /// 0–100, only when the model volunteers it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_score: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_improvement: Option<String>,
    /// Fields the model added beyond the requested shape.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl StructuredReply for ResumeAnalysis {
    type Request = AnalyzeResumeRequest;

    const OPERATION: &'static str = "analyze_resume";
    const FAILURE: &'static str = "Failed to analyze resume";

    fn prompt(request: &AnalyzeResumeRequest) -> String {
        fill_template(
            RESUME_ANALYSIS_PROMPT,
            &[
                ("content", request.content.as_str()),
                ("respond_in_json", RESPOND_IN_JSON),
            ],
        )
    }

    fn from_parsed(object: Map<String, Value>, request: &AnalyzeResumeRequest) -> Self {
        let fallback = Self::when_malformed(request);
        let mut fields = ReplyFields::new(object);
        ResumeAnalysis {
            summary: fields.take("summary").unwrap_or(fallback.summary),
            skills: fields.take_strings("skills").unwrap_or(fallback.skills),
            suggestions: fields.take_strings("suggestions").unwrap_or(fallback.suggestions),
            experience_years: fields
                .take("experienceYears")
                .unwrap_or(fallback.experience_years),
            key_strengths: fields.take_strings("keyStrengths").unwrap_or(fallback.key_strengths),
            resume_score: fields.take("resumeScore"),
            top_improvement: fields.take("topImprovement"),
            extra: fields.into_rest(),
        }
    }

    fn when_malformed(_: &AnalyzeResumeRequest) -> Self {
        ResumeAnalysis {
            summary: "Resume analysis completed".to_string(),
            skills: strings(&["Communication", "Problem-solving", "Leadership"]),
            suggestions: strings(&[
                "Add quantifiable achievements",
                "Include relevant keywords",
                "Improve formatting",
            ]),
            experience_years: Number::from(3),
            key_strengths: strings(&["Technical expertise", "Team collaboration"]),
            resume_score: None,
            top_improvement: None,
            extra: Map::new(),
        }
    }

    fn when_missing(_: &AnalyzeResumeRequest, reply: &str) -> Self {
        ResumeAnalysis {
            summary: excerpt(reply, SUMMARY_EXCERPT_CHARS),
            skills: strings(&["Communication", "Problem-solving"]),
            suggestions: strings(&["Add more details", "Improve structure"]),
            experience_years: Number::from(2),
            key_strengths: strings(&["Adaptability"]),
            resume_score: None,
            top_improvement: None,
            extra: Map::new(),
        }
    }
}

/// Analyzes résumé text. Blank content is rejected before any upstream call.
pub async fn analyze_resume(
    assistant: &Assistant,
    request: &AnalyzeResumeRequest,
) -> Result<ResumeAnalysis, AppError> {
    assistant.ensure_credential()?;
    if request.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume content cannot be empty".to_string(),
        ));
    }
    assistant.request::<ResumeAnalysis>(request).await
}
