//! Career-path generation — a transition plan between two roles over a
//! fixed number of months.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::assistant::{Assistant, ReplyFields, StructuredReply};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, RESPOND_IN_JSON};

use super::prompts::CAREER_PATH_PROMPT;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathRequest {
    pub current_role: String,
    pub target_role: String,
    pub timeline_months: u32,
}

/// One step of a plan. Every field is optional because parsed milestones are
/// taken as-is; the fallback plans always fill all three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Milestone {
    fn planned(title: &str, description: &str, timeframe: String) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            timeframe: Some(timeframe),
            extra: Map::new(),
        }
    }

    /// Non-object items are dropped; mistyped fields inside an item are omitted.
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(object) = value else {
            return None;
        };
        let mut fields = ReplyFields::new(object);
        Some(Self {
            title: fields.take("title"),
            description: fields.take("description"),
            timeframe: fields.take("timeframe"),
            extra: fields.into_rest(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPlan {
    pub overview: String,
    pub skills: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub resources: String,
    pub challenges: Vec<String>,
    pub success_tips: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `Month a-b`, or `Month a` when the range does not extend past its start.
fn month_range(start: u32, end: u32) -> String {
    if end > start {
        format!("Month {start}-{end}")
    } else {
        format!("Month {start}")
    }
}

/// Three-phase plan split at `floor(timeline / 2)`.
pub fn milestone_plan(timeline_months: u32) -> Vec<Milestone> {
    let half = timeline_months / 2;
    vec![
        Milestone::planned(
            "Skill Assessment",
            "Evaluate current skills and identify gaps",
            month_range(1, 1),
        ),
        Milestone::planned(
            "Learning Phase",
            "Acquire new skills through courses and practice",
            month_range(2, half),
        ),
        Milestone::planned(
            "Application Phase",
            "Apply new skills in projects and seek opportunities",
            month_range(half + 1, timeline_months),
        ),
    ]
}

impl StructuredReply for CareerPlan {
    type Request = CareerPathRequest;

    const OPERATION: &'static str = "generate_career_path";
    const FAILURE: &'static str = "Failed to generate career path";

    fn prompt(request: &CareerPathRequest) -> String {
        let timeline = request.timeline_months.to_string();
        fill_template(
            CAREER_PATH_PROMPT,
            &[
                ("current_role", request.current_role.as_str()),
                ("target_role", request.target_role.as_str()),
                ("timeline_months", timeline.as_str()),
                ("respond_in_json", RESPOND_IN_JSON),
            ],
        )
    }

    fn from_parsed(object: Map<String, Value>, request: &CareerPathRequest) -> Self {
        let fallback = Self::when_malformed(request);
        let mut fields = ReplyFields::new(object);
        CareerPlan {
            overview: fields.take("overview").unwrap_or(fallback.overview),
            skills: fields.take_strings("skills").unwrap_or(fallback.skills),
            milestones: fields
                .take_items("milestones", Milestone::from_value)
                .unwrap_or(fallback.milestones),
            resources: fields.take("resources").unwrap_or(fallback.resources),
            challenges: fields.take_strings("challenges").unwrap_or(fallback.challenges),
            success_tips: fields.take_strings("successTips").unwrap_or(fallback.success_tips),
            extra: fields.into_rest(),
        }
    }

    fn when_malformed(request: &CareerPathRequest) -> Self {
        CareerPlan {
            overview: format!(
                "Transition from {} to {} requires strategic skill development and networking.",
                request.current_role, request.target_role
            ),
            skills: strings(&[
                "Leadership",
                "Technical expertise",
                "Communication",
                "Strategic thinking",
            ]),
            milestones: milestone_plan(request.timeline_months),
            resources: "Online courses, industry certifications, professional networking events, mentorship programs".to_string(),
            challenges: strings(&["Time management", "Skill gaps", "Market competition"]),
            success_tips: strings(&[
                "Stay consistent with learning",
                "Build a strong network",
                "Showcase your progress",
            ]),
            extra: Map::new(),
        }
    }

    fn when_missing(request: &CareerPathRequest, _reply: &str) -> Self {
        CareerPlan {
            overview: format!(
                "Transition from {} to {} over {} months.",
                request.current_role, request.target_role, request.timeline_months
            ),
            skills: strings(&["Adaptability", "Learning agility"]),
            milestones: milestone_plan(request.timeline_months),
            resources: "Professional development courses".to_string(),
            challenges: strings(&["Career transition complexity"]),
            success_tips: strings(&["Stay persistent"]),
            extra: Map::new(),
        }
    }
}

/// Generates a plan. A zero-month timeline is rejected before any upstream call.
pub async fn generate_career_path(
    assistant: &Assistant,
    request: &CareerPathRequest,
) -> Result<CareerPlan, AppError> {
    assistant.ensure_credential()?;
    if request.timeline_months == 0 {
        return Err(AppError::Validation(
            "timelineMonths must be a positive number of months".to_string(),
        ));
    }
    assistant.request::<CareerPlan>(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    fn request(current: &str, target: &str, months: u32) -> CareerPathRequest {
        CareerPathRequest {
            current_role: current.to_string(),
            target_role: target.to_string(),
            timeline_months: months,
        }
    }

    async fn generate(reply: &str, request: &CareerPathRequest) -> CareerPlan {
        let generator = Arc::new(ScriptedGenerator::replying(reply));
        let assistant = Assistant::new(generator, Some("key".to_string()));
        generate_career_path(&assistant, request).await.unwrap()
    }

    fn timeframes(plan: &CareerPlan) -> Vec<&str> {
        plan.milestones
            .iter()
            .map(|m| m.timeframe.as_deref().unwrap_or(""))
            .collect()
    }

    #[tokio::test]
    async fn test_prose_reply_junior_to_senior_over_a_year() {
        let req = request("Junior Developer", "Senior Engineer", 12);
        let plan = generate(
            "Becoming a senior engineer takes deliberate practice and mentorship.",
            &req,
        )
        .await;

        assert_eq!(timeframes(&plan), vec!["Month 1", "Month 2-6", "Month 7-12"]);
        assert!(plan.overview.contains("Junior Developer"));
        assert!(plan.overview.contains("Senior Engineer"));
        assert_eq!(plan.skills, vec!["Adaptability", "Learning agility"]);
        assert_eq!(plan.resources, "Professional development courses");
    }

    #[tokio::test]
    async fn test_prose_fallback_depends_only_on_input() {
        let req = request("Analyst", "Data Scientist", 9);
        let a = generate("First wording of the advice.", &req).await;
        let b = generate("Entirely different advice text.", &req).await;
        assert_eq!(a, b);
        assert_eq!(timeframes(&a), vec!["Month 1", "Month 2-4", "Month 5-9"]);
    }

    #[tokio::test]
    async fn test_malformed_reply_uses_rich_plan() {
        let req = request("Teacher", "UX Designer", 8);
        let plan = generate("{overview: 'unquoted keys'}", &req).await;

        assert_eq!(
            plan.overview,
            "Transition from Teacher to UX Designer requires strategic skill development and networking."
        );
        assert_eq!(plan.skills.len(), 4);
        assert_eq!(timeframes(&plan), vec!["Month 1", "Month 2-4", "Month 5-8"]);
        assert_eq!(plan.challenges, vec!["Time management", "Skill gaps", "Market competition"]);
    }

    #[tokio::test]
    async fn test_parsed_plan_passes_through_unchanged() {
        let body = json!({
            "overview": "  Keep the spacing.  ",
            "skills": ["System design", "Mentoring"],
            "milestones": [
                {"title": "Own a service", "description": "Lead on-call", "timeframe": "Month 1-3"},
                {"title": "Mentor", "description": "Two juniors"}
            ],
            "resources": "Designing Data-Intensive Applications",
            "challenges": ["Scope"],
            "successTips": ["Write design docs"],
            "confidence": 0.9
        });
        let reply = format!("Here is your plan:\n{body}\nGood luck!");
        let plan = generate(&reply, &request("Junior Developer", "Senior Engineer", 12)).await;

        assert_eq!(serde_json::to_value(&plan).unwrap(), body);
    }

    #[tokio::test]
    async fn test_missing_fields_filled_from_rich_plan() {
        let req = request("Nurse", "Health Informatics Specialist", 6);
        let plan = generate(r#"{"overview": "Lean on clinical knowledge.", "milestones": "soon"}"#, &req).await;
        let fallback = CareerPlan::when_malformed(&req);

        assert_eq!(plan.overview, "Lean on clinical knowledge.");
        assert_eq!(plan.skills, fallback.skills);
        assert_eq!(plan.milestones, fallback.milestones);
        assert_eq!(plan.success_tips, fallback.success_tips);
    }

    #[tokio::test]
    async fn test_non_object_milestones_are_dropped() {
        let req = request("A", "B", 4);
        let plan = generate(r#"{"milestones": ["step one", {"title": "Real", "timeframe": 3}]}"#, &req).await;

        assert_eq!(plan.milestones.len(), 1);
        assert_eq!(plan.milestones[0].title.as_deref(), Some("Real"));
        assert_eq!(plan.milestones[0].timeframe, None);
    }

    #[tokio::test]
    async fn test_zero_timeline_rejected_without_call() {
        let generator = Arc::new(ScriptedGenerator::replying("{}"));
        let assistant = Assistant::new(generator.clone(), Some("key".to_string()));

        let err = generate_career_path(&assistant, &request("A", "B", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let generator = Arc::new(ScriptedGenerator::replying("{}"));
        let assistant = Assistant::new(generator.clone(), None);

        let err = generate_career_path(&assistant, &request("A", "B", 12))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn test_milestone_plan_short_timelines() {
        let months = |n| {
            milestone_plan(n)
                .into_iter()
                .map(|m| m.timeframe.unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(months(1), vec!["Month 1", "Month 2", "Month 1"]);
        assert_eq!(months(3), vec!["Month 1", "Month 2", "Month 2-3"]);
        assert_eq!(months(4), vec!["Month 1", "Month 2", "Month 3-4"]);
        assert_eq!(months(24), vec!["Month 1", "Month 2-12", "Month 13-24"]);
    }

    #[test]
    fn test_prompt_interpolates_roles_once() {
        let prompt = CareerPlan::prompt(&request("{target_role}", "CTO", 18));
        assert!(prompt.contains(r#"from "{target_role}" to "CTO" within 18 months"#));
        assert!(prompt.contains(r#""successTips": ["tip1", "tip2"]"#));
    }
}
