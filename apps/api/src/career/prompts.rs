// Career-path generation prompt template.

pub const CAREER_PATH_PROMPT: &str = r#"
Create a detailed career transition plan from "{current_role}" to "{target_role}" within {timeline_months} months.

Provide a comprehensive roadmap including:
1. Overview of the transition strategy
2. Key skills to develop
3. Specific milestones with timeframes
4. Learning resources and recommendations
5. Potential challenges and how to overcome them

{respond_in_json}
{
  "overview": "Strategic overview of the career transition",
  "skills": ["skill1", "skill2", "skill3"],
  "milestones": [
    {
      "title": "Milestone title",
      "description": "What to achieve",
      "timeframe": "Month 1-2"
    }
  ],
  "resources": "Recommended learning resources and platforms",
  "challenges": ["challenge1", "challenge2"],
  "successTips": ["tip1", "tip2"]
}
"#;
