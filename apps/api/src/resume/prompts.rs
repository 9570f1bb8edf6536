// Résumé analysis prompt template.

pub const RESUME_ANALYSIS_PROMPT: &str = r#"
Analyze this resume and provide a comprehensive analysis with:
1. A brief summary of the candidate's profile
2. Extract all technical and soft skills mentioned
3. Suggest 5 specific improvements to make the resume more attractive to employers
4. Estimate years of experience based on the content

Resume content:
{content}

{respond_in_json}
{
  "summary": "Brief professional summary",
  "skills": ["skill1", "skill2", ...],
  "suggestions": ["improvement1", "improvement2", ...],
  "experienceYears": number,
  "keyStrengths": ["strength1", "strength2", ...]
}
"#;
