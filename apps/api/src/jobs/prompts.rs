// Job search prompt template.

pub const JOB_SEARCH_PROMPT: &str = r#"
Generate 5 realistic job listings for the search query: "{query}"

For each job, provide:
1. Job title
2. Company name (make it realistic but fictional)
3. Location
4. Salary range
5. Job description (2-3 sentences)
6. Match score (percentage based on how well it matches the query)
7. Match reasons (why this job fits the search)

{respond_in_json}
{
  "jobs": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "location": "City, State/Country",
      "salary": "$X,XXX - $X,XXX",
      "description": "Job description here...",
      "matchScore": 85,
      "matchReasons": ["reason1", "reason2", "reason3"],
      "url": "https://example.com/job-link"
    }
  ]
}

Make the jobs diverse in terms of experience levels and company sizes.
"#;
