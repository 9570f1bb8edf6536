pub mod career_path;
pub mod job_match;
pub mod profile;
pub mod resume;
