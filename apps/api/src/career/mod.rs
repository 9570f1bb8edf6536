// Career transition plans: generation and storage.

pub mod handlers;
pub mod plan;
pub mod prompts;
pub mod store;
