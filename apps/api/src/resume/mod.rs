// Résumé analysis, upload and storage.
// The analysis call goes through `assistant` like every other model call.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod store;
pub mod upload;
