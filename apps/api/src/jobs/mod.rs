// Job search and saved job matches.
// Search results are model-generated; every listing link is normalized before
// it leaves this module.

pub mod handlers;
pub mod links;
pub mod prompts;
pub mod search;
pub mod status;
pub mod store;
