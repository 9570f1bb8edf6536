// User profile: one row per owner, upserted on edit.

pub mod handlers;
pub mod store;
