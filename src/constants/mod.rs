pub mod canned;
pub mod prompts;
