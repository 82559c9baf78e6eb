pub mod collect;
pub mod config;
pub mod find;
pub mod prompts;
