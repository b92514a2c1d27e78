pub mod api_key_prompt;
pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod store;
pub mod structuring;
