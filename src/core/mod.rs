pub mod fallback;
pub mod keywords;
pub mod llm;
pub mod logging;
pub mod orchestrator;
pub mod parser;
pub mod photos;
pub mod prompts;
pub mod types;
