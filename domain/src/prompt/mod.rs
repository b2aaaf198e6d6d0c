//! Prompt domain
//!
//! Templates for the proposer and critic prompts.

mod template;

pub use template::PromptTemplate;
