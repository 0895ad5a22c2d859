pub mod answers;
pub mod context;
pub mod multi_similarity;
pub mod prompts;
pub mod questions;
pub mod reasonableness;
pub mod similarity;


pub use context::{ExecutorContext, ExecutorOptions};
