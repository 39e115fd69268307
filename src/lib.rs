pub mod cli;
pub mod fetch;
pub mod llm;
pub mod paper;
pub mod pipeline;
pub mod storage;
