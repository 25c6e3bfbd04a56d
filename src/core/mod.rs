pub mod engine;
pub mod ranker;
pub mod tokenizer;
pub mod types;
