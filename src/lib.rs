// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;

pub use crate::config::RelatedConfig;
pub use crate::core::engine::RelatedEngine;
pub use crate::core::ranker::rank;
pub use crate::core::tokenizer::{Strategy, Tokenizer};
pub use crate::core::types::{ContentRecord, ScoredCandidate, TokenSet};
pub use crate::error::RelatedError;
