use crate::config::RelatedConfig;
use crate::core::ranker::rank;
use crate::core::tokenizer::{Strategy, Tokenizer};
use crate::core::types::{ContentRecord, ScoredCandidate, TokenSet};
use tracing::debug;

/// The related-items engine: a tokenizer chosen once at construction plus settings.
/// Holds no per-request state, so one engine serves any number of requests.
pub struct RelatedEngine {
    tokenizer: Tokenizer,
    top_k: usize,
}

impl RelatedEngine {
    pub fn new(config: RelatedConfig) -> Self {
        let tokenizer = Tokenizer::with_strategy(config.strategy);
        debug!(strategy = ?tokenizer.strategy(), top_k = config.top_k, "related engine ready");
        Self {
            tokenizer,
            top_k: config.top_k,
        }
    }

    pub fn with_tokenizer(tokenizer: Tokenizer, top_k: usize) -> Self {
        Self { tokenizer, top_k }
    }

    pub fn strategy(&self) -> Strategy {
        self.tokenizer.strategy()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn tokenize(&self, text: &str) -> TokenSet {
        self.tokenizer.tokenize(text)
    }

    /// Top `top_k` records from `corpus` sharing the most words with `target`.
    pub fn related<'a>(
        &self,
        target: &ContentRecord,
        corpus: &'a [ContentRecord],
    ) -> Vec<ScoredCandidate<'a>> {
        self.related_top(target, corpus, self.top_k)
    }

    pub fn related_top<'a>(
        &self,
        target: &ContentRecord,
        corpus: &'a [ContentRecord],
        k: usize,
    ) -> Vec<ScoredCandidate<'a>> {
        let target_words = self.tokenizer.tokenize_record(target);
        rank(
            target.id(),
            &target_words,
            corpus,
            |candidate| self.tokenizer.tokenize_record(candidate),
            k,
        )
    }
}

impl Default for RelatedEngine {
    fn default() -> Self {
        Self::new(RelatedConfig::default())
    }
}
