// File: src/core/tokenizer.rs
use crate::core::types::{ContentRecord, TokenSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "segmenter")]
use icu_segmenter::WordSegmenter;

/// Segments of this many code points or fewer are dropped by the primary strategy.
const MAX_NOISE_CHARS: usize = 2;

/// Thai text with no spaces. A working dictionary segmenter splits it into several words.
#[cfg(feature = "segmenter")]
const PROBE_SAMPLE: &str = "ความปลอดภัยของระบบ";

/// Maximal runs of Thai, ASCII letters and ASCII digits.
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ก-๙a-zA-Z0-9]+").expect("word-run pattern is valid"));

/// Which tokenizer to build. `Auto` probes for the segmenter and falls back silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Auto,
    Primary,
    Fallback,
}

/// Dictionary-based word segmentation, tuned for scripts without inter-word spacing.
#[cfg(feature = "segmenter")]
pub struct PrimarySegmenter {
    segmenter: WordSegmenter,
}

#[cfg(feature = "segmenter")]
impl PrimarySegmenter {
    pub fn new() -> Self {
        Self {
            segmenter: WordSegmenter::new_dictionary(),
        }
    }

    /// Keeps word-like segments longer than two code points, lowercased and deduplicated.
    pub fn tokenize(&self, text: &str) -> TokenSet {
        let text = text.to_lowercase();
        let mut words = TokenSet::new();
        let mut breaks = self.segmenter.segment_str(&text);
        let mut start = 0;
        while let Some(end) = breaks.next() {
            if end > start && breaks.is_word_like() {
                let segment = &text[start..end];
                // Code points, not bytes: a Thai character is three bytes.
                if segment.chars().count() > MAX_NOISE_CHARS {
                    words.insert(segment.to_string());
                }
            }
            start = end;
        }
        words
    }

    /// The capability probe: can this segmenter actually split unspaced Thai?
    fn is_usable(&self) -> bool {
        self.tokenize(PROBE_SAMPLE).len() > 1
    }
}

#[cfg(feature = "segmenter")]
impl Default for PrimarySegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Regex word runs. No length filter: trades precision for availability.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRegexSegmenter;

impl FallbackRegexSegmenter {
    pub fn tokenize(&self, text: &str) -> TokenSet {
        let text = text.to_lowercase();
        WORD_RUN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// The strategy chosen once at construction. Stateless afterwards, so it can be
/// shared across threads and requests.
pub enum Tokenizer {
    #[cfg(feature = "segmenter")]
    Primary(PrimarySegmenter),
    Fallback(FallbackRegexSegmenter),
}

impl Tokenizer {
    /// Probes for the primary segmenter, falling back to the regex strategy.
    pub fn detect() -> Self {
        Self::with_strategy(Strategy::Auto)
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Fallback => {
                debug!("tokenizer: regex fallback requested");
                Tokenizer::Fallback(FallbackRegexSegmenter)
            }
            Strategy::Auto | Strategy::Primary => Self::probe_primary(strategy),
        }
    }

    #[cfg(feature = "segmenter")]
    fn probe_primary(requested: Strategy) -> Self {
        let primary = PrimarySegmenter::new();
        if primary.is_usable() {
            debug!(?requested, "tokenizer: using dictionary word segmenter");
            Tokenizer::Primary(primary)
        } else {
            warn!(?requested, "tokenizer: segmenter failed probe, using regex fallback");
            Tokenizer::Fallback(FallbackRegexSegmenter)
        }
    }

    #[cfg(not(feature = "segmenter"))]
    fn probe_primary(requested: Strategy) -> Self {
        if requested == Strategy::Primary {
            warn!("tokenizer: built without `segmenter`, using regex fallback");
        } else {
            debug!("tokenizer: no segmenter compiled in, using regex fallback");
        }
        Tokenizer::Fallback(FallbackRegexSegmenter)
    }

    /// The strategy actually in use. Never `Auto`.
    pub fn strategy(&self) -> Strategy {
        match self {
            #[cfg(feature = "segmenter")]
            Tokenizer::Primary(_) => Strategy::Primary,
            Tokenizer::Fallback(_) => Strategy::Fallback,
        }
    }

    pub fn tokenize(&self, text: &str) -> TokenSet {
        match self {
            #[cfg(feature = "segmenter")]
            Tokenizer::Primary(p) => p.tokenize(text),
            Tokenizer::Fallback(f) => f.tokenize(text),
        }
    }

    pub fn tokenize_record(&self, record: &ContentRecord) -> TokenSet {
        self.tokenize(&record.extract_text())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> TokenSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn fallback_extracts_lowercased_runs_without_length_filter() {
        let tokens = FallbackRegexSegmenter.tokenize("ab cd efg");
        assert_eq!(tokens, set(&["ab", "cd", "efg"]));

        let tokens = FallbackRegexSegmenter.tokenize("Hello, WORLD! 42 hello");
        assert_eq!(tokens, set(&["hello", "world", "42"]));
    }

    #[test]
    fn fallback_keeps_unspaced_thai_as_one_run() {
        let tokens = FallbackRegexSegmenter.tokenize("การประเมินความปลอดภัยของระบบ");
        assert_eq!(tokens, set(&["การประเมินความปลอดภัยของระบบ"]));

        let tokens = FallbackRegexSegmenter.tokenize("การประเมิน ของ ระบบ, ระบบ");
        assert_eq!(tokens, set(&["การประเมิน", "ของ", "ระบบ"]));
    }

    #[test]
    fn fallback_handles_empty_and_punctuation_only_text() {
        assert!(FallbackRegexSegmenter.tokenize("").is_empty());
        assert!(FallbackRegexSegmenter.tokenize(" .,;!? -- ").is_empty());
    }

    #[test]
    fn forced_fallback_reports_its_strategy() {
        let tokenizer = Tokenizer::with_strategy(Strategy::Fallback);
        assert_eq!(tokenizer.strategy(), Strategy::Fallback);
        assert_eq!(tokenizer.tokenize("Example"), set(&["example"]));
    }

    #[test]
    fn detected_strategy_is_never_auto() {
        assert_ne!(Tokenizer::detect().strategy(), Strategy::Auto);
    }

    #[test]
    fn tokenize_is_deterministic() {
        let tokenizer = Tokenizer::detect();
        let text = "Access Control การควบคุมการเข้าถึงระบบ 2024";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[cfg(feature = "segmenter")]
    mod primary {
        use super::*;

        #[test]
        fn drops_short_segments_and_punctuation() {
            let tokens = PrimarySegmenter::new().tokenize("ab cd efg");
            assert_eq!(tokens, set(&["efg"]));

            let tokens = PrimarySegmenter::new().tokenize("Audit, audit; LOGS!");
            assert_eq!(tokens, set(&["audit", "logs"]));
        }

        #[test]
        fn is_case_insensitive() {
            let segmenter = PrimarySegmenter::new();
            assert_eq!(segmenter.tokenize("Example"), segmenter.tokenize("example"));
            assert_eq!(segmenter.tokenize("Example"), set(&["example"]));
        }

        #[test]
        fn counts_code_points_not_bytes() {
            let tokens = PrimarySegmenter::new().tokenize("การประเมินความปลอดภัยของระบบ");
            assert!(!tokens.is_empty());
            for token in &tokens {
                assert!(token.chars().count() > MAX_NOISE_CHARS, "{token}");
                assert!(!token.contains(' '));
            }
            // Segmented, not kept as one run.
            assert!(!tokens.contains("การประเมินความปลอดภัยของระบบ"));
        }

        #[test]
        fn passes_its_own_probe() {
            assert!(PrimarySegmenter::new().is_usable());
            assert_eq!(Tokenizer::detect().strategy(), Strategy::Primary);
        }

        #[test]
        fn probe_requires_an_actual_split() {
            // Without segmentation the sample is a single word, which must not pass.
            assert_eq!(FallbackRegexSegmenter.tokenize(PROBE_SAMPLE).len(), 1);
            assert!(PrimarySegmenter::new().tokenize(PROBE_SAMPLE).len() > 1);
        }
    }
}
