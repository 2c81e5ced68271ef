//! Lexicon-based sentiment: count positive and negative words among the
//! whitespace-separated tokens.

const POSITIVE_WORDS: [&str; 10] = [
    "good", "great", "awesome", "amazing", "wonderful", "excellent", "fantastic", "love", "like",
    "happy",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "bad", "terrible", "awful", "horrible", "disgusting", "hate", "stupid", "dumb", "ugly",
    "worst",
];

/// Sentiment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub positive: usize,
    pub negative: usize,
    pub total_tokens: usize,
    /// (positive - negative) / (positive + negative), 0 without sentiment words.
    pub score: f64,
    /// Share of tokens that carry sentiment.
    pub magnitude: f64,
}

impl Sentiment {
    /// Whether the text is predominantly and densely negative.
    pub fn is_negative(&self, score_threshold: f64, magnitude_threshold: f64) -> bool {
        self.score < score_threshold && self.magnitude > magnitude_threshold
    }
}

pub fn analyze(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let mut sentiment = Sentiment::default();

    for token in lowered.split_whitespace() {
        sentiment.total_tokens += 1;
        if POSITIVE_WORDS.contains(&token) {
            sentiment.positive += 1;
        }
        if NEGATIVE_WORDS.contains(&token) {
            sentiment.negative += 1;
        }
    }

    let hits = sentiment.positive + sentiment.negative;
    if hits > 0 {
        sentiment.score = (sentiment.positive as f64 - sentiment.negative as f64) / hits as f64;
    }
    if sentiment.total_tokens > 0 {
        sentiment.magnitude = hits as f64 / sentiment.total_tokens as f64;
    }
    sentiment
}
