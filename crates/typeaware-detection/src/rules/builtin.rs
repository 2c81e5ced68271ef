//! Built-in rule table. Merges the page-scanner table with the weighted
//! contextual table; each category carries a single weight.

use typeaware_core::Category;

/// Version tag reported by `RuleSet::builtin()`.
pub const BUILTIN_VERSION: &str = "builtin-1";

pub const HARASSMENT_WEIGHT: f64 = 0.9;
pub const HATE_WEIGHT: f64 = 0.85;
pub const THREATS_WEIGHT: f64 = 0.95;
pub const SPAM_WEIGHT: f64 = 0.6;
pub const PROFANITY_WEIGHT: f64 = 0.8;

/// A built-in rule, compiled lazily by `RuleSet::builtin()`.
pub struct BuiltinRule {
    pub category: Category,
    pub pattern: &'static str,
    pub weight: f64,
    pub word_boundary: bool,
}

macro_rules! rule {
    ($category:ident, $weight:expr, $pattern:expr) => {
        BuiltinRule {
            category: Category::$category,
            pattern: $pattern,
            weight: $weight,
            word_boundary: true,
        }
    };
    ($category:ident, $weight:expr, $pattern:expr, unbounded) => {
        BuiltinRule {
            category: Category::$category,
            pattern: $pattern,
            weight: $weight,
            word_boundary: false,
        }
    };
}

// ── Harassment ─────────────────────────────────────────────────────────────
static HARASSMENT: [BuiltinRule; 7] = [
    rule!(Harassment, HARASSMENT_WEIGHT, r"kill\s+yourself|kys|end\s+it"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"nobody\s+likes\s+you|everyone\s+hates\s+you"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"you\s+should\s+die|go\s+die"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"(?:worthless|pathetic|disgusting)\s+(?:piece\s+of\s+)?\w+"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"you\s+suck|you're\s+stupid|idiot|moron"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"shut\s+up|stfu"),
    rule!(Harassment, HARASSMENT_WEIGHT, r"loser|pathetic|worthless"),
];

// ── Hate ───────────────────────────────────────────────────────────────────
static HATE: [BuiltinRule; 6] = [
    rule!(Hate, HATE_WEIGHT, r"i\s+hate\s+you|hate\s+your\s+guts"),
    rule!(Hate, HATE_WEIGHT, r"(?:racist|homophobic|transphobic)\s+\w+"),
    rule!(Hate, HATE_WEIGHT, r"you\s+people|your\s+kind"),
    rule!(Hate, HATE_WEIGHT, r"racist|fascist|nazi"),
    rule!(Hate, HATE_WEIGHT, r"hate\s+you|i\s+hate"),
    rule!(Hate, HATE_WEIGHT, r"disgusting|gross|sick"),
];

// ── Spam ───────────────────────────────────────────────────────────────────
static SPAM: [BuiltinRule; 5] = [
    rule!(Spam, SPAM_WEIGHT, r"buy\s+now|limited\s+time|act\s+fast"),
    rule!(Spam, SPAM_WEIGHT, r"click\s+here|visit\s+our\s+site"),
    rule!(Spam, SPAM_WEIGHT, r"free\s+money|amazing\s+offer"),
    rule!(Spam, SPAM_WEIGHT, r"www\.|http|\.com"),
    rule!(Spam, SPAM_WEIGHT, r"\$\d+|\d+%\s+off|free\s+\$\d+", unbounded),
];

// ── Profanity ──────────────────────────────────────────────────────────────
static PROFANITY: [BuiltinRule; 2] = [
    rule!(Profanity, PROFANITY_WEIGHT, r"f[u*]ck|sh[i*]t|damn|hell"),
    rule!(Profanity, PROFANITY_WEIGHT, r"b[i*]tch|a[s*]{2}hole"),
];

// ── Threats ────────────────────────────────────────────────────────────────
static THREATS: [BuiltinRule; 6] = [
    rule!(Threats, THREATS_WEIGHT, r"i'll\s+find\s+you|gonna\s+get\s+you"),
    rule!(Threats, THREATS_WEIGHT, r"you're\s+dead|watch\s+your\s+back"),
    rule!(Threats, THREATS_WEIGHT, r"beat\s+you\s+up|kick\s+your\s+ass"),
    rule!(Threats, THREATS_WEIGHT, r"i'll\s+kill|gonna\s+hurt"),
    rule!(Threats, THREATS_WEIGHT, r"watch\s+out"),
    rule!(Threats, THREATS_WEIGHT, r"threat|violence|harm"),
];

/// Every built-in rule, grouped by category.
pub fn all_rules() -> impl Iterator<Item = &'static BuiltinRule> {
    HARASSMENT
        .iter()
        .chain(HATE.iter())
        .chain(SPAM.iter())
        .chain(PROFANITY.iter())
        .chain(THREATS.iter())
}
