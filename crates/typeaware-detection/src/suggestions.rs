//! Static rewrite suggestions per category.

use std::collections::BTreeSet;
use typeaware_core::constants::MAX_SUGGESTIONS;
use typeaware_core::Category;

const HARASSMENT: &[&str] = &[
    "I respectfully disagree with your perspective",
    "I see this differently and would like to discuss",
    "Perhaps we can find common ground on this topic",
];

const HATE: &[&str] = &[
    "I understand we have different viewpoints",
    "Let's focus on the issue rather than personal attacks",
    "I appreciate your passion, but let's keep this constructive",
];

const THREATS: &[&str] = &[
    "I'm really frustrated with this situation",
    "This is disappointing and concerning to me",
    "I strongly disagree with this approach",
];

const SPAM: &[&str] = &[
    "I'd like to share something relevant with you",
    "Here's an interesting resource on this topic",
    "You might find this information helpful",
];

const PROFANITY: &[&str] = &[
    "That's really frustrating",
    "This is quite annoying",
    "I'm disappointed by this",
];

const NEGATIVE: &[&str] = &[
    "I'm having trouble with this",
    "This situation is challenging for me",
    "I'm not satisfied with how this is going",
];

/// Alternative phrasings for one category. Aggressive has none.
pub fn for_category(category: Category) -> &'static [&'static str] {
    match category {
        Category::Harassment => HARASSMENT,
        Category::Hate => HATE,
        Category::Threats => THREATS,
        Category::Spam => SPAM,
        Category::Profanity => PROFANITY,
        Category::Negative => NEGATIVE,
        Category::Aggressive => &[],
    }
}

/// Concatenate suggestions in category order, drop repeats, keep at most
/// `limit`. The limit never exceeds `MAX_SUGGESTIONS`.
pub fn generate(categories: &BTreeSet<Category>, limit: usize) -> Vec<String> {
    let limit = limit.min(MAX_SUGGESTIONS);
    let mut out: Vec<String> = Vec::with_capacity(limit);
    for suggestion in categories.iter().flat_map(|c| for_category(*c)) {
        if out.len() == limit {
            break;
        }
        if !out.iter().any(|s| s == suggestion) {
            out.push((*suggestion).to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_categories_yield_nothing() {
        assert!(generate(&BTreeSet::new(), 3).is_empty());
    }

    #[test]
    fn first_category_fills_the_limit() {
        let categories: BTreeSet<Category> = [Category::Threats, Category::Harassment].into();
        let out = generate(&categories, 3);
        assert_eq!(out, HARASSMENT);
    }

    #[test]
    fn aggressive_alone_has_no_suggestions() {
        let categories: BTreeSet<Category> = [Category::Aggressive].into();
        assert!(generate(&categories, 3).is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let categories: BTreeSet<Category> = Category::ALL.into_iter().collect();
        assert_eq!(generate(&categories, 2).len(), 2);
        assert!(generate(&categories, 0).is_empty());
    }

    #[test]
    fn limit_is_clamped_to_the_cap() {
        let categories: BTreeSet<Category> = Category::ALL.into_iter().collect();
        assert_eq!(generate(&categories, 10).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn every_listed_category_has_two_or_three_entries() {
        for category in Category::ALL {
            let n = for_category(category).len();
            assert!(n == 0 || (2..=3).contains(&n), "{category}: {n}");
        }
    }
}
