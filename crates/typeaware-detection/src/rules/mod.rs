pub mod builtin;

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use typeaware_core::constants::MAX_RULE_REGEX_SIZE;
use typeaware_core::errors::{ConfigError, TypeAwareError, TypeAwareResult};
use typeaware_core::{Category, Confidence};

/// Serializable form of a rule, as it appears in a rule table file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub category: Category,
    pub pattern: String,
    pub weight: f64,
    /// Wrap the pattern in `\b(?: ... )\b`.
    #[serde(default = "default_word_boundary")]
    pub word_boundary: bool,
}

fn default_word_boundary() -> bool {
    true
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RuleTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default)]
    rules: Vec<RuleDefinition>,
}

/// A compiled, case-insensitive pattern and the confidence it contributes.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    source: String,
    word_boundary: bool,
    weight: Confidence,
}

impl Rule {
    /// Compile a rule. Patterns run on the linear-time `regex` engine with a
    /// bounded program size, so adversarial input cannot blow up a scan.
    pub fn new(
        category: Category,
        pattern: &str,
        weight: f64,
        word_boundary: bool,
    ) -> TypeAwareResult<Self> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(TypeAwareError::InvalidWeight {
                category: category.to_string(),
                weight,
            });
        }

        let wrapped = if word_boundary {
            format!(r"\b(?:{pattern})\b")
        } else {
            pattern.to_string()
        };

        let regex = RegexBuilder::new(&wrapped)
            .case_insensitive(true)
            .size_limit(MAX_RULE_REGEX_SIZE)
            .build()
            .map_err(|e| TypeAwareError::InvalidPattern {
                category: category.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            regex,
            source: pattern.to_string(),
            word_boundary,
            weight: Confidence::new(weight),
        })
    }

    /// Every non-overlapping match in `text`, left to right.
    pub fn find_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(text).map(|m| m.as_str())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn weight(&self) -> Confidence {
        self.weight
    }

    /// The pattern as written, before boundary wrapping.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn word_boundary(&self) -> bool {
        self.word_boundary
    }
}

/// Immutable table of category rules. Built once per engine and shared
/// read-only across every scan.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    version: Option<String>,
    rules: BTreeMap<Category, Vec<Rule>>,
}

impl RuleSet {
    /// A rule set with no rules. Only the heuristics will fire.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rule table the extension ships with.
    pub fn builtin() -> Self {
        let mut set = Self {
            version: Some(builtin::BUILTIN_VERSION.to_string()),
            rules: BTreeMap::new(),
        };
        for def in builtin::all_rules() {
            match Rule::new(def.category, def.pattern, def.weight, def.word_boundary) {
                Ok(rule) => set.rules.entry(def.category).or_default().push(rule),
                // Skipped rules simply never match.
                Err(e) => tracing::warn!(category = %def.category, error = %e, "skipping builtin rule"),
            }
        }
        set
    }

    /// Compile a list of definitions, failing on the first invalid one.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RuleDefinition>,
    ) -> TypeAwareResult<Self> {
        let mut rules: BTreeMap<Category, Vec<Rule>> = BTreeMap::new();
        for def in definitions {
            let rule = Rule::new(def.category, &def.pattern, def.weight, def.word_boundary)?;
            rules.entry(def.category).or_default().push(rule);
        }
        Ok(Self {
            version: None,
            rules,
        })
    }

    /// Load a rule table from TOML:
    ///
    /// ```toml
    /// version = "2024-06"
    ///
    /// [[rules]]
    /// category = "spam"
    /// pattern = 'buy\s+now'
    /// weight = 0.6
    /// ```
    pub fn from_toml(input: &str) -> TypeAwareResult<Self> {
        let table: RuleTable = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        let mut set = Self::from_definitions(table.rules)?;
        set.version = table.version;
        Ok(set)
    }

    /// Serialize back to the TOML table format.
    pub fn to_toml(&self) -> TypeAwareResult<String> {
        let table = RuleTable {
            version: self.version.clone(),
            rules: self.to_definitions(),
        };
        toml::to_string(&table).map_err(|e| {
            TypeAwareError::from(ConfigError::InvalidValue {
                field: "rules".to_string(),
                reason: e.to_string(),
            })
        })
    }

    pub fn to_definitions(&self) -> Vec<RuleDefinition> {
        self.iter()
            .map(|(category, rule)| RuleDefinition {
                category,
                pattern: rule.source.clone(),
                weight: rule.weight.value(),
                word_boundary: rule.word_boundary,
            })
            .collect()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Rules for one category, in table order.
    pub fn rules_for(&self, category: Category) -> &[Rule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (category, rule) pair, categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Rule)> {
        self.rules
            .iter()
            .flat_map(|(category, rules)| rules.iter().map(move |r| (*category, r)))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules.keys().copied()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}
