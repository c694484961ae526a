use buddy_schema::{normalize, Category};

use crate::keywords::CATEGORY_KEYWORDS;

/// Maps a message to at most one category.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Option<Category>;
}

/// Trigger substrings for one category, in folded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub category: Category,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCategory {
    pub category: Category,
    pub score: usize,
}

/// Scores every category by how many of its keywords occur in the message.
///
/// Entries are walked in table order and only a strictly greater score
/// replaces the current best, so ties go to the earlier entry.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    entries: Vec<KeywordEntry>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::with_table(
            CATEGORY_KEYWORDS
                .iter()
                .map(|(category, keywords)| KeywordEntry {
                    category: *category,
                    keywords: keywords.iter().map(|kw| kw.to_string()).collect(),
                }),
        )
    }
}

impl KeywordClassifier {
    pub fn with_table(entries: impl IntoIterator<Item = KeywordEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| KeywordEntry {
                category: entry.category,
                keywords: entry
                    .keywords
                    .iter()
                    .map(|kw| normalize(kw))
                    .filter(|kw| !kw.is_empty())
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Per-category scores in table order.
    pub fn scores(&self, text: &str) -> Vec<ScoredCategory> {
        let folded = normalize(text);
        self.entries
            .iter()
            .map(|entry| ScoredCategory {
                category: entry.category,
                score: entry
                    .keywords
                    .iter()
                    .filter(|kw| folded.contains(kw.as_str()))
                    .count(),
            })
            .collect()
    }

    pub fn best(&self, text: &str) -> Option<ScoredCategory> {
        let mut best: Option<ScoredCategory> = None;
        for scored in self.scores(text) {
            if scored.score == 0 {
                continue;
            }
            match best {
                Some(current) if scored.score <= current.score => {}
                _ => best = Some(scored),
            }
        }
        best
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Option<Category> {
        let best = self.best(text)?;
        tracing::debug!(category = %best.category, score = best.score, "message classified");
        Some(best.category)
    }
}
