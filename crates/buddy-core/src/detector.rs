use buddy_schema::normalize;

use crate::keywords::EMERGENCY_PHRASES;

/// Substring-based self-harm screen.
///
/// This is a best-effort safety net, not a clinical screen. Containment on
/// folded text has false positives: "từ từ" ("slowly") folds to "tu tu".
/// Erring toward the crisis route is accepted.
#[derive(Debug, Clone)]
pub struct EmergencyDetector {
    phrases: Vec<String>,
}

impl Default for EmergencyDetector {
    fn default() -> Self {
        Self::with_phrases(EMERGENCY_PHRASES.iter().copied())
    }
}

impl EmergencyDetector {
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.trim().is_empty())
            .collect();
        Self { phrases }
    }

    /// The first phrase found in `text`, if any.
    pub fn detect(&self, text: &str) -> Option<&str> {
        let folded = normalize(text);
        let hit = self
            .phrases
            .iter()
            .find(|phrase| folded.contains(phrase.as_str()))?;
        tracing::warn!(phrase = %hit, "crisis phrase detected");
        Some(hit.as_str())
    }

    pub fn is_emergency(&self, text: &str) -> bool {
        self.detect(text).is_some()
    }
}
