use serde::Serialize;

/// One knowledge-base entry: several phrasings of a question, one answer.
///
/// The alias list is never empty and never contains empty strings; the
/// constructor enforces this. Whitespace-only aliases are kept. The answer
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    aliases: Vec<String>,
    answer: String,
}

impl Record {
    /// Build a record, dropping empty aliases.
    ///
    /// Returns `None` when no usable alias remains.
    pub fn new<I, S>(aliases: I, answer: impl Into<String>) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases
            .into_iter()
            .map(Into::into)
            .filter(|a: &String| !a.is_empty())
            .collect();
        if aliases.is_empty() {
            return None;
        }
        Some(Self {
            aliases,
            answer: answer.into(),
        })
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
