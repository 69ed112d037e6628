//! AnswerSet - accumulated questionnaire answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::question::QuestionCatalog;

/// Mapping from question id to the selected option.
///
/// Keys are kept sorted so the serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the previous one for that question.
    pub fn record(&mut self, question_id: impl Into<String>, option: impl Into<String>) -> Option<String> {
        self.0.insert(question_id.into(), option.into())
    }

    /// Returns the selected option for a question, if answered.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every catalog question has an answer.
    pub fn is_complete_for(&self, catalog: &QuestionCatalog) -> bool {
        catalog.ids().all(|id| self.contains(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
