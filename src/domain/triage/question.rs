//! Question catalog for the guided triage flow.

use serde::Serialize;

/// Identifier of the itch question.
pub const ITCH: &str = "itch";
/// Identifier of the duration question.
pub const DURATION: &str = "duration";
/// Identifier of the spread question.
pub const SPREAD: &str = "spread";
/// Identifier of the pain question.
pub const PAIN: &str = "pain";

/// A single questionnaire item with a closed set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Returns true if `option` is one of the allowed answers (exact match).
    pub fn allows(&self, option: &str) -> bool {
        self.options.iter().any(|allowed| *allowed == option)
    }
}

const STANDARD_QUESTIONS: &[Question] = &[
    Question {
        id: ITCH,
        prompt: "Is the affected area itchy?",
        options: &["Yes", "No"],
    },
    Question {
        id: DURATION,
        prompt: "How long have you had this condition?",
        options: &["< 3 days", "1 week", "More than 2 weeks"],
    },
    Question {
        id: SPREAD,
        prompt: "Is it spreading?",
        options: &["Yes", "No"],
    },
    Question {
        id: PAIN,
        prompt: "Is there pain or burning sensation?",
        options: &["Yes", "No"],
    },
];

static STANDARD: QuestionCatalog = QuestionCatalog::new(STANDARD_QUESTIONS);

/// Ordered, immutable list of questions.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: &'static [Question],
}

impl QuestionCatalog {
    /// Wraps a static question list.
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    /// The skin screening questionnaire shipped with the service.
    pub fn standard() -> &'static QuestionCatalog {
        &STANDARD
    }

    pub fn get(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        self.questions.iter()
    }

    /// Question ids in presentation order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.questions.iter().map(|q| q.id)
    }
}
