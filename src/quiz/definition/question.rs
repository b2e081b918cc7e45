use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_ANSWER_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

pub fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_ANSWER_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

/// Position of a question among the data rows of its quiz file.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QuestionId(pub usize);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub prompt: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new(id: QuestionId, raw_question: RawQuestion) -> Self {
        Question {
            id,
            prompt: raw_question.prompt.trim().to_owned(),
            answer: raw_question.answer.trim().to_owned(),
        }
    }
}
