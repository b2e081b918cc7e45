use anyhow::{anyhow, Context, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod question;

pub use question::{sanitize, Question, QuestionId, RawQuestion};

#[cfg(test)]
mod tests;

const PROMPT_HEADER: &str = "prompt";
const ANSWER_HEADER: &str = "answer";
const PROMPT_ALIASES: [&str; 3] = [PROMPT_HEADER, "question", "問題"];
const ANSWER_ALIASES: [&str; 2] = [ANSWER_HEADER, "答え"];

/// Header names to read prompts and answers from, when the quiz file does not use the default ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Columns {
    pub prompt: Option<String>,
    pub answer: Option<String>,
}

impl Columns {
    /// Maps exactly one column to each question field. Other columns that would
    /// also deserialize into a field are renamed out of the way.
    fn rename(&self, headers: &StringRecord) -> StringRecord {
        let headers: Vec<&str> = headers
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim())
            .collect();
        let prompt_index = find_column(&headers, self.prompt.as_deref(), &PROMPT_ALIASES);
        let answer_index = find_column(&headers, self.answer.as_deref(), &ANSWER_ALIASES);

        headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                if Some(index) == prompt_index {
                    PROMPT_HEADER.to_owned()
                } else if Some(index) == answer_index {
                    ANSWER_HEADER.to_owned()
                } else if PROMPT_ALIASES.contains(header) || ANSWER_ALIASES.contains(header) {
                    format!("unused {}", header)
                } else {
                    header.to_string()
                }
            })
            .collect()
    }
}

fn find_column(headers: &[&str], configured: Option<&str>, aliases: &[&str]) -> Option<usize> {
    match configured {
        Some(name) => headers.iter().position(|header| *header == name),
        None => headers.iter().position(|header| aliases.contains(header)),
    }
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path, columns: &Columns) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file {}", source.display()))?;
        QuizDefinition::from_reader(file, columns)
            .with_context(|| format!("Could not read quiz file {}", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R, columns: &Columns) -> Result<QuizDefinition> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = columns.rename(csv_reader.headers()?);
        csv_reader.set_headers(headers);

        let mut questions = Vec::new();
        for (index, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                question.with_context(|| format!("Invalid question on data row {}", index + 1))?;
            questions.push(Question::new(QuestionId(index), raw_question));
        }

        if questions.is_empty() {
            return Err(anyhow!("Quiz file contains no questions"));
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
