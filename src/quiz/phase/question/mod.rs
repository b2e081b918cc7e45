use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::{sanitize, Question, QuestionId};
use crate::quiz::State;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub question_id: QuestionId,
    pub answer: String,
    pub choice: String,
    pub is_correct: bool,
}

pub struct QuestionState<O> {
    question: Question,
    choices: Vec<String>,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new<R: Rng + ?Sized>(
        question: Question,
        distractors: Vec<String>,
        rng: &mut R,
        output: O,
    ) -> Self {
        let mut choices = distractors;
        choices.push(question.answer.clone());
        choices.shuffle(rng);
        QuestionState {
            question,
            choices,
            output,
        }
    }

    #[cfg(test)]
    pub fn get_question(&self) -> &Question {
        &self.question
    }

    #[cfg(test)]
    pub fn get_choices(&self) -> &Vec<String> {
        &self.choices
    }

    pub fn answer(&mut self, input: &str) -> Result<AnswerResult> {
        let index = match self.parse_choice(input) {
            Some(index) => index,
            None => {
                self.output.say(&Message::InvalidAnswer(
                    input.trim().to_owned(),
                    self.choices.len(),
                ));
                return Err(anyhow!("{:?} does not designate a choice", input));
            }
        };

        let choice = self.choices[index].clone();
        Ok(AnswerResult {
            question_id: self.question.id,
            answer: self.question.answer.clone(),
            is_correct: choice == self.question.answer,
            choice,
        })
    }

    /// Accepts either a choice number, or text matching exactly one choice.
    fn parse_choice(&self, input: &str) -> Option<usize> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            if number >= 1 && number <= self.choices.len() {
                return Some(number - 1);
            }
        }

        let sanitized_input = sanitize(input);
        if sanitized_input.is_empty() {
            return None;
        }
        let matches: Vec<usize> = self
            .choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| sanitize(choice) == sanitized_input)
            .map(|(index, _)| index)
            .collect();
        match matches.as_slice() {
            [index] => Some(*index),
            _ => None,
        }
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(
            self.question.prompt.clone(),
            self.choices.clone(),
        ));
    }

    fn on_end(&mut self) {}
}
