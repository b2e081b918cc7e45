use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

use self::definition::*;
use self::distractors::*;
use self::phase::*;
use crate::output::{Message, QuizOutput};

pub mod definition;
pub mod distractors;
mod phase;

pub use self::phase::AnswerResult;


trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhaseKind {
    Question,
    Feedback,
    Done,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PhaseKind::Question => "question",
            PhaseKind::Feedback => "feedback",
            PhaseKind::Done => "done",
        };
        write!(f, "{}", name)
    }
}

enum Phase<O> {
    Question(QuestionState<O>),
    Feedback(FeedbackState<O>),
    Done(DoneState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Feedback(s) => s,
            Phase::Done(s) => s,
        }
    }

    fn get_kind(&self) -> PhaseKind {
        match self {
            Phase::Question(_) => PhaseKind::Question,
            Phase::Feedback(_) => PhaseKind::Feedback,
            Phase::Done(_) => PhaseKind::Done,
        }
    }
}

/// One playthrough of a quiz file.
///
/// Questions are drawn at random among the ones not answered correctly yet. A question
/// answered incorrectly stays in the draw until it is answered correctly.
pub struct Quiz<O, R> {
    questions: Vec<Question>,
    remaining_questions: BTreeSet<QuestionId>,
    selector: DistractorSelector,
    current_phase: Phase<O>,
    output: O,
    rng: R,
}

impl<O: QuizOutput + Clone, R: Rng> Quiz<O, R> {
    pub fn new(definition: QuizDefinition, selector: DistractorSelector, mut rng: R, output: O) -> Self {
        let questions = definition.into_questions();
        let remaining_questions: BTreeSet<QuestionId> = questions.iter().map(|q| q.id).collect();
        let mut current_phase =
            draw_phase(&questions, &remaining_questions, &selector, &mut rng, &output);
        debug!("Entering quiz phase: {}", current_phase.get_kind());
        current_phase.get_state().on_begin();
        Quiz {
            questions,
            remaining_questions,
            selector,
            current_phase,
            output,
            rng,
        }
    }

    pub fn get_phase(&self) -> PhaseKind {
        self.current_phase.get_kind()
    }

    #[cfg(test)]
    pub fn get_current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.get_question()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn get_choices(&self) -> Option<&Vec<String>> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.get_choices()),
            _ => None,
        }
    }

    pub fn get_remaining_count(&self) -> usize {
        self.remaining_questions.len()
    }

    #[cfg(test)]
    pub fn is_over(&self) -> bool {
        self.get_phase() == PhaseKind::Done
    }

    pub fn answer(&mut self, input: &str) -> Result<AnswerResult> {
        let result = match &mut self.current_phase {
            Phase::Question(state) => state.answer(input)?,
            _ => return Err(self.wrong_phase_error("answer a question")),
        };
        if result.is_correct {
            self.remaining_questions.remove(&result.question_id);
        }
        debug!(
            "Question {} answered {}",
            result.question_id,
            if result.is_correct { "correctly" } else { "incorrectly" }
        );
        let state = FeedbackState::new(result.clone(), self.output.clone());
        self.set_current_phase(Phase::Feedback(state));
        Ok(result)
    }

    pub fn next(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Feedback(_) => {
                self.begin_question();
                Ok(())
            }
            _ => Err(self.wrong_phase_error("move to the next question")),
        }
    }

    pub fn restart(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Done(_) => {
                self.remaining_questions = self.questions.iter().map(|q| q.id).collect();
                self.output.say(&Message::QuizRestarted);
                self.begin_question();
                Ok(())
            }
            _ => Err(self.wrong_phase_error("restart the quiz")),
        }
    }

    fn wrong_phase_error(&self, action: &str) -> anyhow::Error {
        anyhow!(
            "Cannot {} during the {} phase",
            action,
            self.current_phase.get_kind()
        )
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!("Entering quiz phase: {}", phase.get_kind());
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn begin_question(&mut self) {
        let phase = draw_phase(
            &self.questions,
            &self.remaining_questions,
            &self.selector,
            &mut self.rng,
            &self.output,
        );
        self.set_current_phase(phase);
    }
}

/// Picks a remaining question and its choices, or the end of the quiz when none remain.
fn draw_phase<O: QuizOutput + Clone, R: Rng>(
    questions: &[Question],
    remaining_questions: &BTreeSet<QuestionId>,
    selector: &DistractorSelector,
    rng: &mut R,
    output: &O,
) -> Phase<O> {
    let remaining: Vec<QuestionId> = remaining_questions.iter().copied().collect();
    let question = remaining
        .choose(rng)
        .and_then(|id| questions.iter().find(|q| q.id == *id));
    match question {
        Some(question) => {
            let distractors = select_distractors(question, questions, selector, rng);
            let state = QuestionState::new(question.clone(), distractors, rng, output.clone());
            Phase::Question(state)
        }
        None => Phase::Done(DoneState::new(output.clone())),
    }
}

fn select_distractors<R: Rng>(
    question: &Question,
    questions: &[Question],
    selector: &DistractorSelector,
    rng: &mut R,
) -> Vec<String> {
    match selector.select(&question.answer, question.id, questions, rng) {
        Ok(distractors) => distractors,
        Err(DistractorError::InsufficientCandidates {
            required,
            available,
        }) => {
            warn!(
                "Question {} only has {} wrong answers to choose from instead of {}, showing fewer choices",
                question.id, available, required
            );
            selector
                .with_count(available)
                .select(&question.answer, question.id, questions, rng)
                .expect("the pool holds exactly `available` distinct wrong answers")
        }
    }
}
