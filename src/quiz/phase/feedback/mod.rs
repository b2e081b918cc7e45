use crate::output::{Message, QuizOutput};
use crate::quiz::phase::AnswerResult;
use crate::quiz::State;


pub struct FeedbackState<O> {
    result: AnswerResult,
    output: O,
}

impl<O> FeedbackState<O> {
    pub fn new(result: AnswerResult, output: O) -> Self {
        FeedbackState { result, output }
    }

    #[cfg(test)]
    pub fn get_result(&self) -> &AnswerResult {
        &self.result
    }
}

impl<O: QuizOutput> State for FeedbackState<O> {
    fn on_begin(&mut self) {
        let message = if self.result.is_correct {
            Message::AnswerCorrect(self.result.answer.clone())
        } else {
            Message::AnswerIncorrect(self.result.answer.clone())
        };
        self.output.say(&message);
    }

    fn on_end(&mut self) {}
}
