use crate::output::{Message, QuizOutput};
use crate::quiz::State;


#[derive(Debug)]
pub struct DoneState<O> {
    output: O,
}

impl<O> DoneState<O> {
    pub fn new(output: O) -> Self {
        DoneState { output }
    }
}

impl<O: QuizOutput> State for DoneState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizComplete);
    }

    fn on_end(&mut self) {}
}
