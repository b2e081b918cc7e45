pub mod console;
#[cfg(test)]
pub mod mock;

pub use console::ConsoleOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerCorrect(String),
    AnswerIncorrect(String),
    InvalidAnswer(String, usize),
    QuestionBegins(String, Vec<String>),
    QuizComplete,
    QuizRestarted,
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
