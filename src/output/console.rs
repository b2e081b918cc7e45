use std::io::{self, Write};
use tracing::error;

use crate::output::{Message, QuizOutput};

/// Prints messages as plain text on standard output.
#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuestionBegins(prompt, choices) => {
                let mut text = format!("\nQuestion: {}", prompt);
                for (index, choice) in choices.iter().enumerate() {
                    text += &format!("\n{}. {}", index + 1, choice);
                }
                text += &format!("\nEnter a number (1-{}):", choices.len());
                text
            }
            AnswerCorrect(answer) => format!(
                "✅ Correct! {}\nPress Enter for the next question.",
                answer
            ),
            AnswerIncorrect(answer) => format!(
                "❌ Wrong! The answer was {}\nPress Enter for the next question.",
                answer
            ),
            InvalidAnswer(input, num_choices) => format!(
                "\"{}\" is not one of the choices, enter a number between 1 and {}.",
                input, num_choices
            ),
            QuizComplete => {
                "🎉 All questions answered!\nPress Enter to play again, or type q to quit.".into()
            }
            QuizRestarted => "Starting over with every question.".into(),
        }
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", text).and_then(|_| handle.flush()) {
            error!("Could not write to standard output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_choices_from_one() {
        let output = ConsoleOutput::new();
        let text = output.interpret_message(&Message::QuestionBegins(
            "Capital of France?".into(),
            vec!["Rome".into(), "Paris".into(), "Berlin".into(), "Madrid".into()],
        ));
        assert!(text.contains("Question: Capital of France?"));
        assert!(text.contains("\n1. Rome"));
        assert!(text.contains("\n2. Paris"));
        assert!(text.contains("\n4. Madrid"));
        assert!(text.contains("(1-4)"));
    }

    #[test]
    fn wrong_answer_reveals_correct_one() {
        let output = ConsoleOutput::new();
        let text = output.interpret_message(&Message::AnswerIncorrect("Paris".into()));
        assert!(text.contains("The answer was Paris"));
    }
}
