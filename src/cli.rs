use clap::Parser;
use std::path::PathBuf;

use crate::quiz::distractors::Strategy;

#[derive(Debug, Parser)]
#[command(name = "choice-quiz")]
#[command(about = "Multiple-choice quiz built from a CSV file of questions and answers")]
#[command(version)]
pub struct Cli {
    /// CSV file with a header row and one question per line
    #[arg(value_name = "QUIZ_FILE")]
    pub quiz_file: Option<PathBuf>,

    /// How wrong answers are picked
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Number of choices shown for each question, correct answer included
    #[arg(short, long, value_name = "N")]
    pub choices: Option<usize>,

    /// Largest distance between a numeric answer and the numbers offered next to it
    #[arg(long, value_name = "N")]
    pub numeric_window: Option<u64>,

    /// Number of similarly spelled answers to pick wrong answers from
    #[arg(long, value_name = "N")]
    pub shortlist: Option<usize>,

    /// Seed for a reproducible sequence of questions and choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Header of the column holding questions
    #[arg(long, value_name = "HEADER")]
    pub prompt_column: Option<String>,

    /// Header of the column holding answers
    #[arg(long, value_name = "HEADER")]
    pub answer_column: Option<String>,
}
