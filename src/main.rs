use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod output;
mod paths;
mod quiz;
mod settings;

use crate::cli::Cli;
use crate::output::ConsoleOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::{PhaseKind, Quiz};
use crate::settings::Settings;

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("choice_quiz=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    let quiz_path = match &cli.quiz_file {
        Some(path) => path.clone(),
        None => paths::default_quiz_path()?,
    };
    let definition = QuizDefinition::open(&quiz_path, &settings.columns)?;
    info!(
        "Loaded {} questions from {}",
        definition.get_questions().len(),
        quiz_path.display()
    );

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut quiz = Quiz::new(
        definition,
        settings.distractor_selector(),
        rng,
        ConsoleOutput::new(),
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from standard input")?;
        let input = line.trim();
        if QUIT_COMMANDS.contains(&input.to_lowercase().as_str()) {
            break;
        }

        let result = match quiz.get_phase() {
            PhaseKind::Question => quiz.answer(input).map(|_| {
                debug!("{} questions left", quiz.get_remaining_count());
            }),
            PhaseKind::Feedback => quiz.next(),
            PhaseKind::Done => quiz.restart(),
        };
        if let Err(e) = result {
            debug!("{:#}", e);
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
