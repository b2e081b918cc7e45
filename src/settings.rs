use anyhow::{anyhow, Result};

use crate::cli::Cli;
use crate::quiz::definition::Columns;
use crate::quiz::distractors::{DistractorSelector, Strategy};

#[derive(Debug)]
pub struct Settings {
    pub strategy: Strategy,
    pub num_choices: usize,
    pub numeric_window: u64,
    pub similarity_shortlist: usize,
    pub seed: Option<u64>,
    pub columns: Columns,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            strategy: Strategy::Hybrid,
            num_choices: 4,
            numeric_window: 5,
            similarity_shortlist: 10,
            seed: None,
            columns: Default::default(),
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(strategy) = cli.strategy {
            settings.strategy = strategy;
        }
        if let Some(num_choices) = cli.choices {
            if num_choices == 0 {
                return Err(anyhow!("Questions need at least one choice"));
            }
            settings.num_choices = num_choices;
        }
        if let Some(numeric_window) = cli.numeric_window {
            settings.numeric_window = numeric_window;
        }
        if let Some(shortlist) = cli.shortlist {
            settings.similarity_shortlist = shortlist;
        }
        settings.seed = cli.seed;
        settings.columns = Columns {
            prompt: cli.prompt_column.clone(),
            answer: cli.answer_column.clone(),
        };
        Ok(settings)
    }

    pub fn distractor_selector(&self) -> DistractorSelector {
        DistractorSelector::new(
            self.strategy,
            self.num_choices - 1,
            self.numeric_window,
            self.similarity_shortlist,
        )
    }
}
