use anyhow::{Context, Result};
use directories_next::BaseDirs;
use std::path::PathBuf;

const DEFAULT_QUIZ_FILE_NAME: &str = "questions.csv";

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("choice-quiz");
    Ok(dir)
}

/// Quiz file used when none is given on the command line.
pub fn default_quiz_path() -> Result<PathBuf> {
    let mut path = get_data_dir()?;
    path.push(DEFAULT_QUIZ_FILE_NAME);
    Ok(path)
}
