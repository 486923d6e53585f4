//! Recommend command - console questionnaire.

use std::io::{self, BufRead, Write};
use std::path::Path;

use vinoteca::{Dataset, Preferences};

const QUESTIONS: [&str; 3] = [
    "Do you prefer a red, white or rosé wine? ",
    "Do you prefer a dry, sweet or fruity wine? ",
    "Is it for a meal, an aperitif or a special occasion? ",
];

pub fn run(dataset_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(dataset_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    questionnaire(&dataset, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Ask the three questions on `output`, read answers from `input` and
/// print the first matching wine.
pub fn questionnaire<R: BufRead, W: Write>(
    dataset: &Dataset,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Welcome to the wine recommendation system!")?;
    writeln!(output, "Answer the following questions to find a wine you will enjoy.")?;

    let mut answers = Vec::with_capacity(QUESTIONS.len());
    for question in QUESTIONS {
        answers.push(ask(&mut input, &mut output, question)?);
    }

    let preferences = Preferences::from_answers(&answers[0], &answers[1], &answers[2]);
    match dataset.recommend(&preferences) {
        Some(wine) => writeln!(output, "\nWe recommend: {}", wine.title)?,
        None => writeln!(output, "\nSorry, we could not find a wine matching your preferences.")?,
    }

    Ok(())
}

/// A missing line (end of input) reads as an empty answer.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
