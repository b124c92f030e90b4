//! Interactive session: one action per input line.
//!
//! Failed actions are reported as error dialogs and the loop keeps going;
//! only end of input or `quit` ends the session.

use crate::error::Result;
use crate::{output, plot};
use hypotest::config::Settings;
use hypotest::data::LoadOptions;
use hypotest::report::{
    statistics_text, test_text, user_message, SAVED_CSV_MESSAGE, SAVED_TEXT_MESSAGE,
    STATISTICS_TITLE, TEST_TITLE,
};
use hypotest::session::Session;
use hypotest::HypotestError;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::debug;

const HELP: &str = "\
import <file>     load a two-column CSV file
alpha [value]     set the significance level (blank clears it)
run               run the Ansari-Bradley test
save-csv <file>   save the summary table
save-text <file>  save the summary as text
status            show the loaded file and alpha
help              show this list
quit              leave the session";

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    Import(Option<&'a Path>),
    Alpha(&'a str),
    Run,
    SaveCsv(Option<&'a Path>),
    SaveText(Option<&'a Path>),
    Status,
    Help,
    Quit,
    Nothing,
    Unknown(&'a str),
}

impl<'a> Action<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        let path = || (!rest.is_empty()).then(|| Path::new(rest));

        match command {
            "" => Action::Nothing,
            "import" | "open" => Action::Import(path()),
            "alpha" => Action::Alpha(rest),
            "run" | "test" => Action::Run,
            "save-csv" => Action::SaveCsv(path()),
            "save-text" | "save-txt" => Action::SaveText(path()),
            "status" => Action::Status,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => Action::Unknown(other),
        }
    }
}

/// Run the interactive session on stdin
pub(crate) fn run(settings: &Settings, options: LoadOptions) -> Result<()> {
    let mut session = Session::new(settings, options);
    let bins = settings.histogram_bins;

    output::info("Type `help` for the list of actions");
    output::prompt(">");
    for line in io::stdin().lock().lines() {
        let line = line?;
        let action = Action::parse(&line);
        debug!(?action, "session action");
        if action == Action::Quit {
            break;
        }
        if let Err(err) = apply(&mut session, action, bins) {
            report_error(&err);
        }
        output::prompt(">");
    }
    println!();
    Ok(())
}

fn apply(session: &mut Session, action: Action<'_>, bins: usize) -> hypotest::Result<()> {
    match action {
        Action::Import(path) => {
            let stats = session.import(path)?;
            output::dialog(STATISTICS_TITLE, &statistics_text(stats));
        }
        Action::Alpha(text) => {
            session.set_alpha(text);
            output::kv("Alpha", format!("{:?}", session.alpha()));
        }
        Action::Run => {
            let evaluation = session.run_test()?;
            output::dialog(TEST_TITLE, &test_text(&evaluation));
            if let Some(analysis) = session.analysis() {
                if let Err(err) = plot::print_overlay(analysis, bins) {
                    output::error(&err.to_string());
                }
            }
        }
        Action::SaveCsv(path) => {
            session.save_csv(path)?;
            output::dialog("Success", SAVED_CSV_MESSAGE);
        }
        Action::SaveText(path) => {
            session.save_text(path)?;
            output::dialog("Success", SAVED_TEXT_MESSAGE);
        }
        Action::Status => {
            let file = session
                .analysis()
                .and_then(|a| a.source())
                .map_or_else(|| "-".to_string(), |p| p.display().to_string());
            output::kv("File", file);
            output::kv("Alpha", format!("{:?}", session.alpha()));
        }
        Action::Help => println!("{HELP}"),
        Action::Unknown(command) => {
            return Err(HypotestError::OperationFailed(format!(
                "unknown action {command:?}, type `help`"
            )));
        }
        Action::Nothing | Action::Quit => {}
    }
    Ok(())
}

fn report_error(err: &HypotestError) {
    output::dialog("Error", &user_message(err));
}
