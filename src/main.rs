mod models;
mod utils;

use crate::models::{CourseId, Grade};
use crate::utils::report::render_sheet;
use crate::utils::session::FileSession;
use crate::utils::store::CourseStore;
use dotenv::dotenv;
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead};

#[derive(Debug, PartialEq)]
enum Command {
    Add,
    Set {
        id: u64,
        field: String,
        value: String,
    },
    List,
    Help,
    Quit,
}

// Parses one input line into a command, or None when the line is unrecognized.
// The value of a `set` is the remainder of the line, so names may contain spaces.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };

    match keyword {
        "add" => Some(Command::Add),
        "list" => Some(Command::List),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        "set" => {
            let (id_word, rest) = rest.split_once(char::is_whitespace)?;
            let (field, value) = match rest.trim_start().split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim_start()),
                None => (rest.trim_start(), ""),
            };
            let id = id_word.parse().ok()?;
            Some(Command::Set {
                id,
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        _ => None,
    }
}

fn print_help() {
    let grades: Vec<&str> = Grade::ALL.iter().map(|grade| grade.symbol()).collect();
    println!("Commands:");
    println!("  add                       add a course (1 credit hour, grade A)");
    println!("  set <id> name <text>      rename a course");
    println!("  set <id> credits <0-4>    set a course's credit hours");
    println!("  set <id> grade <symbol>   grade a course: {} (empty clears)", grades.join(", "));
    println!("  list                      show the sheet");
    println!("  quit                      exit");
}

fn main() {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    // Initializes logging with simplelog to the terminal with mixed output (both stdout and stderr) and automatic color support.
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).unwrap();

    let session = FileSession::from_env();

    // Restores the saved course sheet from the previous session, if one exists.
    let restored = match session.load() {
        Ok(Some(courses)) => {
            info!("Session restored from {}", session.path().display());
            Some(courses)
        }
        Ok(None) => None,
        Err(e) => {
            error!("Error restoring session, starting fresh: {}", e);
            None
        }
    };

    let mut store = match restored {
        Some(courses) => CourseStore::restore(courses),
        None => CourseStore::new(),
    };

    // Saves the sheet after every mutation; a failed save is logged and never blocks the edit.
    let saver = session.clone();
    store.subscribe(move |courses| {
        if let Err(e) = saver.save(courses) {
            warn!("Error saving session: {}", e);
        }
    });

    println!("{}\n", render_sheet(store.courses()));
    print_help();

    // Dispatches one command per input line; each edit mutates the store, saves the
    // session, and reprints the sheet with the recomputed GPA.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Add) => {
                let id = store.append();
                info!("Course {} added", id);
                println!("{}", render_sheet(store.courses()));
            }
            Some(Command::Set { id, field, value }) => {
                match store.update_field(CourseId(id), &field, &value) {
                    Ok(()) => println!("{}", render_sheet(store.courses())),
                    Err(e) => error!("Error updating course: {}", e),
                }
            }
            Some(Command::List) => println!("{}", render_sheet(store.courses())),
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => warn!("Unrecognized command, type `help` for usage"),
        }
    }
}
