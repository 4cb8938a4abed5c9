use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::str::FromStr;

use carte_common::config::Config;
use carte_common::menu::{Course, ItemId};
use carte_common::success;
use carte_core::session::{Action, Screen, Session};
use carte_core::store::{MenuStore, StoreEvent, StoreObserver};
use tracing::{info, warn};

use crate::commands::{browse, review};
use crate::terminal::{print, screen};

const HELP: &[(&str, &str)] = &[
    ("t <id>", "select or deselect a dish"),
    ("c", "toggle the chef's menu"),
    ("n / p", "next / previous course"),
    ("f <course>", "jump to starter, main or dessert"),
    ("r / h", "patron menu / back to home"),
    ("x", "clear the selection"),
    ("q", "quit"),
];

/// A line typed by the user.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Do(Action),
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(command) = words.next() else {
            return Err("empty command, type '?' for help".to_string());
        };
        let argument: Option<&str> = words.next();

        let input = match (command.to_ascii_lowercase().as_str(), argument) {
            ("t" | "toggle", Some(id)) => Input::Do(Action::Toggle(id.into())),
            ("t" | "toggle", None) => return Err("toggle needs a dish id, e.g. 't 2'".to_string()),
            ("c" | "chef", None) => Input::Do(Action::ToggleChefsMenu),
            ("n" | "next", None) => Input::Do(Action::NextCourse),
            ("p" | "prev", None) => Input::Do(Action::PreviousCourse),
            ("f" | "focus", Some(course)) => {
                let course = course.parse::<Course>().map_err(|e| e.to_string())?;
                Input::Do(Action::FocusCourse(course))
            }
            ("f" | "focus", None) => return Err("focus needs a course, e.g. 'f main'".to_string()),
            ("r" | "review", None) => Input::Do(Action::Show(Screen::Review)),
            ("h" | "home", None) => Input::Do(Action::Show(Screen::Home)),
            ("x" | "clear", None) => Input::Do(Action::ClearSelection),
            ("?" | "help", None) => Input::Help,
            ("q" | "quit", None) => Input::Quit,
            _ => return Err(format!("unknown command '{}'", s.trim())),
        };

        Ok(input)
    }
}

/// Collects the selection changes made since the last redraw.
#[derive(Clone, Default)]
struct PendingChanges(Rc<RefCell<Vec<StoreEvent>>>);

impl PendingChanges {
    fn take(&self) -> Vec<StoreEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl StoreObserver for PendingChanges {
    fn on_event(&self, event: &StoreEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// What the user is told about one selection change.
#[derive(Debug, PartialEq, Eq)]
enum Feedback {
    Added(String),
    NotOnMenu(String),
    Removed(String),
    Cleared(usize),
}

impl Feedback {
    fn of(event: &StoreEvent, store: &MenuStore) -> Self {
        let name = |id: &ItemId| store.item(id.as_str()).map(|item| item.name.clone());

        match event {
            StoreEvent::Selected(id) => match name(id) {
                Some(name) => Feedback::Added(name),
                None => Feedback::NotOnMenu(id.to_string()),
            },
            StoreEvent::Deselected(id) => {
                Feedback::Removed(name(id).unwrap_or_else(|| id.to_string()))
            }
            StoreEvent::Cleared { count } => Feedback::Cleared(*count),
        }
    }

    fn message(&self) -> String {
        match self {
            Feedback::Added(name) => format!("Added {name}"),
            Feedback::NotOnMenu(id) => format!("Dish '{id}' is not on the menu"),
            Feedback::Removed(name) => format!("Removed {name}"),
            Feedback::Cleared(count) => {
                let unit = if *count == 1 { "dish" } else { "dishes" };
                format!("Cleared {count} {unit}")
            }
        }
    }

    fn report(&self) {
        let message = self.message();
        match self {
            Feedback::Added(_) => success!("{message}"),
            Feedback::NotOnMenu(_) => warn!("{message}"),
            Feedback::Removed(_) | Feedback::Cleared(_) => info!("{message}"),
        }
    }
}

pub fn session(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session = Session::default();
    run(stdin.lock(), &mut session, cfg)
}

/// Reads commands from `input` until it ends or the user quits.
pub fn run<R: BufRead>(input: R, session: &mut Session, cfg: &Config) -> anyhow::Result<()> {
    let pending = PendingChanges::default();
    session.subscribe(Box::new(pending.clone()));

    redraw(session, cfg)?;
    print_help();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Input>() {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => print_help(),
            Ok(Input::Do(action)) => {
                session.dispatch(action);
                redraw(session, cfg)?;
                for event in pending.take() {
                    Feedback::of(&event, session.store()).report();
                }
            }
            Err(e) => warn!("{e}"),
        }
    }

    print::end_of_program();
    Ok(())
}

fn redraw(session: &Session, cfg: &Config) -> anyhow::Result<()> {
    screen::clear()?;
    match session.screen() {
        Screen::Home => browse::render(&session.home(), cfg),
        Screen::Review => review::render(&session.review(), cfg),
    }
    Ok(())
}

fn print_help() {
    let key_width: usize = HELP.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, description) in HELP {
        print::aligned_line(key, description, key_width);
    }
}
