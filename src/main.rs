//! Command-line front end.
//!
//! Reads one command per line from stdin, turns it into a [`UiEvent`],
//! waits for the worker to finish whatever the command started, and prints
//! the current screen.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Main Thread           │
//! │  ┌──────────────────┐   │
//! │  │ Application      │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ mpsc         │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ ListingWorker    │   │  ← Catalogue reads and writes
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `login <username>`, `signup`, `logout`
//! - `menu`, `search`, `account`, `performers`, `events`
//! - `search name=<text> country=<code> type=<category>` on the performer listing
//! - `search name=<text> location=<text>` on the event listing
//! - `more`: Next page of the current listing
//! - `open <n>`: Detail for the n-th listed item
//! - `comment <rating> <text>`: Comment on the performer being shown
//! - `quit`

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use musiclist::app::{Application, AppState, Screen, UiEvent};
use musiclist::gateway::{DataGateway, JsonGateway, StoreHandle};
use musiclist::navigation::{NavigationTarget, TargetRouter};
use musiclist::worker::{ListingWorker, WorkerHandle};
use musiclist::{Config, Result, SessionStore};

/// How long to wait for a single worker response before giving up.
const WORKER_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "musiclist exited with an error");
            eprintln!("musiclist: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    musiclist::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.entered();

    tracing::info!(
        catalog = %config.catalog_path.display(),
        project_id = ?config.project_id,
        page_size = config.page_size,
        "configuration loaded"
    );

    let gateway: Arc<dyn DataGateway> = Arc::new(JsonGateway::open(config.catalog_path.clone())?);
    let session = Arc::new(SessionStore::with_store(StoreHandle::new(gateway)));
    let worker = WorkerHandle::spawn(ListingWorker::from_session(session.as_ref())?)?;

    let navigator = TargetRouter::new(|target: NavigationTarget| {
        tracing::info!(screen = target.screen_name(), "screen shown");
    });
    let mut app = Application::new(AppState::new(session, config.page_size), worker, navigator);
    drop(guard);

    app.start();
    show(&app)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line, app.state().screen) {
            Ok(None) => {}
            Ok(Some(event)) => {
                app.dispatch(&event)?;
                app.settle(WORKER_TIMEOUT)?;
                if !app.is_running() {
                    break;
                }
                show(&app)?;
            }
            Err(usage) => {
                println!("{usage}");
                prompt()?;
            }
        }
    }

    tracing::info!("musiclist stopped");
    Ok(())
}

fn show<N>(app: &Application<N>) -> Result<()>
where
    N: musiclist::Navigator,
{
    print!("\n{}", musiclist::ui::render(app.state()));
    prompt()
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Maps one input line to an event for the screen currently shown.
///
/// `Ok(None)` for a blank line, `Err(usage)` for anything unrecognised.
fn parse_command(line: &str, screen: Screen) -> std::result::Result<Option<UiEvent>, String> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let event = match command.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "login" => UiEvent::SignIn {
            username: rest.to_string(),
        },
        "signup" => UiEvent::ShowSignUp,
        "logout" => UiEvent::SignOut,
        "menu" => UiEvent::ShowMainMenu,
        "account" => UiEvent::ShowAccount,
        "performers" => UiEvent::ShowPerformers,
        "events" => UiEvent::ShowEvents,
        "quit" | "exit" => UiEvent::Quit,
        "search" => search_event(rest, screen),
        "more" => match screen {
            Screen::EventListing => UiEvent::LoadMoreEvents,
            Screen::PerformerListing => UiEvent::LoadMorePerformers,
            _ => return Err("`more` works on a listing screen.".to_string()),
        },
        "open" => {
            let position = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| "usage: open <n>  (n starts at 1)".to_string())?;
            match screen {
                Screen::EventListing => UiEvent::OpenEvent(position),
                Screen::PerformerListing => UiEvent::OpenPerformer(position),
                _ => return Err("`open` works on a listing screen.".to_string()),
            }
        }
        "comment" => {
            let (rating, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let rating = rating
                .parse::<u8>()
                .map_err(|_| "usage: comment <rating 0-10> <text>".to_string())?;
            UiEvent::SubmitComment {
                text: text.trim().to_string(),
                rating,
            }
        }
        other => return Err(format!("unknown command `{other}`")),
    };
    Ok(Some(event))
}

/// `search` with no arguments opens the chooser everywhere except on a listing.
///
/// Arguments are `key=value` pairs. Bare words join the name query.
fn search_event(args: &str, screen: Screen) -> UiEvent {
    let is_listing = matches!(screen, Screen::PerformerListing | Screen::EventListing);
    if args.is_empty() && !is_listing {
        return UiEvent::ShowSearchSelection;
    }

    let mut name = Vec::new();
    let mut secondary = String::new();
    let mut category = String::new();
    for token in args.split_whitespace() {
        match token.split_once('=') {
            Some(("name", value)) => name.push(value),
            Some(("country" | "location", value)) => secondary = value.to_string(),
            Some(("type" | "category", value)) => category = value.to_string(),
            _ => name.push(token),
        }
    }
    let name = name.join(" ");

    if screen == Screen::EventListing {
        UiEvent::SearchEvents {
            name,
            location: secondary,
        }
    } else {
        UiEvent::SearchPerformers {
            name,
            country: secondary,
            category,
        }
    }
}
