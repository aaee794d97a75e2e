//! Plain-text rendering of the current screen.
//!
//! ```text
//! AppState → view models → String
//! ```
//!
//! The binary prints the result after every state change. Each screen ends
//! with the commands available on it.

use crate::app::{AppState, Screen};
use crate::ui::viewmodel::{account_line, DetailViewModel, ListingViewModel};
use std::fmt::Write as _;

/// Renders the screen `state` is on.
///
/// ```
/// use musiclist::{AppState, SessionStore};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(SessionStore::new()), 10);
/// assert!(musiclist::ui::render(&state).starts_with("== Sign in =="));
/// ```
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    match state.screen {
        Screen::SignIn => menu(
            &mut out,
            "Sign in",
            &["login <username>", "signup", "quit"],
        ),
        Screen::SignUp => menu(
            &mut out,
            "Sign up",
            &["login <username>  (creates the account)", "menu", "quit"],
        ),
        Screen::MainMenu => menu(
            &mut out,
            "Main menu",
            &["search", "account", "logout", "quit"],
        ),
        Screen::SearchSelection => menu(
            &mut out,
            "What do you want to search?",
            &["performers", "events", "menu"],
        ),
        Screen::PerformerListing => {
            let vm = ListingViewModel::from_panel(
                state.performers.sink(),
                state.performers.is_in_flight(),
            );
            listing(&mut out, &vm, "search name=<text> country=<code> type=<Group|Person|Other|Any>");
        }
        Screen::EventListing => {
            let vm = ListingViewModel::from_panel(state.events.sink(), state.events.is_in_flight());
            listing(&mut out, &vm, "search name=<text> location=<text>");
        }
        Screen::PerformerDetail => match &state.performer_detail {
            Some(detail) => {
                detail_screen(&mut out, &DetailViewModel::performer(detail));
                footer(&mut out, &["comment <rating 0-10> <text>", "performers", "menu"]);
            }
            None => menu(&mut out, "Performer", &["performers", "menu"]),
        },
        Screen::EventDetail => match &state.event_detail {
            Some(event) => {
                detail_screen(&mut out, &DetailViewModel::event(event));
                footer(&mut out, &["events", "menu"]);
            }
            None => menu(&mut out, "Event", &["events", "menu"]),
        },
        Screen::Account => {
            heading(&mut out, "Account");
            let _ = writeln!(out, "{}", account_line(state));
            footer(&mut out, &["menu", "logout"]);
        }
    }

    if state.detail_pending || state.comment_pending {
        let _ = writeln!(out, "Loading…");
    }
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "! {notice}");
    }

    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "== {title} ==");
}

fn footer(out: &mut String, commands: &[&str]) {
    let _ = writeln!(out, "-- {}", commands.join(" | "));
}

fn menu(out: &mut String, title: &str, commands: &[&str]) {
    heading(out, title);
    footer(out, commands);
}

fn listing(out: &mut String, vm: &ListingViewModel, search_usage: &str) {
    heading(out, &vm.title);

    if let Some(message) = &vm.message {
        let _ = writeln!(out, "{message}");
    }
    for (index, item) in vm.items.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, item.title);
        for line in &item.meta {
            let _ = writeln!(out, "     {line}");
        }
    }
    if vm.loading {
        let _ = writeln!(out, "Loading…");
    }

    let more = if vm.button.enabled {
        format!("more ({})", vm.button.label)
    } else {
        format!("[{}]", vm.button.label)
    };
    footer(out, &[search_usage, &more, "open <n>", "menu"]);
}

fn detail_screen(out: &mut String, vm: &DetailViewModel) {
    heading(out, &vm.title);

    let width = vm.rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    for row in &vm.rows {
        let _ = writeln!(out, "{:<width$}  {}", row.label, row.value);
    }

    if !vm.recordings.is_empty() {
        let _ = writeln!(out, "\nTop songs");
        for song in &vm.recordings {
            let _ = writeln!(out, "  {song}");
        }
    }
    if !vm.comments.is_empty() {
        let _ = writeln!(out, "\nComments");
        for comment in &vm.comments {
            let _ = writeln!(out, "  {comment}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Performer, PerformerCategory};
    use crate::listing::RenderSink;
    use crate::session::SessionStore;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(SessionStore::new()), 10)
    }

    #[test]
    fn listing_numbers_items_from_one() {
        let mut state = state();
        state.screen = Screen::PerformerListing;
        state.performers.sink_mut().render(
            &[Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80)],
            true,
            false,
        );

        let text = render(&state);
        assert!(text.contains("  1. Blur"));
        assert!(text.contains("[No more results]"));
    }

    #[test]
    fn notice_is_appended() {
        let mut state = state();
        state.notice = Some("Please enter a username.".into());
        assert!(render(&state).ends_with("! Please enter a username.\n"));
    }

    #[test]
    fn signed_out_account_shows_placeholder() {
        let mut state = state();
        state.screen = Screen::Account;
        assert!(render(&state).contains("—"));
    }
}
