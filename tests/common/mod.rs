//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use musiclist::domain::PerformerExtras;
use musiclist::gateway::{DataGateway, GatewayResult};
use musiclist::listing::RenderSink;
use musiclist::{Event, GatewayError, MusicListError, Navigator, Performer, PerformerCategory, PerformerDetail};

/// One gateway call as the fixture saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub name: String,
    pub secondary: String,
    pub limit: usize,
    pub offset: usize,
}

/// Gateway answering searches from queued responses and recording calls.
///
/// An exhausted queue answers with an empty page.
#[derive(Default)]
pub struct ScriptedGateway {
    performer_pages: Mutex<VecDeque<GatewayResult<Vec<Performer>>>>,
    event_pages: Mutex<VecDeque<GatewayResult<Vec<Event>>>>,
    calls: Mutex<Vec<SearchCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_performers(&self, page: GatewayResult<Vec<Performer>>) -> &Self {
        lock(&self.performer_pages).push_back(page);
        self
    }

    pub fn push_events(&self, page: GatewayResult<Vec<Event>>) -> &Self {
        lock(&self.event_pages).push_back(page);
        self
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        lock(&self.calls).clone()
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.calls().iter().map(|call| call.offset).collect()
    }

    fn record(&self, name: &str, secondary: &str, limit: usize, offset: usize) {
        lock(&self.calls).push(SearchCall {
            name: name.to_string(),
            secondary: secondary.to_string(),
            limit,
            offset,
        });
    }
}

impl DataGateway for ScriptedGateway {
    fn search_performers(
        &self,
        name: &str,
        country: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Performer>> {
        self.record(name, country, limit, offset);
        lock(&self.performer_pages).pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn search_events(
        &self,
        name: &str,
        location: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Event>> {
        self.record(name, location, limit, offset);
        lock(&self.event_pages).pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn read_performer_detail(&self, id: &str) -> GatewayResult<PerformerExtras> {
        Err(GatewayError::NotFound(id.to_string()))
    }

    fn write_comment(&self, _: &str, _: &str, _: &str, _: u8) -> GatewayResult<()> {
        Err(GatewayError::Remote("read-only fixture".to_string()))
    }
}

/// `count` performers named `<prefix>-<n>`, every third one a group.
pub fn performers(prefix: &str, count: usize) -> Vec<Performer> {
    (0..count)
        .map(|n| {
            let category = if n % 3 == 0 {
                PerformerCategory::Group
            } else {
                PerformerCategory::Person
            };
            Performer::new(format!("{prefix}-{n}"), format!("{prefix} {n}"), "GB", category, 50)
        })
        .collect()
}

pub fn event(id: &str, name: &str, venue: &str) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        category: "Concert".to_string(),
        performer_name: "Blur".to_string(),
        begin_date: "2024-06-01".to_string(),
        end_date: "2024-06-01".to_string(),
        time: Some("20:00".to_string()),
        venue_name: venue.to_string(),
        score: 70,
    }
}

/// Render sink counting every callback.
#[derive(Debug)]
pub struct RecordingSink<T> {
    pub items: Vec<T>,
    pub renders: Vec<(usize, bool, bool)>,
    pub no_results: usize,
    pub errors: Vec<String>,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            renders: Vec::new(),
            no_results: 0,
            errors: Vec::new(),
        }
    }
}

impl<T: Clone> RenderSink<T> for RecordingSink<T> {
    fn render(&mut self, items: &[T], is_first_page: bool, has_more: bool) {
        if is_first_page {
            self.items.clear();
        }
        self.items.extend_from_slice(items);
        self.renders.push((items.len(), is_first_page, has_more));
    }

    fn render_no_results(&mut self) {
        self.items.clear();
        self.no_results += 1;
    }

    fn render_error(&mut self, error: &MusicListError) {
        self.errors.push(error.to_string());
    }
}

/// Navigator remembering the screens it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub screens: Vec<String>,
    pub last_detail: Option<PerformerDetail>,
    pub last_account: Option<String>,
}

impl Navigator for RecordingNavigator {
    fn show_sign_in(&mut self) {
        self.screens.push("sign_in".into());
    }

    fn show_sign_up(&mut self) {
        self.screens.push("sign_up".into());
    }

    fn show_main_menu(&mut self) {
        self.screens.push("main_menu".into());
    }

    fn show_performer_listing(&mut self) {
        self.screens.push("performer_listing".into());
    }

    fn show_performer_detail(&mut self, detail: PerformerDetail) {
        self.screens.push("performer_detail".into());
        self.last_detail = Some(detail);
    }

    fn show_event_listing(&mut self) {
        self.screens.push("event_listing".into());
    }

    fn show_event_detail(&mut self, _event: Event) {
        self.screens.push("event_detail".into());
    }

    fn show_search_selection(&mut self) {
        self.screens.push("search_selection".into());
    }

    fn show_account(&mut self, username: &str) {
        self.screens.push("account".into());
        self.last_account = Some(username.to_string());
    }
}
