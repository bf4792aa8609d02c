use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use eframe::egui::{self, Context, Vec2};

use crate::feed::{FeedSource, InterfaceRecord, load_records};

mod filter;
mod graph;
mod render_utils;
mod style;
mod ui;

use filter::{FilterError, FilterSelection};
use graph::{DragState, PositionTable};

type LoadResult = Result<Vec<InterfaceRecord>, String>;

pub struct LinkViewerApp {
    feed: FeedSource,
    refresh_every: Duration,
    state: AppState,
    refresh_rx: Option<Receiver<LoadResult>>,
    last_refresh: Instant,
}

enum AppState {
    Loading { rx: Receiver<LoadResult> },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    records: Vec<InterfaceRecord>,
    systems: Vec<String>,
    protocols: Vec<String>,
    pending: FilterSelection,
    applied: Option<FilterSelection>,
    filter_error: Option<FilterError>,
    filtered: Vec<InterfaceRecord>,
    layout: PositionTable,
    canvas: Vec2,
    drag: DragState,
    selected: Option<String>,
    hovered_record: Option<String>,
    graph_dirty: bool,
    painted_revision: u64,
}

impl LinkViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, feed_location: &str, refresh_minutes: u64) -> Self {
        let feed = FeedSource::parse(feed_location);
        let state = Self::start_load(feed.clone());

        Self {
            feed,
            refresh_every: Duration::from_secs(refresh_minutes.max(1) * 60),
            state,
            refresh_rx: None,
            last_refresh: Instant::now(),
        }
    }

    fn spawn_load(feed: FeedSource) -> Receiver<LoadResult> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_records(&feed).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(feed: FeedSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(feed),
        }
    }
}

impl eframe::App for LinkViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(records) => {
                            log::info!("records feed loaded: {} interfaces", records.len());
                            self.last_refresh = Instant::now();
                            AppState::Ready(Box::new(ViewModel::new(records)))
                        }
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading interface records...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load interface records");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.feed.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_refreshing = self.refresh_rx.is_some();
                model.show(ctx, &mut reload_requested, is_refreshing);

                // Fixed-cadence best-effort refresh; a manual reload rides
                // the same path. Never more than one fetch in flight.
                let refresh_due = self.last_refresh.elapsed() >= self.refresh_every;
                if (reload_requested || refresh_due) && self.refresh_rx.is_none() {
                    log::debug!("refreshing records feed from {}", self.feed.location());
                    self.refresh_rx = Some(Self::spawn_load(self.feed.clone()));
                }

                if let Some(rx) = self.refresh_rx.take() {
                    match rx.try_recv() {
                        Ok(Ok(records)) => {
                            log::info!("records feed refreshed: {} interfaces", records.len());
                            self.last_refresh = Instant::now();
                            model.replace_records(records);
                        }
                        Ok(Err(error)) => {
                            log::warn!("records feed refresh failed, keeping previous data: {error}");
                            self.last_refresh = Instant::now();
                        }
                        Err(TryRecvError::Empty) => {
                            self.refresh_rx = Some(rx);
                            ctx.request_repaint_after(Duration::from_millis(200));
                        }
                        Err(TryRecvError::Disconnected) => {
                            log::warn!("records feed worker disconnected before sending a result");
                            self.last_refresh = Instant::now();
                        }
                    }
                }

                // Keep the refresh timer firing while the UI is idle.
                let until_refresh = self
                    .refresh_every
                    .saturating_sub(self.last_refresh.elapsed())
                    .max(Duration::from_millis(250));
                ctx.request_repaint_after(until_refresh);
            }
        }

        if let Some(next_state) = transition {
            self.refresh_rx = None;
            self.state = next_state;
        }
    }
}
