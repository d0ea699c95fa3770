//! Top-level dashboard application.
//!
//! Composes four independent siblings: the first-visit welcome banner, the
//! shift-click easter egg, the persistent countdown, and the day-card grid.
//! The frame loop drives the countdown controller and gesture detector with
//! the current instant once per repaint, and keeps a one-second repaint
//! cadence alive while either still has work to do.

use std::time::Duration;

use chrono::Utc;
use egui::{Event, Frame, Margin, PointerButton, RichText, ScrollArea};

use crate::models::day_log::{DayLogBook, ExpandedState, EMBEDDED_DAY_LOGS};
use crate::services::countdown::CountdownController;
use crate::services::gesture::ClickGestureDetector;
use crate::services::settings;
use crate::services::storage::FileStore;
use crate::services::visit;
use crate::ui_egui::theme::SnapshotTheme;
use crate::ui_egui::views;

const DASHBOARD_TITLE: &str = "Daily Sprint Snapshot";
const DASHBOARD_SUBTITLE: &str =
    "High-level outline of planned work, risks, progress, and blockers.";
const CONTENT_MARGIN: f32 = 18.0;

pub struct SnapshotApp {
    book: DayLogBook,
    expanded: ExpandedState,
    show_welcome: bool,
    countdown: CountdownController,
    gesture: ClickGestureDetector,
    theme: SnapshotTheme,
    // Held for its write-through side effects; reads happened at startup.
    _store: FileStore,
}

impl SnapshotApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let app_settings = settings::load();
        let mut store = FileStore::open_default();

        let book = DayLogBook::from_json(EMBEDDED_DAY_LOGS)?;
        log::info!("Loaded {} day log entries", book.len());
        let expanded = ExpandedState::for_book(&book);

        let now_ms = Utc::now().timestamp_millis();
        let show_welcome = visit::first_visit(&mut store);
        let countdown =
            CountdownController::activate(&mut store, now_ms, app_settings.countdown_duration_ms());
        let gesture = ClickGestureDetector::new(&app_settings.gesture);

        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Ok(Self {
            book,
            expanded,
            show_welcome,
            countdown,
            gesture,
            theme: SnapshotTheme::dark(),
            _store: store,
        })
    }

    /// Feed this frame's qualifying clicks (primary button + shift) into
    /// the gesture detector. Non-qualifying clicks are ignored entirely.
    fn handle_clicks(&mut self, ctx: &egui::Context, now_ms: i64) {
        let qualifying = ctx.input(|input| {
            input
                .events
                .iter()
                .filter(|event| {
                    matches!(
                        event,
                        Event::PointerButton {
                            button: PointerButton::Primary,
                            pressed: true,
                            modifiers,
                            ..
                        } if modifiers.shift
                    )
                })
                .count()
        });

        for _ in 0..qualifying {
            if self.gesture.record_click(now_ms) {
                log::info!("easter egg revealed");
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(DASHBOARD_TITLE)
                .strong()
                .size(26.0)
                .color(self.theme.text_primary),
        );
        ui.label(
            RichText::new(DASHBOARD_SUBTITLE)
                .size(13.0)
                .color(self.theme.text_secondary),
        );
    }
}

impl eframe::App for SnapshotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = Utc::now().timestamp_millis();

        self.handle_clicks(ctx, now_ms);
        self.countdown.tick(now_ms);
        self.gesture.tick(now_ms);

        egui::CentralPanel::default()
            .frame(
                Frame::default()
                    .fill(self.theme.app_background)
                    .inner_margin(Margin::same(CONTENT_MARGIN)),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        views::render_work_hours(ui, &self.theme);
                        ui.add_space(12.0);

                        if self.show_welcome
                            && views::render_welcome_banner(ui, &self.theme)
                        {
                            self.show_welcome = false;
                        }
                        if self.show_welcome {
                            ui.add_space(12.0);
                        }

                        self.render_header(ui);
                        ui.add_space(14.0);

                        if let Some(day) =
                            views::render_day_grid(ui, &self.theme, &self.book, &self.expanded)
                        {
                            self.expanded = self.expanded.toggled(&day);
                        }

                        ui.add_space(6.0);
                        views::render_countdown(ui, &self.theme, self.countdown.time_left());
                    });
            });

        if self.gesture.is_revealed() && views::render_easter_egg(ctx, &self.theme) {
            self.gesture.dismiss();
        }

        // Keep the one-second cadence alive while anything still ticks.
        if !self.countdown.is_finished() || self.gesture.hide_deadline().is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
