//! Countdown readout: four zero-padded segments.

use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use crate::services::countdown::TimeLeftBreakdown;
use crate::ui_egui::theme::SnapshotTheme;

pub fn render_countdown(ui: &mut Ui, theme: &SnapshotTheme, time_left: TimeLeftBreakdown) {
    let segments = [
        (time_left.days, "Days"),
        (time_left.hours, "Hours"),
        (time_left.minutes, "Minutes"),
        (time_left.seconds, "Seconds"),
    ];

    Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Countdown")
                        .strong()
                        .size(13.0)
                        .color(theme.text_secondary),
                );
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    for (value, unit) in segments {
                        render_segment(ui, theme, value, unit);
                        ui.add_space(14.0);
                    }
                });
            });
        });
}

fn render_segment(ui: &mut Ui, theme: &SnapshotTheme, value: i64, unit: &str) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(format!("{value:02}"))
                .strong()
                .size(26.0)
                .color(theme.accent),
        );
        ui.label(RichText::new(unit).size(11.0).color(theme.text_secondary));
    });
}
