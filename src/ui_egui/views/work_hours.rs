//! Static work-hours header card.

use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use crate::ui_egui::theme::SnapshotTheme;

struct WorkHoursSlot {
    label: &'static str,
    value: &'static str,
    detail: &'static str,
}

const START: WorkHoursSlot = WorkHoursSlot {
    label: "Start",
    value: "04:30",
    detail: "Task list updated at 08:00",
};

const END: WorkHoursSlot = WorkHoursSlot {
    label: "End",
    value: "22:00",
    detail: "End-of-day report updated at 19:00",
};

pub fn render_work_hours(ui: &mut Ui, theme: &SnapshotTheme) {
    Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                RichText::new("Work Hours")
                    .strong()
                    .size(13.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                render_slot(ui, theme, &START);
                ui.label(RichText::new("\u{2013}").size(18.0).color(theme.text_secondary));
                render_slot(ui, theme, &END);
            });
        });
}

fn render_slot(ui: &mut Ui, theme: &SnapshotTheme, slot: &WorkHoursSlot) {
    ui.vertical(|ui| {
        ui.label(RichText::new(slot.label).size(12.0).color(theme.text_secondary));
        ui.label(
            RichText::new(slot.value)
                .strong()
                .size(18.0)
                .color(theme.text_primary),
        );
        ui.label(RichText::new(slot.detail).size(11.0).color(theme.text_secondary));
    });
}
