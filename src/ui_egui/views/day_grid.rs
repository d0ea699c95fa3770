//! Day-card grid: one collapsible card per logged day, newest first.

use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use crate::models::day_log::{DayLog, DayLogBook, ExpandedState};
use crate::ui_egui::theme::SnapshotTheme;

const SECTION_LABELS: [&str; 4] = [
    "Today's Plan",
    "Potential Problems",
    "Completed Today",
    "Unresolved Issues",
];

/// Render the grid. Returns the day identifier whose card header was
/// clicked this frame, if any; the caller applies the toggle.
pub fn render_day_grid(
    ui: &mut Ui,
    theme: &SnapshotTheme,
    book: &DayLogBook,
    expanded: &ExpandedState,
) -> Option<String> {
    let mut toggled = None;

    for log in book.newest_first() {
        let is_expanded = expanded.is_expanded(&log.day);
        if render_day_card(ui, theme, log, is_expanded) {
            toggled = Some(log.day.clone());
        }
        ui.add_space(10.0);
    }

    toggled
}

/// Returns true when the card header was clicked.
fn render_day_card(ui: &mut Ui, theme: &SnapshotTheme, log: &DayLog, is_expanded: bool) -> bool {
    let border = if is_expanded {
        theme.card_border_expanded
    } else {
        theme.card_border
    };

    let mut header_clicked = false;

    Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, border))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let header = ui.horizontal(|ui| {
                let badge = RichText::new(&log.day)
                    .strong()
                    .size(16.0)
                    .color(theme.text_primary);
                ui.label(badge);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let chevron = if is_expanded { "\u{2212}" } else { "+" };
                    let response = ui.add(
                        egui::Button::new(RichText::new(chevron).size(16.0).color(theme.accent))
                            .frame(false),
                    );
                    if response.clicked() {
                        header_clicked = true;
                    }
                });
            });

            // The whole header row toggles, not only the chevron.
            let header_response = ui.interact(
                header.response.rect,
                ui.id().with(("day-card-header", &log.day)),
                egui::Sense::click(),
            );
            if header_response.clicked() {
                header_clicked = true;
            }

            if is_expanded {
                ui.add_space(6.0);
                ui.separator();

                let sections = [&log.planned, &log.risks, &log.completed, &log.blockers];
                for (label, items) in SECTION_LABELS.into_iter().zip(sections) {
                    render_section(ui, theme, label, items);
                }
            }
        });

    header_clicked
}

fn render_section(ui: &mut Ui, theme: &SnapshotTheme, label: &str, items: &[String]) {
    ui.add_space(8.0);
    ui.label(
        RichText::new(label)
            .strong()
            .size(13.0)
            .color(theme.accent),
    );

    // An absent section renders as an empty list, never an error.
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("\u{2022}").color(theme.text_secondary));
            ui.label(RichText::new(item).color(theme.text_primary));
        });
    }
}
