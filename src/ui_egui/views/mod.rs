mod countdown_panel;
mod day_grid;
mod overlays;
mod work_hours;

pub use countdown_panel::render_countdown;
pub use day_grid::render_day_grid;
pub use overlays::{render_easter_egg, render_welcome_banner};
pub use work_hours::render_work_hours;
