// Module exports for models

pub mod day_log;
pub mod settings;
