// Service module exports

pub mod countdown;
pub mod gesture;
pub mod settings;
pub mod storage;
pub mod visit;
