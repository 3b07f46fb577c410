pub mod api;
pub mod extra_slot;
pub mod preferences;
pub mod schedule;
pub mod time_slot;
