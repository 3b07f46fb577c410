//! # Availability Core
//!
//! Shared types for agent appointment availability: the weekly schedule
//! model, date-specific extra slots, the wire types exchanged with the
//! schedule API, time-of-day helpers and the error type.

pub mod errors;
pub mod models;
pub mod time;
