//! # Availability Scheduler
//!
//! Editing logic for an agent's appointment availability.
//!
//! ## Architecture
//!
//! - **Scheduler**: [`AvailabilityScheduler`] owns the editable week, the
//!   last-saved snapshot and the ids queued for deletion
//! - **Validation**: checks run before every save
//! - **Changes**: dirty check against the snapshot
//! - **Payload**: flattens the week into the positional save request
//! - **Aggregate**: turns backend records into a week and date cards
//!
//! Remote calls go through [`availability_client::ScheduleApi`].

pub mod aggregate;
pub mod changes;
pub mod payload;
pub mod scheduler;
pub mod validation;

pub use scheduler::AvailabilityScheduler;
