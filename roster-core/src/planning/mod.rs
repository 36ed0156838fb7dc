//! Scheduling and assignment rule engines.
//!
//! Three pure engines the portal calls before persisting anything:
//!
//! - [`week_dates`]: expand a line's day mask into the concrete dates
//!   of the reference week (one "create service" call per date).
//! - [`check_window`]: validate a proposed service against its line's
//!   operating window, midnight crossings included.
//! - [`check_assignment`]: validate a driver/service assignment
//!   against the driver's other shifts.
//!
//! All of them are stateless functions over caller-supplied snapshots
//! and are safe to call concurrently.

mod assignment;
mod calendar;
mod config;
mod window;

pub use assignment::{AssignmentError, can_assign, check_assignment};
pub use calendar::{WeekDates, week_dates, week_monday};
pub use config::Rules;
pub use window::{WindowBound, WindowError, check_window};
