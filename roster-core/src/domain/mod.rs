//! Domain types for the rostering core.
//!
//! This module contains the validated domain model. Types enforce
//! their invariants at construction time, so code that receives them
//! can trust their validity; raw backend records live in [`crate::api`]
//! and are converted here through fallible constructors.

mod day_mask;
mod driver;
mod line;
mod service;
mod time;
mod window;

pub use day_mask::DayMask;
pub use driver::{Driver, DriverId, DriverStatus};
pub use line::{Line, LineId};
pub use service::{Service, ServiceId, ServiceStatus, Shift};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};
pub use window::OperatingWindow;
