//! Service rostering core for a transit operations portal.
//!
//! Answers the three scheduling questions the portal's planning pages
//! ask before writing anything back to the backend: on which dates of a
//! week does a line run, does a proposed service fit its line's
//! operating window, and can a driver take a service without an
//! overlapping shift or too little rest.
//!
//! Everything here is a pure function over caller-supplied snapshots;
//! fetching and persisting records is the caller's job.

pub mod api;
pub mod domain;
pub mod planning;
