//! Backend record shapes and their conversion to domain types.
//!
//! The portal talks to a REST backend that serves plain JSON records
//! with French field names. [`records`] mirrors those shapes verbatim;
//! [`convert`] turns them into validated domain types, rejecting
//! malformed times, dates, statuses and calendar blobs at the boundary.

pub mod convert;
pub mod records;

pub use convert::{
    RecordError, driver_from_record, driver_shifts, line_from_record, service_from_record,
    shift_from_record,
};
pub use records::{CalendrierRecord, ConducteurRecord, LigneRecord, ServiceRecord};
