//! Collections rendered as typed, index-annotated reports.
//!
//! [`kind`] classifies types, [`trace`] produces the type header, and
//! [`report`] lays out the elements.

pub mod kind;
pub mod report;
pub mod trace;

pub use kind::{Field, Inspect, TypeKind, classify, record_text};
pub use report::{MarkerColors, mapping, sequence, set};
pub use trace::{TypeDescriptor, trace_name};
