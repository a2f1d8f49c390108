//! Page components.
//!
//! DESIGN
//! ======
//! Each component is a linear pipeline run once per triggering event:
//! trigger, optional local validation, optional request, render or report.
//! The decision step is a pure function returning [`crate::dom::Render`]
//! instructions; the async handler only wires the request to it and applies
//! the result. No component keeps state between events.
//!
//! Failure classes:
//! - `login`, `detect`: failures become an alert.
//! - `logs`, `dashboard`, `live`: failures are logged only.
//! - `particles`: no network, nothing to fail.

pub mod dashboard;
pub mod detect;
pub mod live;
pub mod login;
pub mod logs;
pub mod particles;
