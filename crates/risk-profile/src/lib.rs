//! Core engine for the sequential financial self-assessment service.
//!
//! The crate is split along the data flow: the static instrument
//! [`assessments::catalog`] feeds per-session response stores, which the pure
//! [`assessments::scoring`] functions fold into scores, which
//! [`assessments::profiles`] maps onto descriptive bands. The
//! [`assessments::session`] module sequences the three instruments, aggregates
//! the final report, and exposes the HTTP surface.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
