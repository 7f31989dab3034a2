//! The self-assessment engine: instrument catalogs, pure scorers and
//! classifiers, and the sequential session flow that ties them together.

pub mod catalog;
pub mod domain;
pub mod profiles;
pub mod scoring;
pub mod session;
