//! Source composition for [`super::SweepConfig`].

pub mod merge_policy;
pub mod service;
