//! Numerical statistics used by the scoring and significance engine.
//!
//! Functions return `None` instead of dividing by zero or inventing a value when their input is
//! empty; callers decide how an undefined statistic is reported.

pub mod descriptive;
pub mod normal;
