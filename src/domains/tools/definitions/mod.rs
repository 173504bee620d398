//! Tool definitions - one directory per tool.

pub mod bmi;
