//! Progress reporting while a batch runs

pub mod reporter;
