pub mod construct;
pub mod dump;
pub mod run_common;
pub mod shape_loader;
pub mod where_;

#[cfg(test)]
mod construct_tests;
