//! Integration tests for replay-plot

mod animation_test;
mod cli_test;
mod helpers;
mod loader_test;
