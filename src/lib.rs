#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod tui;
pub mod worker;
