// Library target for integration tests under tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can reach the store and the counters as `keytally::activity::*`.
#![allow(dead_code)]

pub mod activity;
pub mod store;

// Private: required transitively by activity/store
mod app;
mod config;
mod event;
mod logging;
mod ui;
