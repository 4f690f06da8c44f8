//! Terminal front end: app state, drawing, and the key-driven event loop.

pub mod app;
pub mod controller;
pub mod ui;
