//! Shared Dioxus components and D3.js bridge for the well depth chart.
//!
//! This crate provides:
//! - `js_bridge`: fetches the CSV and calls the D3 chart via `js_sys::eval`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
