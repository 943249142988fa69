//! Library exports for reuse in the binary and integration tests.
/// Backend request and response models plus the HTTP client.
pub mod api;
/// Application directory resolution.
pub mod app_dirs;
/// Settings file and environment overrides.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Editable student record and payload building.
pub mod form;
pub(crate) mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// The predict and explain call sequence.
pub mod predict_flow;
/// Static help text.
pub mod tooltips;
