#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the student outcome prediction window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use fairpredict::api::HttpPredictionApi;
use fairpredict::config;
use fairpredict::egui_app::controller::EguiController;
use fairpredict::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use fairpredict::logging;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let startup = config::load_or_default().map(|config| {
        let api = Arc::new(HttpPredictionApi::new(&config.api));
        let mut controller = EguiController::from_config(api, &config);
        controller.load_global_info();
        controller
    });

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([1280.0, 820.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fair Student Outcome Predictor",
        native_options,
        Box::new(move |_cc| match startup {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(err) => {
                tracing::error!(%err, "Failed to load configuration");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
