#![allow(dead_code)]

pub mod backend;
pub mod env;

use fairpredict::egui_app::controller::EguiController;
use std::time::{Duration, Instant};

/// Drive background jobs until `done` holds or a few seconds pass.
pub fn pump_until(controller: &mut EguiController, done: impl Fn(&EguiController) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting on background jobs");
        std::thread::sleep(Duration::from_millis(5));
    }
}
