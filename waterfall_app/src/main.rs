//! Waterfall diorama host
//!
//! Headless stand-in for the browser host: assembles the scene, then runs
//! the frame loop at display-refresh cadence until interrupted. Each tick
//! advances the three animation subsystems and "renders" by periodically
//! logging scene state.

mod setup;

use diorama_engine::prelude::*;
use std::time::{Duration, Instant};

/// Target frame duration (~60 Hz)
const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Frames between state log lines
const LOG_INTERVAL: u64 = 300;

struct WaterfallApp {
    driver: AnimationDriver,
    light_a: ObjectKey,
    bear_head: ObjectKey,
}

impl WaterfallApp {
    fn new(config: &DioramaConfig) -> Self {
        let diorama = setup::build_scene();
        let light_a = diorama.handles.light_a;
        let bear_head = diorama
            .handles
            .bear_head
            .expect("setup always provides the bear head");

        let driver = AnimationDriver::new(
            config,
            diorama.scene,
            diorama.handles,
            Box::new(SystemTimeSource::new()),
            Box::new(EntropySource::from_entropy()),
        );

        Self {
            driver,
            light_a,
            bear_head,
        }
    }

    fn run(&mut self) {
        self.driver.seed_foam();
        log::info!(
            "diorama running with {} seeded foam particles",
            self.driver.foam().live_count()
        );

        loop {
            let frame_start = Instant::now();

            self.driver.on_frame();

            if self.driver.frame_count() % LOG_INTERVAL == 0 {
                self.log_state();
            }

            // Yield the rest of the frame budget back to the host
            let spent = frame_start.elapsed();
            if spent < FRAME_BUDGET {
                std::thread::sleep(FRAME_BUDGET - spent);
            }
        }
    }

    fn log_state(&self) {
        let scene = self.driver.scene();
        let light_y = scene.get(self.light_a).map_or(0.0, |l| l.position.y);
        let tilt = scene.get(self.bear_head).map_or(0.0, |h| h.rotation.z);
        log::info!(
            "frame {}: {} foam particles, light-a y {:.2}, head tilt {:.1} deg",
            self.driver.frame_count(),
            self.driver.foam().live_count(),
            light_y,
            tilt.to_degrees()
        );
    }
}

fn main() {
    diorama_engine::foundation::logging::init_with_default("info");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "waterfall.toml".to_string());
    let config = DioramaConfig::load_or_default(&config_path);

    log::info!("starting waterfall diorama (config: {config_path})");
    WaterfallApp::new(&config).run();
}
