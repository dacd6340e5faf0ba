use anyhow::{Context, Result};
use arcscroll_foundation::{OverscrollConfig, DEFAULT_SCREEN_HEIGHT, TAP_DISTANCE};
use arcscroll_haptics::{
    AppState, AppStateRegistry, EngineError, HapticEngine, HapticParameterId, HapticPattern,
};
use arcscroll_ui::{ArcScrollView, GateEvent, ScrollEvent, ScrollHandlers};
use web_time::Instant;

const FRAMES_PER_PULL: usize = 45;

/// Stand-in for the device engine: renders each pulse as a log line.
struct LoggingEngine {
    pulses: usize,
}

impl HapticEngine for LoggingEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        log::info!("engine start");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        log::info!("engine stop after {} pulses", self.pulses);
        Ok(())
    }

    fn play_pattern(&mut self, pattern: &HapticPattern) -> Result<(), EngineError> {
        for event in &pattern.events {
            let intensity = event.parameter(HapticParameterId::Intensity).unwrap_or(0.0);
            let sharpness = event.parameter(HapticParameterId::Sharpness).unwrap_or(0.0);
            let bar = "#".repeat((intensity * 40.0).round() as usize);
            log::info!(
                "{} {:<40} i={intensity:.3} s={sharpness:.3}",
                event.event_type,
                bar
            );
        }
        self.pulses += 1;
        Ok(())
    }
}

fn env_f32(name: &str) -> Result<Option<f32>> {
    match std::env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f32>()
                .with_context(|| format!("{name}={raw:?} is not a number"))?;
            Ok(Some(value))
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {name}")),
    }
}

fn load_config() -> Result<OverscrollConfig> {
    let screen_height = env_f32("ARCSCROLL_SCREEN_HEIGHT")?.unwrap_or(DEFAULT_SCREEN_HEIGHT);
    let tap_distance = env_f32("ARCSCROLL_TAP_DISTANCE")?.unwrap_or(TAP_DISTANCE);
    Ok(OverscrollConfig::for_screen_height(screen_height).with_tap_distance(tap_distance))
}

/// Content offsets for a pull to `depth` and a partial release, one per frame.
fn pull_curve(depth: f32) -> Vec<f32> {
    (0..=FRAMES_PER_PULL)
        .map(|frame| {
            let t = frame as f32 / FRAMES_PER_PULL as f32;
            // Pull out, overshoot a little, settle back to 80%.
            let shape = if t < 0.7 { t / 0.7 } else { 1.0 - (t - 0.7) * 0.66 };
            -(shape * depth)
        })
        .collect()
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = load_config()?;
    println!("=== ArcScroll pull-to-refresh haptics ===");
    println!(
        "tap distance {} px, refresh threshold {:.1} px",
        config.tap_distance, config.refresh_distance_threshold
    );
    println!();

    let app_state = AppStateRegistry::default();
    let handlers = ScrollHandlers::new()
        .on_scroll_begin_drag(|_| log::info!("drag began"))
        .on_scroll_end_drag(|event| {
            log::info!("drag ended at {:.1}", event.content_offset_y)
        });
    let mut view = ArcScrollView::mount(
        config,
        handlers,
        || Ok(Box::new(LoggingEngine { pulses: 0 }) as Box<dyn HapticEngine>),
        &app_state,
    )?;

    let started = Instant::now();
    let mut samples = 0usize;
    let mut fires = 0usize;
    let depth = config.refresh_distance_threshold * 1.2;
    for round in 1..=2 {
        println!("-- pull {round}");
        view.on_scroll_begin_drag(&ScrollEvent::at(0.0));
        let curve = pull_curve(depth);
        for &offset in &curve {
            samples += 1;
            if let Some(pulse) = view.on_scroll(&ScrollEvent::at(offset)) {
                if pulse.event == GateEvent::Fire {
                    fires += 1;
                    log::info!("refresh armed at {offset:.1}");
                }
            }
        }
        let release = curve.last().copied().unwrap_or(0.0);
        view.on_scroll_end_drag(&ScrollEvent::at(release));
        // Bounce back after release must stay silent.
        for step in (0..=4).rev() {
            samples += 1;
            view.on_scroll(&ScrollEvent::at(release * step as f32 / 4.0));
        }

        if round == 1 {
            println!("-- app backgrounded and resumed");
            app_state.dispatch(AppState::Inactive);
            app_state.dispatch(AppState::Background);
            app_state.dispatch(AppState::Active);
        }
    }

    println!("-- tap");
    view.controller()
        .engine()
        .play(&HapticPattern::transient(0.8, 0.6));

    view.unmount();
    println!();
    println!(
        "{samples} samples, {fires} refresh pulses, processed in {:?}",
        started.elapsed()
    );
    Ok(())
}
