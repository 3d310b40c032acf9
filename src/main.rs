//! Blob Drift entry point
//!
//! Headless demo driver: runs a seeded scene at a fixed timestep, feeding it a
//! scripted spawn schedule so the full lifecycle (seed, growth, explosion,
//! reset) plays out, and logs every phase transition. Pass a numeric seed for
//! a reproducible run and `--dump` to print the final scene state as JSON.

use blob_drift::SimConfig;
use blob_drift::consts::SIM_DT;
use blob_drift::sim::{SceneState, tick};

fn main() {
    env_logger::init();

    let mut seed = 0x5eed;
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            dump = true;
        } else if let Ok(parsed) = arg.parse() {
            seed = parsed;
        }
    }

    let config = SimConfig::default();
    let mut scene = SceneState::new(config, seed);
    log::info!("blob-drift demo starting with seed {seed}");

    // 30 simulated seconds with one spawn request per second, enough to reach
    // the population limit and watch the scene explode and reseed
    let steps = (30.0 / SIM_DT) as u32;
    let mut last_phase = scene.phase;
    for step in 1..=steps {
        if step % 60 == 0 {
            let x = scene.config.arena.width * 0.5;
            let y = scene.config.arena.height * 0.5;
            scene.spawn(x, y);
        }
        tick(&mut scene, SIM_DT);
        if scene.phase != last_phase {
            log::info!(
                "t={:.2}s phase {:?} -> {:?} ({} blobs)",
                scene.time,
                last_phase,
                scene.phase,
                scene.blobs.len()
            );
            last_phase = scene.phase;
        }
    }

    println!(
        "simulated {:.1}s: {} blobs, phase {:?}",
        scene.time,
        scene.blobs.len(),
        scene.phase
    );
    for blob in &scene.blobs {
        println!(
            "  blob {}: center ({:.1}, {:.1}) radius [{:.1}, {:.1}] opacity {:.2} color {}",
            blob.id,
            blob.center.x,
            blob.center.y,
            blob.min_radius,
            blob.max_radius,
            blob.opacity,
            scene.config.palette[blob.color]
        );
    }

    if dump {
        match serde_json::to_string_pretty(&scene) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize scene: {err}"),
        }
    }
}
