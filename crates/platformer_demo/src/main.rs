//! Headless platformer demo
//!
//! Builds a seeded level of stairs and a ramp, then drives the actor through
//! a scripted run and logs what the renderer would receive each second.
//!
//! Usage: `platformer_demo [config.toml|config.ron]`

use platformer_core::foundation::logging::{self, LevelFilter};
use platformer_core::foundation::math::constants::UNIT;
use platformer_core::prelude::*;
use platformer_core::world::ObstacleKind;
use rand::prelude::*;

const SEED: u64 = 0x5EED_0F_57A1;
const DT: f32 = 1.0 / 60.0;
const FRAMES: usize = 600;
const STAIR_COUNT: usize = 6;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(LevelFilter::Info);
    log::info!("Starting platformer demo");

    let config = load_config(std::env::args().nth(1));
    config.validate()?;

    let level = build_level(SEED);
    let world = World::from_level(&level)?;
    let mut sim = Simulation::new(config, world);

    for frame in 0..FRAMES {
        if frame == FRAMES / 2 {
            remove_highest_platform(&mut sim);
        }

        let output = sim.step(scripted_intent(frame), DT);

        if output.contacts.contains(ContactFlags::FELL_OUT) {
            log::warn!("Frame {}: fell out, respawned", frame);
        }
        if frame % 60 == 0 {
            report(frame, &sim, &output);
        }
    }

    log::info!(
        "Finished {} frames, actor at {:?}",
        sim.frame_count(),
        sim.actor().pos
    );
    Ok(())
}

/// Load a config file if one was given, falling back to defaults on any error
fn load_config(path: Option<String>) -> CoreConfig {
    let Some(path) = path else {
        return CoreConfig::default();
    };

    match CoreConfig::load_from_file(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Failed to load config from {}: {}, using defaults", path, e);
            CoreConfig::default()
        }
    }
}

/// Floor, a staircase rising along +X with random risers, and a ramp back down
fn build_level(seed: u64) -> LevelDef {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut platforms = vec![ObstacleDef {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: UNIT * 40.0,
        d: UNIT * 40.0,
        h: UNIT,
        color: Some([90, 90, 120]),
        kind: ObstacleKind::Box,
        axis: None,
        dir: None,
    }];

    let mut top = UNIT;
    for step in 0..STAIR_COUNT {
        let riser = rng.gen_range(UNIT * 0.3..UNIT * 0.8);
        platforms.push(ObstacleDef {
            x: UNIT * (4.0 + step as f32 * 2.0),
            y: rng.gen_range(-UNIT..UNIT),
            z: top,
            w: UNIT * 2.0,
            d: rng.gen_range(UNIT * 3.0..UNIT * 5.0),
            h: riser,
            color: Some([rng.gen(), rng.gen(), rng.gen()]),
            kind: ObstacleKind::Box,
            axis: None,
            dir: None,
        });
        top += riser;
    }

    // Floating ledge over the stairs, for platform shadows
    platforms.push(ObstacleDef {
        x: UNIT * 8.0,
        y: 0.0,
        z: top + UNIT * 3.0,
        w: UNIT * 4.0,
        d: UNIT * 3.0,
        h: UNIT * 0.5,
        color: None,
        kind: ObstacleKind::Box,
        axis: None,
        dir: None,
    });

    platforms.push(ObstacleDef {
        x: -UNIT * 6.0,
        y: UNIT * 4.0,
        z: UNIT,
        w: UNIT * 6.0,
        d: UNIT * 3.0,
        h: UNIT * 2.0,
        color: None,
        kind: ObstacleKind::Ramp,
        axis: Some(RampAxis::X),
        dir: Some(-1),
    });

    LevelDef { platforms }
}

/// Idle, walk and hop up the stairs, circle around, then run straight
fn scripted_intent(frame: usize) -> MovementIntent {
    match frame {
        0..=59 => MovementIntent::default(),
        60..=239 => MovementIntent {
            forward: 1.0,
            jump: frame % 40 < 12,
            ..Default::default()
        },
        240..=359 => MovementIntent {
            turn: 1.0,
            forward: 0.6,
            ..Default::default()
        },
        _ => MovementIntent {
            forward: 1.0,
            ..Default::default()
        },
    }
}

/// Editor-style deletion between frames; the highest box is the floating ledge
fn remove_highest_platform(sim: &mut Simulation) {
    let highest = sim
        .world()
        .iter()
        .filter(|(_, obstacle, _)| !obstacle.is_ramp())
        .max_by(|a, b| a.2.top_z.total_cmp(&b.2.top_z))
        .map(|(handle, _, _)| handle);

    if let Some(handle) = highest {
        sim.world_mut().remove(handle);
        log::info!("Removed obstacle {:?}", handle);
    }
}

fn report(frame: usize, sim: &Simulation, output: &FrameOutput) {
    let holes: usize = output.actor_shadows.iter().map(|s| s.holes.len()).sum();
    log::info!(
        "Frame {:>3}: actor {:?} contacts {:?}",
        frame,
        sim.actor().pos,
        output.contacts
    );
    log::info!(
        "           camera {:?} -> {:?}, {} occluders",
        output.camera.position,
        output.camera.target,
        output.occluders.len()
    );
    log::info!(
        "           {} shadow contours ({} holes), {} platform shadows",
        output.actor_shadows.len(),
        holes,
        output.platform_shadows.len()
    );
}
