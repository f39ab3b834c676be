//! First-person grid viewer with learning NPCs.
//!
//! ```bash
//! cargo run --release -- [map.txt] [--brain ai_brain.json]
//! ```
//!
//! `W/S/↑/↓` move, `A/D` strafe, `←/→` turn, `M` minimap, `N` spawn NPC,
//! `F5`/`F6` side shading on/off, `Esc` quit.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use rand::Rng;

use tilecast::{
    brain::{BrainStore, SteeringBrain},
    engine::{RenderOpts, ViewFlags, render_frame},
    mapfile,
    renderer::Software,
    sim::{Heading, InputCmd, Position, TicRunner, pick_npc_spawn},
    world::Camera,
};

/// Chance per frame of persisting the brain mid-session.
const BRAIN_SAVE_CHANCE: f64 = 0.02;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map file (text grid); the built-in layout when omitted
    map: Option<PathBuf>,

    /// Brain weight file, loaded at startup and saved during play
    #[arg(long, value_name = "FILE", default_value = "ai_brain.json")]
    brain: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Field of view in degrees
    #[arg(long, default_value_t = 70.0)]
    fov: f32,

    /// Cast one ray per this many columns
    #[arg(long, default_value_t = 1)]
    stride: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let map = match &opts.map {
        Some(path) => {
            mapfile::load(path).with_context(|| format!("loading map {}", path.display()))?
        }
        None => mapfile::parse(mapfile::DEFAULT_MAP),
    };

    let store = BrainStore::new(&opts.brain);
    let mut brain = match store.load() {
        Ok(Some(weights)) => SteeringBrain::from_weights(weights),
        Ok(None) => SteeringBrain::new(),
        Err(e) => {
            eprintln!("brain load failed ({e}); starting fresh");
            SteeringBrain::new()
        }
    };

    let mut rng = rand::thread_rng();
    let mut sim = TicRunner::new();
    let player = sim.spawn_player(map.spawn, 0.0);
    if let Some(spot) = pick_npc_spawn(&map.grid, map.spawn, &mut rng) {
        sim.spawn_npc(spot);
    }

    let mut camera = Camera::new(map.spawn, 0.0, opts.fov.to_radians());
    let mut render_opts = RenderOpts {
        stride: opts.stride.max(1),
        ..Default::default()
    };

    let mut canvas = Software::default();
    let mut win = Window::new("tilecast", opts.width, opts.height, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* --------------- held keys → input axes -------------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if win.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn += 1.0;
        }

        /* --------------- edge-triggered toggles -------------------------- */
        if win.is_key_pressed(Key::M, KeyRepeat::No) {
            render_opts.flags.toggle(ViewFlags::MINIMAP);
        }
        if win.is_key_pressed(Key::F5, KeyRepeat::No) {
            render_opts.flags.insert(ViewFlags::SHADING);
        }
        if win.is_key_pressed(Key::F6, KeyRepeat::No) {
            render_opts.flags.remove(ViewFlags::SHADING);
        }
        if win.is_key_pressed(Key::N, KeyRepeat::No) {
            if let Some(spot) = pick_npc_spawn(&map.grid, camera.pos(), &mut rng) {
                sim.spawn_npc(spot);
            }
        }

        /* --------------- simulate ----------------------------------------- */
        sim.apply_input(player, cmd);
        sim.pump(&map.grid, &mut brain, player, &mut rng);

        if let Ok(mut q) = sim.world().query_one::<(&Position, &Heading)>(player) {
            if let Some((pos, heading)) = q.get() {
                camera.set_pose(pos.0, heading.0);
            }
        }

        /* --------------- draw --------------------------------------------- */
        render_frame(
            &mut canvas,
            &map.grid,
            &camera,
            sim.world(),
            opts.width,
            opts.height,
            &render_opts,
            |fb, w, h| {
                // ─────────── accumulate & report every ~3 s ────────────────
                acc_time += t0.elapsed();
                acc_frames += 1;
                win.update_with_buffer(fb, w, h).unwrap()
            },
        );

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }

        if rng.gen_range(0.0..1.0f64) < BRAIN_SAVE_CHANCE {
            if let Err(e) = store.save(brain.weights()) {
                eprintln!("brain save failed: {e}");
            }
        }
    }

    if let Err(e) = store.save(brain.weights()) {
        eprintln!("brain save failed: {e}");
    }
    Ok(())
}
