// app/mod.rs
// Headless driving loop: the external scheduler the engine expects. Drains
// queued commands, steps the controller once per tick, publishes the snapshot,
// and logs population counts.

use std::sync::mpsc::channel;
use std::time::Duration;

use log::info;

use crate::body::Species;
use crate::commands::{process_command, SimCommand};
use crate::config::SimConfig;
use crate::controller::Controller;
use crate::init_config::ArenaConfig;
use crate::species::get_species_props;
use crate::state;

/// Frames between population log lines.
const LOG_INTERVAL: u64 = 60;
/// Safety cap for the headless run.
const MAX_FRAMES: u64 = 20_000;

pub fn run() {
    let config = match ArenaConfig::load_default() {
        Ok(file) => file.into_sim_config(),
        Err(e) => {
            info!("arena_config.toml not loaded ({}), using defaults", e);
            SimConfig::default()
        }
    };

    let (tx, rx) = channel();
    *state::SIM_COMMAND_SENDER.lock() = Some(tx);

    let tick = Duration::from_millis(config.tick_interval_ms);
    let mut controller = Controller::new(config);

    state::send_command(SimCommand::Start);

    loop {
        // Commands arrive between steps, never during one.
        while let Ok(cmd) = rx.try_recv() {
            process_command(cmd, &mut controller);
        }

        let snapshot = controller.step();
        let frame = snapshot.frame;
        *state::FRAME.lock() = snapshot;

        let counts = controller.current_counts();
        if frame % LOG_INTERVAL == 0 {
            info!(
                "frame {}: rock={} paper={} scissors={}",
                frame, counts.rock, counts.paper, counts.scissors
            );
        }

        // Scripted mutations standing in for the external UI.
        if frame == 600 {
            state::send_command(SimCommand::SetSpeed { speed: 4.0 });
        }
        if frame == 1200 {
            state::send_command(SimCommand::SetPopulation {
                species: Species::Rock,
                count: 35,
            });
        }

        let total = counts.total();
        if let Some(&winner) = Species::ALL.iter().find(|&&s| total > 0 && counts.get(s) == total) {
            info!(
                "{} holds the arena after {} frames",
                get_species_props(winner).label,
                frame
            );
            break;
        }
        if frame >= MAX_FRAMES {
            info!("frame cap reached with a mixed arena");
            break;
        }

        std::thread::sleep(tick);
    }

    controller.stop();
}
