// state.rs
// Shared cells at the engine boundary. The command sender is installed by the
// driving loop; the latest snapshot is published after every tick for
// rendering/recording collaborators.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::mpsc::Sender;

use crate::commands::SimCommand;
use crate::simulation::FrameSnapshot;

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));

pub static FRAME: Lazy<Mutex<FrameSnapshot>> = Lazy::new(|| Mutex::new(FrameSnapshot::default()));

/// Send a command to the driving loop, if one is installed.
pub fn send_command(cmd: SimCommand) -> bool {
    match SIM_COMMAND_SENDER.lock().as_ref() {
        Some(tx) => tx.send(cmd).is_ok(),
        None => false,
    }
}
