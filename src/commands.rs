// commands.rs
// Handles processing of SimCommand messages sent by external collaborators

use crate::body::Species;
use crate::controller::Controller;

/// Messages an external collaborator (UI, recorder, script) sends to drive the
/// engine. Processed synchronously between steps, never during one.
#[derive(Clone, Debug)]
pub enum SimCommand {
    Start,
    Stop,
    Reset,
    StepOnce,
    SetSpeed { speed: f32 },
    SetPopulation { species: Species, count: usize },
}

/// Process a single SimCommand
pub fn process_command(cmd: SimCommand, controller: &mut Controller) {
    match cmd {
        SimCommand::Start => controller.start(),
        SimCommand::Stop => controller.stop(),
        SimCommand::Reset => controller.reset(),
        SimCommand::StepOnce => controller.step_once(),
        SimCommand::SetSpeed { speed } => controller.set_speed(speed),
        SimCommand::SetPopulation { species, count } => {
            controller.set_population(species, count)
        }
    }
}
