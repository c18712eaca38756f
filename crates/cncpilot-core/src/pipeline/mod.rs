//! Job pipeline state machine
//!
//! ```text
//! Upload ──analyze──▶ Analyzing ──finish──▶ Configuring ──generate──▶ Generating
//!                                              ▲                          │
//!                                              └──reconfigure── Previewing ◀─finish
//! ```

mod sequencer;
mod stage;

pub use sequencer::{StageSequencer, Transition, HISTORY_LIMIT};
pub use stage::{PipelineAction, PipelineStage};
