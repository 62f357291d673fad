pub mod estimate;
pub mod intake;
pub mod triage;

pub use estimate::WaitEstimate;
pub use intake::IntakeService;
pub use triage::{TriageDecision, TriageRouter};
