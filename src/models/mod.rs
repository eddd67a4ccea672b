mod intake;
mod submission;

pub use intake::IntakeRecord;
pub use submission::Submission;
