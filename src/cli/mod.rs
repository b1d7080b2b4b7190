pub mod orchestration;

pub use orchestration::{run_stamp_workflow, StampWorkflowArgs, WorkflowResult};
