pub mod path_checker;
pub mod replay;

pub use path_checker::{any_path_reaches_end, first_successful_index, reaches_end};
pub use replay::trace_agent_path;
