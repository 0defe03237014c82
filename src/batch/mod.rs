//! Non-interactive script evaluation

mod processor;

pub use processor::process_script_file;
