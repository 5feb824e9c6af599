//! Embassy tasks
//!
//! A single task runs the control loop. It never yields: the loop is the
//! whole program and nothing else needs the executor once it starts.

pub mod presence;

pub use presence::presence_task;
