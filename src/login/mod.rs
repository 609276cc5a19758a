mod console;
mod submitter;

pub use console::*;
pub use submitter::*;
