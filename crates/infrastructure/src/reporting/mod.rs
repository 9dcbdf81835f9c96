//! Human-readable progress output.

mod console;

pub use console::ConsoleReporter;
