mod build;
mod contact;

pub use build::build;
pub use contact::{ConsoleNotifier, contact, send};
