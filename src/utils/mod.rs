pub mod falloff;
pub mod launcher;
pub mod layout;
pub mod loader;
pub mod spring;
pub mod tooltip;

pub use launcher::*;
pub use loader::*;
