mod hover;
mod keybinds;
mod launch;
mod layout;
mod magnify;
mod mount;
mod pointer;
mod tooltip;

pub use hover::*;
pub use keybinds::*;
pub use launch::*;
pub use layout::*;
pub use magnify::*;
pub use mount::*;
pub use pointer::*;
pub use tooltip::*;
