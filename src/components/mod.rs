mod spawn;

pub use spawn::*;
