pub mod canvas;
pub mod commands;
pub mod input;
pub mod shortcuts;

pub use canvas::Canvas;
pub use commands::{Command, CommandStack};
pub use input::InputEvent;
pub use shortcuts::{ShortcutAction, ShortcutMap};
