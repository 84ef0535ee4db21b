pub mod enums;
pub mod keybinding;
pub mod player;
pub mod roster;
pub mod settings;
pub mod stats;
