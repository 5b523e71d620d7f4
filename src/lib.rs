//! Turn-based RPG core: encounters, world travel, shop and saves, driven
//! from a line-based console.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod session;
pub mod turn_system;

pub use combat;
pub use error;
pub use hero;
pub use items;
pub use save;
pub use world;
