//! Headless front end for `game_core`: clock, input sources, renderers and
//! the loop that ties them to a session.

pub mod clock;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod settings;

pub use clock::*;
pub use input::*;
pub use renderer::*;
pub use runner::*;
pub use settings::*;
