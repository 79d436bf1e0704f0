mod debug;
mod game;
mod hud;

pub use debug::DebugWindow;
pub use game::GameWindow;
pub use hud::HudWindow;
