// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod search_bar;
pub mod stat_tile;

// Primitive wrappers
pub mod avatar;
pub mod dialog;
pub mod label;
pub mod progress;
pub mod tabs;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use progress::*;
pub use search_bar::*;
pub use stat_tile::*;
pub use tabs::*;
pub use toast::*;
