//! Reusable UI components

mod admin_layout;
mod loading;
mod navbar;
mod preview;
mod redirect;
mod sidebar;
mod toast;

pub use admin_layout::*;
pub use loading::*;
pub use navbar::*;
pub use preview::*;
pub use redirect::*;
pub use sidebar::*;
pub use toast::*;
