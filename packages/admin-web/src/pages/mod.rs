//! Page components

mod applicants;
mod blogs;
mod dashboard;
mod jobs;
mod login;
mod not_found;
mod settings;
mod subadmins;

pub use applicants::*;
pub use blogs::*;
pub use dashboard::*;
pub use jobs::*;
pub use login::*;
pub use not_found::*;
pub use settings::*;
pub use subadmins::*;
