// ───── Current Crate Imports ────────────────────────────────────────────── //

pub use greeting::greeting;
pub use health_check::health_check;
pub use home::home;

// ───── Submodules ───────────────────────────────────────────────────────── //

mod greeting;
mod health_check;
mod home;
