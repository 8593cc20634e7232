// ───── Current Crate Imports ────────────────────────────────────────────── //

pub use timestamp::Timestamp;
pub use uptime::Uptime;

// ───── Submodules ───────────────────────────────────────────────────────── //

mod timestamp;
mod uptime;
