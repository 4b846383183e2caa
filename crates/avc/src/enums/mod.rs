mod level;
mod profile;

pub use level::AvcLevel;
pub use profile::AvcProfile;
