pub mod platform;

pub use platform::PlatformRules;
