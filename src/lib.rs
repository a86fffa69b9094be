pub mod logging;

#[path = "paint/mod.rs"]
pub mod paint;
