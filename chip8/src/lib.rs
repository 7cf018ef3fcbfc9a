pub mod audio;
pub mod cli;
pub mod display;
#[cfg(feature = "desktop")]
pub mod run;
