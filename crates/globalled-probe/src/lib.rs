#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod config;
mod prober;
mod sniff;

pub use config::ProberConfig;
pub use prober::HttpImageProber;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
