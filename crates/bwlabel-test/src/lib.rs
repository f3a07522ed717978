//! bwlabel-test - Regression test framework for bwlabel
//!
//! This crate collects what the labeling tests share:
//!
//! - [`RegParams`] - indexed comparisons with a pass/fail summary
//! - [`parse_grid`] / [`random_grid`] - grid fixtures
//! - [`flood_fill_components`] - an independent reference labeling
//! - [`init_test_logging`] - `tracing` output for test runs
//!
//! # Usage
//!
//! ```
//! use bwlabel_test::{RegParams, flood_fill_components, parse_grid};
//!
//! let grid = parse_grid("#.#\n###").unwrap();
//! let (_, count) = flood_fill_components(&grid).unwrap();
//!
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(1.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter for [`init_test_logging`] (default `warn`)

mod error;
mod fixture;
mod oracle;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{parse_grid, random_grid};
pub use oracle::flood_fill_components;
pub use params::RegParams;

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber writing to the test output
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
