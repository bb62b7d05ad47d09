//! Terminal-rendered portfolio page whose sections animate in as they
//! scroll into view.
//!
//! [`motion`] holds the time-driven state machines, [`sections`] wires
//! them to portfolio content, and [`ui`] / [`headless`] drive a composed
//! [`sections::Page`] against a real or virtual clock.

pub mod cli;
pub mod config;
pub mod content;
pub mod headless;
pub mod logging;
pub mod motion;
pub mod sections;
pub mod shutdown;
pub mod ui;
