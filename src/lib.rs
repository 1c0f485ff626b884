#![forbid(unsafe_code)]

//! Fixture scheduling and jersey color clash detection for competition management.
//!
//! Both components are pure: they read their inputs and return freshly allocated results.
//! Persistence, identifiers and timestamps of the produced fixtures belong to the caller.

pub mod arguments;
pub mod colors;
pub mod config;
pub mod models;
pub mod scheduler;
pub mod utils;

pub use colors::{
    check_jersey_colors, color_delta_e, detect_jersey_color_clashes, has_color_clashes,
    ClashPolicy, ClashReport,
};
pub use scheduler::{generate_fixtures_from_format, FixtureGenerationRequest, ScheduleOptions};
