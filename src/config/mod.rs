//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, ScheduleConfig, Settings,
};
