//! Command-line front end for rowsift.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
