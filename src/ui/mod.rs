//! UI utilities for terminal output
//!
//! This module provides the progress spinner and the interactive picker.

mod picker;
mod spinner;

pub use picker::DialoguerPicker;
pub use spinner::{clear_spinner, create_spinner};
