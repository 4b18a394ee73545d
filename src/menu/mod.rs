// file: src/menu/mod.rs
// version: 1.0.0
// guid: c16b13d2-051f-4d18-abbb-a830e160948b

//! Menu registry, input validation, and action dispatch

pub mod dispatch;
pub mod input;
pub mod registry;
pub mod session;

pub use dispatch::{dispatch, Action, ActionEntry, Flow, ACTION_TABLE};
pub use input::{acquire_selection, parse_selection, InputError, Selection};
pub use registry::{Menu, DEFAULT_OPTIONS};
pub use session::run;
