//! Diorama Viewer - the interactive window and headless renderer share the
//! procedural scene and the key bindings defined here.

pub mod controls;
pub mod diorama;

pub use controls::CameraCommand;
