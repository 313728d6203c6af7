//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel needs from the host editor.
//! - `adapters`: concrete implementations (in-memory host, settings files).

pub mod adapters;
pub mod ports;
