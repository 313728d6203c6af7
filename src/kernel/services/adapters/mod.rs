//! Service adapters: concrete host and settings implementations.

pub mod memory;
pub mod settings;

pub use memory::{HostEvent, MemoryHost};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from, Settings,
};
