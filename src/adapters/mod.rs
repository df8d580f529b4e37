// Adapters layer: concrete implementations of the domain ports.

pub mod cast_device;

pub use cast_device::{RustCastClient, RustCastConnector};
