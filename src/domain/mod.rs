// Domain layer: device data model and the ports the core drives.
// No protocol types leak in here; adapters convert at the boundary.

pub mod model;
pub mod ports;
