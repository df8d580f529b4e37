pub mod controller;
pub mod playlist;
pub mod session;
pub mod volume;

pub use crate::domain::model::{DeviceEvent, MediaRequest, ReceiverStatus};
pub use crate::domain::ports::{CastClient, Connector};
pub use crate::utils::error::Result;
pub use controller::{CommandOutput, Controller};
