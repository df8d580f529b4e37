use crate::domain::model::{
    Application, DeviceEvent, MediaRequest, MediaSession, ReceiverStatus, Volume, VolumeChange,
};
use crate::utils::error::Result;

/// Opens a control session to one device. Implementations are moved onto a
/// blocking worker thread, hence the bounds.
pub trait Connector: Send + Sync + 'static {
    type Client: CastClient;

    fn connect(&self, host: &str, port: u16) -> Result<Self::Client>;
}

/// The subset of the Cast receiver and media channels the commands use.
///
/// Calls block until the device answers. `next_event` blocks until the next
/// unsolicited message arrives.
pub trait CastClient {
    fn receiver_status(&self) -> Result<ReceiverStatus>;

    fn set_volume(&self, change: VolumeChange) -> Result<Volume>;

    /// Launch the default media receiver app, replacing whatever runs.
    fn launch_media_receiver(&self) -> Result<Application>;

    /// Open a virtual connection to a running application's transport.
    fn join(&self, app: &Application) -> Result<()>;

    fn stop_app(&self, session_id: &str) -> Result<()>;

    fn load(&self, app: &Application, media: &MediaRequest) -> Result<Vec<MediaSession>>;

    fn media_status(&self, app: &Application) -> Result<Vec<MediaSession>>;

    fn pause(&self, app: &Application, media_session_id: i32) -> Result<MediaSession>;

    fn play(&self, app: &Application, media_session_id: i32) -> Result<MediaSession>;

    fn next_event(&self) -> Result<DeviceEvent>;
}
