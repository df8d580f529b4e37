#![allow(dead_code)]

use chromecast_cli::core::{CastClient, Connector};
use chromecast_cli::domain::model::{
    Application, DeviceEvent, IdleReason, MediaImage, MediaInfo, MediaMetadata, MediaRequest,
    MediaSession, MetadataType, PlayerState, ReceiverStatus, StreamType, Volume, VolumeChange,
    MEDIA_NAMESPACE,
};
use chromecast_cli::{CastError, CliConfig, Result};
use clap::Parser;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Scripted stand-in for a Cast device. Clones share state, so a test can
/// hand one clone to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct FakeDevice {
    state: Arc<Mutex<DeviceState>>,
}

#[derive(Default)]
pub struct DeviceState {
    pub status: ReceiverStatus,
    pub media: Vec<MediaSession>,
    pub events: VecDeque<DeviceEvent>,
    pub fail_with: Option<String>,
    pub refuse_connection: bool,
    pub connect_delay: Option<Duration>,
    pub connects: usize,
    pub calls: Vec<String>,
    pub loaded: Vec<MediaRequest>,
    pub volume_changes: Vec<VolumeChange>,
}

impl FakeDevice {
    pub fn new() -> Self {
        let device = Self::default();
        device.state().status.volume = Volume {
            level: Some(0.5),
            muted: Some(false),
        };
        device
    }

    /// A device with the default media receiver running one media session.
    pub fn playing() -> Self {
        let device = Self::new();
        {
            let mut state = device.state();
            state.status.applications.push(media_app("session-1"));
            let mut session = media_session(7, PlayerState::Playing, None);
            session.media = Some(MediaInfo {
                content_id: "http://nas/movies/big-buck-bunny.mp4".to_string(),
                content_type: "video/mp4".to_string(),
                stream_type: StreamType::Buffered,
                duration: Some(596.3),
                metadata: Some(MediaMetadata {
                    metadata_type: MetadataType::Movie,
                    title: Some("Big Buck Bunny".to_string()),
                    subtitle: Some("Blender Foundation".to_string()),
                    images: vec![MediaImage {
                        url: "http://nas/movies/bbb-poster.jpg".to_string(),
                    }],
                }),
            });
            state.media.push(session);
        }
        device
    }

    pub fn failing(message: &str) -> Self {
        let device = Self::playing();
        device.state().fail_with = Some(message.to_string());
        device
    }

    pub fn state(&self) -> MutexGuard<'_, DeviceState> {
        self.state.lock().unwrap()
    }

    pub fn push_event(&self, event: DeviceEvent) {
        self.state().events.push_back(event);
    }
}

impl Connector for FakeDevice {
    type Client = FakeClient;

    fn connect(&self, host: &str, port: u16) -> Result<FakeClient> {
        let delay = {
            let mut state = self.state();
            state.connects += 1;
            if state.refuse_connection {
                return Err(CastError::Connection {
                    host: host.to_string(),
                    port,
                    message: "connection refused".to_string(),
                });
            }
            state.connect_delay
        };
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }
        Ok(FakeClient {
            state: Arc::clone(&self.state),
        })
    }
}

pub struct FakeClient {
    state: Arc<Mutex<DeviceState>>,
}

impl FakeClient {
    fn call(&self, name: &str) -> Result<MutexGuard<'_, DeviceState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(name.to_string());
        match &state.fail_with {
            Some(message) => Err(CastError::Device(message.clone())),
            None => Ok(state),
        }
    }
}

impl CastClient for FakeClient {
    fn receiver_status(&self) -> Result<ReceiverStatus> {
        Ok(self.call("receiver_status")?.status.clone())
    }

    fn set_volume(&self, change: VolumeChange) -> Result<Volume> {
        let mut state = self.call("set_volume")?;
        state.volume_changes.push(change);
        if let Some(level) = change.level {
            state.status.volume.level = Some(level);
        }
        if let Some(muted) = change.muted {
            state.status.volume.muted = Some(muted);
        }
        Ok(state.status.volume)
    }

    fn launch_media_receiver(&self) -> Result<Application> {
        let mut state = self.call("launch_media_receiver")?;
        let app = media_app("launched-session");
        state.status.applications = vec![app.clone()];
        state.media.clear();
        Ok(app)
    }

    fn join(&self, app: &Application) -> Result<()> {
        self.call(&format!("join:{}", app.transport_id))?;
        Ok(())
    }

    fn stop_app(&self, session_id: &str) -> Result<()> {
        let mut state = self.call(&format!("stop_app:{}", session_id))?;
        state.status.applications.retain(|app| app.session_id != session_id);
        state.media.clear();
        Ok(())
    }

    fn load(&self, _app: &Application, media: &MediaRequest) -> Result<Vec<MediaSession>> {
        let mut state = self.call("load")?;
        state.loaded.push(media.clone());
        let id = state.loaded.len() as i32;
        state.media = vec![media_session(id, PlayerState::Buffering, None)];
        Ok(state.media.clone())
    }

    fn media_status(&self, _app: &Application) -> Result<Vec<MediaSession>> {
        Ok(self.call("media_status")?.media.clone())
    }

    fn pause(&self, _app: &Application, media_session_id: i32) -> Result<MediaSession> {
        self.call(&format!("pause:{}", media_session_id))?;
        Ok(media_session(media_session_id, PlayerState::Paused, None))
    }

    fn play(&self, _app: &Application, media_session_id: i32) -> Result<MediaSession> {
        self.call(&format!("play:{}", media_session_id))?;
        Ok(media_session(media_session_id, PlayerState::Playing, None))
    }

    fn next_event(&self) -> Result<DeviceEvent> {
        let mut state = self.call("next_event")?;
        state
            .events
            .pop_front()
            .ok_or_else(|| CastError::Device("event stream ended".to_string()))
    }
}

pub fn media_app(session_id: &str) -> Application {
    Application {
        app_id: "CC1AD845".to_string(),
        session_id: session_id.to_string(),
        transport_id: format!("transport-{}", session_id),
        display_name: "Default Media Receiver".to_string(),
        status_text: "Ready To Cast".to_string(),
        namespaces: vec![MEDIA_NAMESPACE.to_string()],
    }
}

pub fn media_session(id: i32, state: PlayerState, reason: Option<IdleReason>) -> MediaSession {
    MediaSession {
        media_session_id: id,
        player_state: state,
        idle_reason: reason,
        playback_rate: 1.0,
        current_time: Some(0.0),
        media: None,
    }
}

pub fn cli(args: &[&str]) -> CliConfig {
    let mut argv = vec!["chromecast"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

/// Runs the CLI against `device` and returns the exit code and stdout.
pub async fn run(device: &FakeDevice, args: &[&str]) -> (i32, String) {
    let mut out = Vec::new();
    let code = chromecast_cli::app::run(cli(args), device.clone(), &mut out).await;
    (code, String::from_utf8(out).unwrap())
}
