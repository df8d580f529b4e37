use serde::{Deserialize, Serialize};

pub const MEDIA_NAMESPACE: &str = "urn:x-cast:com.google.cast.media";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverStatus {
    pub applications: Vec<Application>,
    pub volume: Volume,
    pub is_active_input: bool,
    pub is_stand_by: bool,
}

impl ReceiverStatus {
    pub fn first_application(&self) -> Option<&Application> {
        self.applications.first()
    }

    pub fn has_session(&self, session_id: &str) -> bool {
        self.applications.iter().any(|app| app.session_id == session_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub app_id: String,
    pub session_id: String,
    pub transport_id: String,
    pub display_name: String,
    pub status_text: String,
    pub namespaces: Vec<String>,
}

impl Application {
    pub fn supports_media(&self) -> bool {
        self.namespaces.iter().any(|ns| ns == MEDIA_NAMESPACE)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

/// What a volume command asks the receiver to change. Fields left as `None`
/// keep their current value on the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeChange {
    pub level: Option<f32>,
    pub muted: Option<bool>,
}

impl VolumeChange {
    pub fn level(level: f32) -> Self {
        Self {
            level: Some(level),
            muted: Some(false),
        }
    }

    pub fn muted(muted: bool) -> Self {
        Self {
            level: None,
            muted: Some(muted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    Idle,
    Playing,
    Buffering,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdleReason {
    Cancelled,
    Interrupted,
    Finished,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamType {
    None,
    Buffered,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    pub content_id: String,
    pub content_type: String,
    pub stream_type: StreamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MediaMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataType {
    Generic,
    Movie,
    TvShow,
    MusicTrack,
    Photo,
}

/// Display information the sender attached to the loaded item. `subtitle`
/// carries the episode title for TV shows and the artist for music and photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    pub metadata_type: MetadataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub images: Vec<MediaImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSession {
    pub media_session_id: i32,
    pub player_state: PlayerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_reason: Option<IdleReason>,
    pub playback_rate: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaInfo>,
}

impl MediaSession {
    /// The item finished, failed or was cancelled. An INTERRUPTED idle is the
    /// receiver reporting that a new load replaced the old item, not an end.
    pub fn is_done(&self) -> bool {
        self.player_state == PlayerState::Idle && self.idle_reason != Some(IdleReason::Interrupted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaRequest {
    pub content_id: String,
    pub content_type: String,
    pub stream_type: StreamType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    pub application: Application,
    pub media: Option<MediaSession>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    MediaStatus(Vec<MediaSession>),
    ReceiverStatus(ReceiverStatus),
    Closed,
    Heartbeat,
    Other,
}
