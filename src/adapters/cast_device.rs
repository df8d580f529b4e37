//! Ports implemented on top of the `rust_cast` protocol client.
//!
//! Everything below the receiver/media channel API (TLS, framing, protobuf,
//! request ids) belongs to `rust_cast`. This module only converts between
//! its types and the domain model.

use crate::domain::model::{
    Application, DeviceEvent, IdleReason, MediaImage, MediaInfo, MediaMetadata, MediaRequest,
    MediaSession, MetadataType, PlayerState, ReceiverStatus, StreamType, Volume, VolumeChange,
};
use crate::domain::ports::{CastClient, Connector};
use crate::utils::error::{CastError, Result};
use rust_cast::channels::connection::ConnectionResponse;
use rust_cast::channels::heartbeat::HeartbeatResponse;
use rust_cast::channels::media::{self, MediaResponse};
use rust_cast::channels::receiver::{self, CastDeviceApp, ReceiverResponse};
use rust_cast::{CastDevice, ChannelMessage};

/// Platform receiver every sender talks to first.
const DEFAULT_DESTINATION_ID: &str = "receiver-0";

#[derive(Debug, Clone, Copy, Default)]
pub struct RustCastConnector;

impl Connector for RustCastConnector {
    type Client = RustCastClient;

    fn connect(&self, host: &str, port: u16) -> Result<RustCastClient> {
        // Cast devices present self-signed certificates.
        let device = CastDevice::connect_without_host_verification(host.to_string(), port)
            .map_err(|e| CastError::Connection {
                host: host.to_string(),
                port,
                message: e.to_string(),
            })?;

        device
            .connection
            .connect(DEFAULT_DESTINATION_ID.to_string())
            .map_err(device_error)?;
        device.heartbeat.ping().map_err(device_error)?;

        tracing::debug!(host, port, "Client connected");
        Ok(RustCastClient { device })
    }
}

pub struct RustCastClient {
    device: CastDevice<'static>,
}

impl CastClient for RustCastClient {
    fn receiver_status(&self) -> Result<ReceiverStatus> {
        let status = self.device.receiver.get_status().map_err(device_error)?;
        Ok(from_receiver_status(status))
    }

    fn set_volume(&self, change: VolumeChange) -> Result<Volume> {
        let volume = self
            .device
            .receiver
            .set_volume(receiver::Volume {
                level: change.level,
                muted: change.muted,
            })
            .map_err(device_error)?;
        Ok(from_volume(volume))
    }

    fn launch_media_receiver(&self) -> Result<Application> {
        let app = self
            .device
            .receiver
            .launch_app(&CastDeviceApp::DefaultMediaReceiver)
            .map_err(device_error)?;
        Ok(from_application(app))
    }

    fn join(&self, app: &Application) -> Result<()> {
        self.device
            .connection
            .connect(app.transport_id.clone())
            .map_err(device_error)
    }

    fn stop_app(&self, session_id: &str) -> Result<()> {
        self.device
            .receiver
            .stop_app(session_id.to_string())
            .map_err(device_error)
    }

    fn load(&self, app: &Application, request: &MediaRequest) -> Result<Vec<MediaSession>> {
        let media = media::Media {
            content_id: request.content_id.clone(),
            content_type: request.content_type.clone(),
            stream_type: to_stream_type(request.stream_type),
            duration: None,
            metadata: None,
        };

        let status = self
            .device
            .media
            .load(app.transport_id.clone(), app.session_id.clone(), &media)
            .map_err(device_error)?;
        Ok(status.entries.into_iter().map(from_status_entry).collect())
    }

    fn media_status(&self, app: &Application) -> Result<Vec<MediaSession>> {
        let status = self
            .device
            .media
            .get_status(app.transport_id.clone(), None)
            .map_err(device_error)?;
        Ok(status.entries.into_iter().map(from_status_entry).collect())
    }

    fn pause(&self, app: &Application, media_session_id: i32) -> Result<MediaSession> {
        let entry = self
            .device
            .media
            .pause(app.transport_id.clone(), media_session_id)
            .map_err(device_error)?;
        Ok(from_status_entry(entry))
    }

    fn play(&self, app: &Application, media_session_id: i32) -> Result<MediaSession> {
        let entry = self
            .device
            .media
            .play(app.transport_id.clone(), media_session_id)
            .map_err(device_error)?;
        Ok(from_status_entry(entry))
    }

    fn next_event(&self) -> Result<DeviceEvent> {
        let event = match self.device.receive().map_err(device_error)? {
            ChannelMessage::Heartbeat(HeartbeatResponse::Ping) => {
                self.device.heartbeat.pong().map_err(device_error)?;
                DeviceEvent::Heartbeat
            }
            ChannelMessage::Heartbeat(_) => DeviceEvent::Heartbeat,
            ChannelMessage::Connection(ConnectionResponse::Close) => {
                tracing::warn!("Client closed");
                DeviceEvent::Closed
            }
            ChannelMessage::Media(MediaResponse::Status(status)) => DeviceEvent::MediaStatus(
                status.entries.into_iter().map(from_status_entry).collect(),
            ),
            ChannelMessage::Receiver(ReceiverResponse::Status(status)) => {
                DeviceEvent::ReceiverStatus(from_receiver_status(status))
            }
            _ => DeviceEvent::Other,
        };

        tracing::debug!("Client message {:?}", event);
        Ok(event)
    }
}

fn device_error(e: rust_cast::errors::Error) -> CastError {
    CastError::Device(e.to_string())
}

fn from_receiver_status(status: receiver::Status) -> ReceiverStatus {
    ReceiverStatus {
        applications: status.applications.into_iter().map(from_application).collect(),
        volume: from_volume(status.volume),
        is_active_input: status.is_active_input,
        is_stand_by: status.is_stand_by,
    }
}

fn from_application(app: receiver::Application) -> Application {
    Application {
        app_id: app.app_id,
        session_id: app.session_id,
        transport_id: app.transport_id,
        display_name: app.display_name,
        status_text: app.status_text,
        namespaces: app.namespaces,
    }
}

fn from_volume(volume: receiver::Volume) -> Volume {
    Volume {
        level: volume.level,
        muted: volume.muted,
    }
}

fn from_status_entry(entry: media::StatusEntry) -> MediaSession {
    MediaSession {
        media_session_id: entry.media_session_id,
        player_state: match entry.player_state {
            media::PlayerState::Idle => PlayerState::Idle,
            media::PlayerState::Playing => PlayerState::Playing,
            media::PlayerState::Buffering => PlayerState::Buffering,
            media::PlayerState::Paused => PlayerState::Paused,
        },
        idle_reason: entry.idle_reason.map(|reason| match reason {
            media::IdleReason::Cancelled => IdleReason::Cancelled,
            media::IdleReason::Interrupted => IdleReason::Interrupted,
            media::IdleReason::Finished => IdleReason::Finished,
            media::IdleReason::Error => IdleReason::Error,
        }),
        playback_rate: entry.playback_rate,
        current_time: entry.current_time,
        media: entry.media.map(|media| MediaInfo {
            content_id: media.content_id,
            content_type: media.content_type,
            stream_type: from_stream_type(media.stream_type),
            duration: media.duration,
            metadata: media.metadata.map(from_metadata),
        }),
    }
}

fn from_metadata(metadata: media::Metadata) -> MediaMetadata {
    let (metadata_type, title, subtitle, images) = match metadata {
        media::Metadata::Generic(m) => (MetadataType::Generic, m.title, m.subtitle, m.images),
        media::Metadata::Movie(m) => (MetadataType::Movie, m.title, m.subtitle, m.images),
        media::Metadata::TvShow(m) => (
            MetadataType::TvShow,
            m.series_title,
            m.episode_title,
            m.images,
        ),
        media::Metadata::MusicTrack(m) => (
            MetadataType::MusicTrack,
            m.title,
            m.artist.or(m.album_artist),
            m.images,
        ),
        media::Metadata::Photo(m) => (MetadataType::Photo, m.title, m.artist, Vec::new()),
    };

    MediaMetadata {
        metadata_type,
        title,
        subtitle,
        images: images
            .into_iter()
            .map(|image| MediaImage { url: image.url })
            .collect(),
    }
}

fn to_stream_type(stream_type: StreamType) -> media::StreamType {
    match stream_type {
        StreamType::None => media::StreamType::None,
        StreamType::Buffered => media::StreamType::Buffered,
        StreamType::Live => media::StreamType::Live,
    }
}

fn from_stream_type(stream_type: media::StreamType) -> StreamType {
    match stream_type {
        media::StreamType::None => StreamType::None,
        media::StreamType::Buffered => StreamType::Buffered,
        media::StreamType::Live => StreamType::Live,
    }
}
