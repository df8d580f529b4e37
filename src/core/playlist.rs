use crate::domain::model::{Application, DeviceEvent, MediaRequest, StreamType};
use crate::domain::ports::CastClient;
use crate::utils::error::{CastError, Result};
use crate::utils::media_type::guess_content_type;
use std::collections::VecDeque;

pub fn build_queue(sources: &[String], content_type: Option<&str>) -> VecDeque<MediaRequest> {
    sources
        .iter()
        .map(|src| MediaRequest {
            content_id: src.clone(),
            content_type: content_type
                .map(str::to_string)
                .unwrap_or_else(|| guess_content_type(src).to_string()),
            stream_type: StreamType::Buffered,
        })
        .collect()
}

/// Casts every queued item in order and returns once the last one is done.
///
/// Unless `interrupt` is set, an application already running on the
/// receiver aborts the command before anything is launched.
pub fn play<C: CastClient>(
    client: &C,
    queue: VecDeque<MediaRequest>,
    interrupt: bool,
) -> Result<()> {
    let status = client.receiver_status()?;
    if !interrupt && status.first_application().is_some() {
        return Err(CastError::AlreadyCasting);
    }

    let app = client.launch_media_receiver()?;
    tracing::debug!(session = %app.session_id, transport = %app.transport_id, "Launched media receiver");
    client.join(&app)?;

    let mut playlist = Playlist {
        client,
        app,
        queue,
        current: None,
    };
    if !playlist.play_next()? {
        return Ok(());
    }
    playlist.run()
}

struct Playlist<'a, C: CastClient> {
    client: &'a C,
    app: Application,
    queue: VecDeque<MediaRequest>,
    current: Option<i32>,
}

impl<C: CastClient> Playlist<'_, C> {
    /// Loads the next item. `false` when the queue is exhausted.
    fn play_next(&mut self) -> Result<bool> {
        let Some(media) = self.queue.pop_front() else {
            return Ok(false);
        };

        tracing::info!("Playing {}", media.content_id);
        let sessions = self.client.load(&self.app, &media)?;
        self.current = sessions.first().map(|s| s.media_session_id);
        Ok(true)
    }

    fn run(&mut self) -> Result<()> {
        loop {
            match self.client.next_event()? {
                DeviceEvent::MediaStatus(sessions) => {
                    let mut finished = false;
                    for session in &sessions {
                        tracing::info!("Status {:?}", session.player_state);
                        let ours = self
                            .current
                            .map_or(true, |id| id == session.media_session_id);
                        finished |= ours && session.is_done();
                    }
                    if finished && !self.play_next()? {
                        return Ok(());
                    }
                }
                DeviceEvent::ReceiverStatus(status) => {
                    if !status.has_session(&self.app.session_id) {
                        return Err(CastError::ReceiverClosed);
                    }
                }
                DeviceEvent::Closed => return Err(CastError::ReceiverClosed),
                DeviceEvent::Heartbeat | DeviceEvent::Other => {}
            }
        }
    }
}
