use crate::config::{Command, Settings};
use crate::core::playlist;
use crate::core::session::{join_first_session, JoinedSession};
use crate::core::volume::{step_volume, StepDirection};
use crate::domain::model::{SessionDetails, VolumeChange};
use crate::domain::ports::{CastClient, Connector};
use crate::utils::error::{CastError, Result};
use std::sync::Arc;

/// What a finished command hands back for printing.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Pretty-printed result document for stdout. Rendered straight from the
    /// typed value so f32 fields keep their shortest decimal form.
    Json(String),
    /// Nothing to act on; informational line for stderr, still a success.
    Notice(&'static str),
    Empty,
}

pub struct Controller<C: Connector> {
    connector: Arc<C>,
    settings: Settings,
}

impl<C: Connector> Controller<C> {
    pub fn new(connector: C, settings: Settings) -> Self {
        Self {
            connector: Arc::new(connector),
            settings,
        }
    }

    /// Connects, runs `command` to completion and disconnects.
    ///
    /// The protocol client blocks, so the session runs on the blocking pool.
    /// With a timeout configured the command fails once it elapses; the
    /// worker thread is abandoned, not interrupted.
    pub async fn execute(&self, command: Command) -> Result<CommandOutput> {
        let connector = Arc::clone(&self.connector);
        let host = self.settings.host.clone();
        let port = self.settings.port;

        let task = tokio::task::spawn_blocking(move || {
            tracing::debug!(%host, port, command = command.name(), "Connecting");
            let client = connector.connect(&host, port)?;
            dispatch(&client, &command)
        });

        let joined = match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, task)
                .await
                .map_err(|_| CastError::Timeout(limit))?,
            None => task.await,
        };

        joined.map_err(|e| CastError::Task(e.to_string()))?
    }
}

/// Runs one command against an open client.
pub fn dispatch<C: CastClient>(client: &C, command: &Command) -> Result<CommandOutput> {
    match command {
        Command::Play {
            src,
            no_interrupt,
            content_type,
        } => {
            let queue = playlist::build_queue(src, content_type.as_deref());
            playlist::play(client, queue, !no_interrupt)?;
            Ok(CommandOutput::Empty)
        }
        Command::Volume { volume } => {
            let volume = client.set_volume(VolumeChange::level(*volume))?;
            json(&volume)
        }
        Command::VolumeStepUp { step } => json(&step_volume(client, *step, StepDirection::Up)?),
        Command::VolumeStepDown { step } => {
            json(&step_volume(client, *step, StepDirection::Down)?)
        }
        Command::Mute => json(&client.set_volume(VolumeChange::muted(true))?),
        Command::Unmute => json(&client.set_volume(VolumeChange::muted(false))?),
        Command::Stop => {
            let status = client.receiver_status()?;
            match status.first_application() {
                Some(app) => {
                    tracing::debug!(app = %app.display_name, session = %app.session_id, "Stopping");
                    client.stop_app(&app.session_id)?;
                }
                None => tracing::debug!("Nothing running, nothing to stop"),
            }
            Ok(CommandOutput::Empty)
        }
        Command::Pause | Command::Unpause => {
            let Some(JoinedSession {
                application,
                media: Some(media),
            }) = join_first_session(client)?
            else {
                return Ok(CommandOutput::Notice("Nothing playing"));
            };

            if matches!(command, Command::Pause) {
                client.pause(&application, media.media_session_id)?;
            } else {
                client.play(&application, media.media_session_id)?;
            }
            Ok(CommandOutput::Empty)
        }
        Command::Status => json(&client.receiver_status()?),
        Command::Sessions => json(&client.receiver_status()?.applications),
        Command::SessionDetails => match join_first_session(client)? {
            Some(joined) => json(&SessionDetails {
                application: joined.application,
                media: joined.media,
            }),
            None => Ok(CommandOutput::Notice("No session")),
        },
    }
}

fn json<T: serde::Serialize>(value: &T) -> Result<CommandOutput> {
    Ok(CommandOutput::Json(serde_json::to_string_pretty(value)?))
}
