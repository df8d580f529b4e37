use crate::utils::error::{CastError, Result};
use crate::utils::validation::{self, Validate};
use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Play file(s) at <src>, one after another
    Play {
        #[arg(required = true, num_args = 1..)]
        src: Vec<String>,

        /// Do not interrupt if already casting
        #[arg(short = 'i', long)]
        no_interrupt: bool,

        /// MIME type sent to the receiver (guessed from the extension otherwise)
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Set the volume to <volume>
    Volume {
        #[arg(allow_negative_numbers = true)]
        volume: f32,
    },

    /// Set the volume <volumeStep> higher
    #[command(name = "volumeStepUp")]
    VolumeStepUp {
        #[arg(value_name = "volumeStep", allow_negative_numbers = true)]
        step: f32,
    },

    /// Set the volume <volumeStep> lower
    #[command(name = "volumeStepDown")]
    VolumeStepDown {
        #[arg(value_name = "volumeStep", allow_negative_numbers = true)]
        step: f32,
    },

    /// Mute
    Mute,

    /// Unmute
    Unmute,

    /// Stop playback
    Stop,

    /// Pause playback
    Pause,

    /// Unpause playback
    Unpause,

    /// Get Chromecast status
    Status,

    /// Get current playback sessions
    Sessions,

    /// Get current playback session details (e.g. application, media) of the first session
    #[command(name = "sessionDetails")]
    SessionDetails,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Play { .. } => "play",
            Command::Volume { .. } => "volume",
            Command::VolumeStepUp { .. } => "volumeStepUp",
            Command::VolumeStepDown { .. } => "volumeStepDown",
            Command::Mute => "mute",
            Command::Unmute => "unmute",
            Command::Stop => "stop",
            Command::Pause => "pause",
            Command::Unpause => "unpause",
            Command::Status => "status",
            Command::Sessions => "sessions",
            Command::SessionDetails => "sessionDetails",
        }
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Play {
                src, content_type, ..
            } => {
                validation::validate_sources("src", src)?;
                if let Some(content_type) = content_type {
                    validation::validate_non_empty_string("content-type", content_type)?;
                    if !content_type.contains('/') {
                        return Err(CastError::invalid_argument(
                            "content-type",
                            content_type,
                            "Expected a MIME type such as video/mp4",
                        ));
                    }
                }
                Ok(())
            }
            Command::Volume { volume } => validation::validate_volume_level("volume", *volume),
            Command::VolumeStepUp { step } | Command::VolumeStepDown { step } => {
                validation::validate_volume_step("volumeStep", *step)
            }
            _ => Ok(()),
        }
    }
}
