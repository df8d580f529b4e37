use crate::domain::model::{Application, MediaSession};
use crate::domain::ports::CastClient;
use crate::utils::error::Result;

/// The first running application, joined, with its current media session.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedSession {
    pub application: Application,
    pub media: Option<MediaSession>,
}

/// Joins whatever runs first on the receiver. `None` when nothing runs.
///
/// Applications that do not speak the media namespace are reported without
/// a media session instead of being joined.
pub fn join_first_session<C: CastClient>(client: &C) -> Result<Option<JoinedSession>> {
    let status = client.receiver_status()?;
    let Some(application) = status.applications.into_iter().next() else {
        return Ok(None);
    };

    if !application.supports_media() {
        tracing::debug!(app = %application.display_name, "Application has no media channel");
        return Ok(Some(JoinedSession {
            application,
            media: None,
        }));
    }

    client.join(&application)?;
    let media = client.media_status(&application)?.into_iter().next();
    tracing::debug!(
        app = %application.display_name,
        session = %application.session_id,
        has_media = media.is_some(),
        "Joined session"
    );

    Ok(Some(JoinedSession { application, media }))
}
