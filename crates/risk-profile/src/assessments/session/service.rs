use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tracing::warn;

use super::archive::{ArchiveError, SessionArchive};
use super::flow::{
    AdvanceError, AnswerError, AssessmentSession, SessionId, SessionView,
};
use super::report::SessionReport;
use crate::assessments::domain::Screen;

pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// One recorded answer: either a choice for the active choice-based
/// instrument or a 1..=7 rating for an inventory item.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerRequest {
    Scale { item: u8, value: u8 },
    Choice { question_id: String, choice: String },
}

/// Service owning the in-memory session registry and the archive handle.
pub struct SessionService<A> {
    sessions: Mutex<HashMap<SessionId, AssessmentSession>>,
    archive: Arc<A>,
    max_sessions: usize,
}

impl<A> SessionService<A>
where
    A: SessionArchive + 'static,
{
    pub fn new(archive: Arc<A>) -> Self {
        Self::with_capacity(archive, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_capacity(archive: Arc<A>, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            archive,
            max_sessions,
        }
    }

    /// Creates a session, minting an id unless the client supplied one.
    pub fn start(&self, requested_id: Option<String>) -> Result<SessionView, SessionServiceError> {
        let id = match requested_id {
            Some(id) if !id.trim().is_empty() => SessionId(id),
            _ => SessionId(uuid::Uuid::new_v4().to_string()),
        };

        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        if sessions.contains_key(&id) {
            return Err(SessionServiceError::AlreadyExists(id));
        }
        if sessions.len() >= self.max_sessions {
            return Err(SessionServiceError::CapacityExhausted);
        }

        let session = AssessmentSession::new(id.clone());
        let view = session.view();
        sessions.insert(id, session);
        Ok(view)
    }

    pub fn view(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionServiceError::NotFound(id.clone()))?;
        Ok(session.view())
    }

    pub fn answer(
        &self,
        id: &SessionId,
        request: AnswerRequest,
    ) -> Result<SessionView, SessionServiceError> {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionServiceError::NotFound(id.clone()))?;

        match request {
            AnswerRequest::Choice { question_id, choice } => {
                session.record_choice(&question_id, &choice)?;
            }
            AnswerRequest::Scale { item, value } => {
                session.record_scale(item, value)?;
            }
        }

        Ok(session.view())
    }

    /// Advances the session. Reaching the results screen hands the finished
    /// report to the archive; an archive failure is logged and swallowed so
    /// the participant still gets their results.
    pub fn advance(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let (view, archived) = {
            let mut sessions = self.sessions.lock().expect("session registry poisoned");
            let session = sessions
                .get_mut(id)
                .ok_or_else(|| SessionServiceError::NotFound(id.clone()))?;

            let screen = session.advance()?;
            let archived = (screen == Screen::Results)
                .then(|| session.report().map(SessionReport::to_archive_record))
                .flatten();
            (session.view(), archived)
        };

        if let Some(record) = archived {
            if let Err(ArchiveError::Unavailable(reason)) = self.archive.insert(record) {
                warn!(session_id = %id, %reason, "failed to archive completed session");
            }
        }

        Ok(view)
    }

    pub fn reset(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let mut sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionServiceError::NotFound(id.clone()))?;
        session.reset();
        Ok(session.view())
    }

    pub fn report(&self, id: &SessionId) -> Result<SessionReport, SessionServiceError> {
        let sessions = self.sessions.lock().expect("session registry poisoned");
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionServiceError::NotFound(id.clone()))?;
        session
            .report()
            .cloned()
            .ok_or(SessionServiceError::ReportUnavailable)
    }
}

#[cfg(test)]
impl<A> SessionService<A>
where
    A: SessionArchive + 'static,
{
    /// Places a prepared session into the registry as-is.
    pub(crate) fn insert_session(&self, session: AssessmentSession) {
        self.sessions
            .lock()
            .expect("session registry poisoned")
            .insert(session.id().clone(), session);
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error("session '{0}' was not found")]
    NotFound(SessionId),
    #[error("session '{0}' already exists")]
    AlreadyExists(SessionId),
    #[error("session registry is full")]
    CapacityExhausted,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Advance(#[from] AdvanceError),
    #[error("the assessment has not reached the results screen")]
    ReportUnavailable,
}
