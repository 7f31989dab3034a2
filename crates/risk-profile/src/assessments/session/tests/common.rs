use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessments::domain::Screen;
use crate::assessments::session::archive::{ArchiveError, ArchivedSession, SessionArchive};
use crate::assessments::session::flow::{AssessmentSession, SessionId};
use crate::assessments::session::service::{AnswerRequest, SessionService};

/// Canonical investor run summing to 27 points.
pub(super) const INVESTOR_ANSWERS: [(&str, &str); 13] = [
    ("risk_pref_q1", "a"),
    ("risk_pref_q2", "b"),
    ("risk_pref_q3", "c"),
    ("risk_pref_q4", "b"),
    ("risk_pref_q5", "c"),
    ("risk_pref_q6", "a"),
    ("risk_pref_q7", "b"),
    ("risk_pref_q8", "c"),
    ("risk_pref_q9", "a"),
    ("risk_pref_q10", "a"),
    ("risk_pref_q11", "b"),
    ("risk_pref_q12", "c"),
    ("risk_pref_q13", "a"),
];

/// All objective answers correct plus a self-rating of four: total 10.
pub(super) const LITERACY_ANSWERS: [(&str, &str); 4] = [
    ("finlit_q1", "a"),
    ("finlit_q2", "c"),
    ("finlit_q3", "b"),
    ("finlit_q4", "4"),
];

/// Inventory ratings chosen so each domain lands in a known band:
/// financial 6.5 (high), ethical 1.0 (low), health/safety 3.5 (medium),
/// recreational 5.5 (high), social ~4.2 (medium).
pub(super) fn inventory_value(item: u8) -> u8 {
    match item {
        3 | 4 | 12 | 18 => 7,
        8 => 6,
        14 => 5,
        6 | 9 | 10 | 16 | 29 | 30 => 1,
        5 | 17 | 23 => 4,
        15 | 20 | 26 => 3,
        2 | 13 | 24 => 6,
        11 | 19 | 25 => 5,
        21 => 5,
        _ => 4,
    }
}

pub(super) fn session_id(suffix: &str) -> SessionId {
    SessionId(format!("session-{suffix}"))
}

pub(super) fn session(suffix: &str) -> AssessmentSession {
    AssessmentSession::new(session_id(suffix))
}

/// Drives a session from the instructions screen to the results screen with
/// the canonical answers.
pub(super) fn complete_session(session: &mut AssessmentSession) {
    session.advance().expect("leave instructions");

    for (question_id, choice) in INVESTOR_ANSWERS {
        session
            .record_choice(question_id, choice)
            .expect("investor answer accepted");
        session.advance().expect("investor step advances");
    }

    for (question_id, choice) in LITERACY_ANSWERS {
        session
            .record_choice(question_id, choice)
            .expect("literacy answer accepted");
        session.advance().expect("literacy step advances");
    }

    for item in 1..=30u8 {
        session
            .record_scale(item, inventory_value(item))
            .expect("inventory answer accepted");
        session.advance().expect("inventory step advances");
    }

    assert_eq!(session.screen(), Screen::Results);
}

#[derive(Default)]
pub(super) struct MemoryArchive {
    records: Mutex<Vec<ArchivedSession>>,
}

impl MemoryArchive {
    pub(super) fn records(&self) -> Vec<ArchivedSession> {
        self.records.lock().expect("archive mutex poisoned").clone()
    }
}

impl SessionArchive for MemoryArchive {
    fn insert(&self, record: ArchivedSession) -> Result<(), ArchiveError> {
        self.records
            .lock()
            .expect("archive mutex poisoned")
            .push(record);
        Ok(())
    }
}

pub(super) struct UnavailableArchive;

impl SessionArchive for UnavailableArchive {
    fn insert(&self, _record: ArchivedSession) -> Result<(), ArchiveError> {
        Err(ArchiveError::Unavailable("archive offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<SessionService<MemoryArchive>>, Arc<MemoryArchive>) {
    let archive = Arc::new(MemoryArchive::default());
    let service = Arc::new(SessionService::new(archive.clone()));
    (service, archive)
}

/// Drives a started session to the results screen through the service API.
pub(super) fn complete_via_service<A>(service: &SessionService<A>, id: &SessionId)
where
    A: SessionArchive + 'static,
{
    service.advance(id).expect("leave instructions");

    for (question_id, choice) in INVESTOR_ANSWERS.iter().chain(LITERACY_ANSWERS.iter()) {
        service
            .answer(
                id,
                AnswerRequest::Choice {
                    question_id: (*question_id).to_string(),
                    choice: (*choice).to_string(),
                },
            )
            .expect("choice recorded");
        service.advance(id).expect("step advances");
    }

    for item in 1..=30u8 {
        service
            .answer(
                id,
                AnswerRequest::Scale {
                    item,
                    value: inventory_value(item),
                },
            )
            .expect("rating recorded");
        service.advance(id).expect("inventory step advances");
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
