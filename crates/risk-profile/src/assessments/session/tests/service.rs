use std::sync::Arc;

use chrono::DateTime;

use super::common::*;

use crate::assessments::domain::Screen;
use crate::assessments::session::service::{
    AnswerRequest, SessionService, SessionServiceError,
};

#[test]
fn start_mints_an_id_when_none_is_supplied() {
    let (service, _) = build_service();

    let view = service.start(None).expect("session starts");
    assert!(!view.session_id.0.is_empty());
    assert_eq!(view.screen, Screen::Instructions);

    let other = service.start(None).expect("second session starts");
    assert_ne!(view.session_id, other.session_id);
}

#[test]
fn start_honors_a_client_supplied_id_once() {
    let (service, _) = build_service();

    let view = service
        .start(Some("participant-42".to_string()))
        .expect("session starts");
    assert_eq!(view.session_id.0, "participant-42");

    let duplicate = service.start(Some("participant-42".to_string()));
    assert!(matches!(
        duplicate,
        Err(SessionServiceError::AlreadyExists(_))
    ));

    // Blank ids are treated as absent.
    let minted = service.start(Some("   ".to_string())).expect("starts");
    assert_ne!(minted.session_id.0.trim(), "");
}

#[test]
fn start_refuses_beyond_the_configured_capacity() {
    let archive = Arc::new(MemoryArchive::default());
    let service = SessionService::with_capacity(archive, 1);

    service.start(None).expect("first session fits");
    let second = service.start(None);
    assert!(matches!(
        second,
        Err(SessionServiceError::CapacityExhausted)
    ));
}

#[test]
fn operations_on_unknown_sessions_are_not_found() {
    let (service, _) = build_service();
    let id = session_id("missing");

    assert!(matches!(
        service.view(&id),
        Err(SessionServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.advance(&id),
        Err(SessionServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.answer(
            &id,
            AnswerRequest::Choice {
                question_id: "risk_pref_q1".to_string(),
                choice: "a".to_string(),
            }
        ),
        Err(SessionServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.reset(&id),
        Err(SessionServiceError::NotFound(_))
    ));
}

#[test]
fn invalid_answers_surface_as_answer_errors() {
    let (service, _) = build_service();
    let view = service.start(None).expect("session starts");
    let id = view.session_id;

    service.advance(&id).expect("leave instructions");
    let result = service.answer(
        &id,
        AnswerRequest::Choice {
            question_id: "risk_pref_q1".to_string(),
            choice: "z".to_string(),
        },
    );
    assert!(matches!(result, Err(SessionServiceError::Answer(_))));
}

#[test]
fn a_completed_session_is_archived_exactly_once() {
    let (service, archive) = build_service();
    let view = service.start(None).expect("session starts");
    let id = view.session_id;

    complete_via_service(service.as_ref(), &id);

    let records = archive.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.session_id, id.0);
    assert!(record.investor_data.get("score").is_some());
    assert!(record.risk_data.get("domains").is_some());
    DateTime::parse_from_rfc3339(&record.completed_at).expect("rfc3339 timestamp");

    let report = service.report(&id).expect("report available");
    assert_eq!(report.session_id, id);
    assert_eq!(
        report.investor.as_ref().map(|investor| investor.score),
        Some(27)
    );
}

#[test]
fn archive_failures_never_block_the_results() {
    let service = SessionService::new(Arc::new(UnavailableArchive));
    let view = service.start(None).expect("session starts");
    let id = view.session_id;

    complete_via_service(&service, &id);

    let view = service.view(&id).expect("view available");
    assert_eq!(view.screen, Screen::Results);
    assert!(service.report(&id).is_ok());
}

#[test]
fn report_is_unavailable_before_the_results_screen() {
    let (service, _) = build_service();
    let view = service.start(None).expect("session starts");
    let id = view.session_id;

    assert!(matches!(
        service.report(&id),
        Err(SessionServiceError::ReportUnavailable)
    ));
}

#[test]
fn reset_discards_progress_but_keeps_the_session() {
    let (service, archive) = build_service();
    let view = service.start(None).expect("session starts");
    let id = view.session_id;

    complete_via_service(service.as_ref(), &id);
    let view = service.reset(&id).expect("reset succeeds");
    assert_eq!(view.screen, Screen::Instructions);
    assert_eq!(view.session_id, id);
    assert!(matches!(
        service.report(&id),
        Err(SessionServiceError::ReportUnavailable)
    ));

    // The archived row from the first run survives the reset.
    assert_eq!(archive.records().len(), 1);
}
