use risk_profile::assessments::catalog::{inventory, investor, literacy};
use risk_profile::assessments::domain::{RiskDomain, RiskLevel, Screen};
use risk_profile::assessments::session::{
    AdvanceError, AssessmentSession, SessionId,
};

fn answered_session() -> AssessmentSession {
    let mut session = AssessmentSession::new(SessionId("itest".to_string()));
    session.advance().expect("leave instructions");

    for question in investor::questions() {
        let choice = question.options[0].value;
        session
            .record_choice(question.id, choice)
            .expect("investor answer accepted");
        session.advance().expect("investor step advances");
    }

    for question in literacy::questions() {
        let choice = question.options[0].value;
        session
            .record_choice(question.id, choice)
            .expect("literacy answer accepted");
        session.advance().expect("literacy step advances");
    }

    for item in inventory::items() {
        session
            .record_scale(item.id, 7)
            .expect("inventory answer accepted");
        session.advance().expect("inventory step advances");
    }

    session
}

#[test]
fn a_full_walkthrough_ends_on_a_terminal_results_screen() {
    let mut session = answered_session();
    assert_eq!(session.screen(), Screen::Results);
    assert_eq!(session.advance(), Err(AdvanceError::SessionComplete));
}

#[test]
fn first_options_everywhere_produce_consistent_reports() {
    let session = answered_session();
    let report = session.report().expect("report assembled");

    // First options: q1 weighs 4, every other question weighs 1.
    let investor = report.investor.as_ref().expect("investor report");
    assert_eq!(investor.score, 16);
    assert_eq!(investor.profile.title, "Baixa tolerância ao risco");

    // First options answer q1 correctly ('a') and rate self-knowledge 1.
    let literacy = report.literacy.as_ref().expect("literacy report");
    assert_eq!(literacy.score.objective, 2);
    assert_eq!(literacy.score.self_score, 1);
    assert_eq!(literacy.profile.title, "Básica");

    // Every item at the maximum classifies every domain high.
    for domain in RiskDomain::ordered() {
        let score = &report.risk.domains[&domain];
        assert!((score.average - 7.0).abs() < f64::EPSILON);
        assert_eq!(score.classification, RiskLevel::High);
    }
}

#[test]
fn the_archive_record_round_trips_the_report_shape() {
    let session = answered_session();
    let report = session.report().expect("report assembled");

    let record = report.to_archive_record();
    assert_eq!(record.session_id, "itest");
    assert_eq!(
        record.investor_data.pointer("/score").and_then(serde_json::Value::as_u64),
        Some(16)
    );
    assert_eq!(
        record
            .risk_data
            .pointer("/domains/ethical/classification")
            .and_then(serde_json::Value::as_str),
        Some("high")
    );
    chrono::DateTime::parse_from_rfc3339(&record.completed_at).expect("rfc3339 timestamp");
}

#[test]
fn reset_allows_a_second_complete_run() {
    let mut session = answered_session();
    session.reset();
    assert_eq!(session.screen(), Screen::Instructions);
    assert!(session.report().is_none());

    session.advance().expect("leave instructions again");
    session
        .record_choice("risk_pref_q1", "d")
        .expect("fresh run accepts answers");
}
