use crate::infra::InMemorySessionArchive;
use clap::Args;
use risk_profile::assessments::session::{
    AnswerRequest, SessionId, SessionReport, SessionService, SessionServiceError,
};
use risk_profile::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Session identifier for the scripted run (defaults to a random id)
    #[arg(long)]
    pub(crate) session_id: Option<String>,
}

/// Answers chosen so each instrument lands in a mid-range band worth
/// narrating: investor 27 points, literacy 10 points, mixed risk domains.
const INVESTOR_SCRIPT: [(&str, &str); 13] = [
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

const LITERACY_SCRIPT: [(&str, &str); 4] = [
    ("finlit_q1", "a"),
    ("finlit_q2", "c"),
    ("finlit_q3", "b"),
    ("finlit_q4", "4"),
];

fn inventory_script(item: u8) -> u8 {
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

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let archive = Arc::new(InMemorySessionArchive::default());
    let service = SessionService::new(archive.clone());

    println!("Financial self-assessment demo");
    let (id, report) = match run_script(&service, args.session_id) {
        Ok(result) => result,
        Err(err) => {
            println!("  Demo aborted: {err}");
            return Ok(());
        }
    };

    println!("\nSession {id} completed at {}", report.completed_at.to_rfc3339());

    if let Some(investor) = &report.investor {
        println!("\nPerfil do Investidor");
        println!("- Score: {} points", investor.score);
        println!("- {}", investor.profile.title);
        println!("  {}", investor.profile.description);
    }

    if let Some(literacy) = &report.literacy {
        println!("\nConhecimento Financeiro");
        println!(
            "- Score: {} points ({} objective + {} self-rated)",
            literacy.score.total, literacy.score.objective, literacy.score.self_score
        );
        println!("- {}", literacy.profile.title);
        println!("  {}", literacy.profile.description);
    }

    println!("\nTomada de Risco");
    for row in report.domain_results() {
        println!(
            "- {} ({}): {} | probabilidade {}",
            row.label, row.key, row.average_label, row.classification_label
        );
        println!("  {}", row.interpretation);
    }

    println!("\nArchived sessions: {}", archive.records().len());
    Ok(())
}

fn run_script(
    service: &SessionService<InMemorySessionArchive>,
    session_id: Option<String>,
) -> Result<(SessionId, SessionReport), SessionServiceError> {
    let view = service.start(session_id)?;
    let id = view.session_id;
    println!("- Started session {id} on '{}'", view.screen_label);

    let view = service.advance(&id)?;
    println!("- Entered '{}' ({} questions)", view.screen_label, view.total_steps);

    for (question_id, choice) in INVESTOR_SCRIPT.iter().chain(LITERACY_SCRIPT.iter()) {
        service.answer(
            &id,
            AnswerRequest::Choice {
                question_id: (*question_id).to_string(),
                choice: (*choice).to_string(),
            },
        )?;
        let view = service.advance(&id)?;
        if view.step == 0 {
            println!("- Entered '{}' ({} questions)", view.screen_label, view.total_steps);
        }
    }

    for item in 1..=30u8 {
        service.answer(
            &id,
            AnswerRequest::Scale {
                item,
                value: inventory_script(item),
            },
        )?;
        let view = service.advance(&id)?;
        if view.step == 0 {
            println!("- Entered '{}'", view.screen_label);
        }
    }

    let report = service.report(&id)?;
    Ok((id, report))
}
