//! Sequential session flow over the three instruments, plus the service and
//! HTTP surface that expose it.

pub mod archive;
pub mod flow;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use archive::{ArchiveError, ArchivedSession, SessionArchive};
pub use flow::{
    AdvanceError, AnswerError, AssessmentSession, QuestionView, SessionId, SessionView,
};
pub use report::{
    DomainResultView, InvestorReport, LiteracyReport, RiskReport, SessionReport,
};
pub use router::session_router;
pub use service::{AnswerRequest, SessionService, SessionServiceError, DEFAULT_MAX_SESSIONS};
