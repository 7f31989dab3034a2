use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessments::catalog::instructions::{self, Notice};
use crate::assessments::catalog::{inventory, investor, literacy};
use crate::assessments::domain::{
    ChoiceOption, InventoryItem, Question, QuestionKind, RiskDomain, Screen,
};
use crate::assessments::scoring::{ChoiceResponses, ScaleResponses};

use super::report::{InvestorReport, LiteracyReport, RiskReport, SessionReport};

/// Opaque participant session identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected answer submissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question '{0}' is not part of the active instrument")]
    UnknownQuestion(String),
    #[error("choice '{choice}' is not an option of question '{question}'")]
    UnknownChoice { question: String, choice: String },
    #[error("inventory item {0} does not exist")]
    UnknownItem(u8),
    #[error("value {value} for item {item} is outside the 1..=7 scale")]
    ValueOutOfRange { item: u8, value: u8 },
    #[error("the {} screen does not accept responses", .0.label())]
    ResponsesClosed(Screen),
}

/// Rejected screen transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    #[error("the current question has no response")]
    StepUnanswered,
    #[error("{} inventory items are unanswered", .unanswered.len())]
    InventoryIncomplete { unanswered: Vec<u8> },
    #[error("the assessment is already complete")]
    SessionComplete,
}

/// The question the participant currently faces, flattened for display.
/// Inventory items surface as seven-point Likert questions whose options
/// carry the verbal anchors.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<ChoiceOption>,
    pub domain: Option<RiskDomain>,
}

impl QuestionView {
    fn from_question(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            text: question.text,
            kind: question.kind,
            options: question.options,
            domain: None,
        }
    }

    fn from_item(item: InventoryItem) -> Self {
        Self {
            id: item.id.to_string(),
            text: item.text,
            kind: QuestionKind::Likert7,
            options: scale_options(),
            domain: Some(item.domain),
        }
    }
}

const fn scale_literal(value: u8) -> &'static str {
    match value {
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        _ => "",
    }
}

fn scale_options() -> Vec<ChoiceOption> {
    (inventory::SCALE_MIN..=inventory::SCALE_MAX)
        .map(|value| ChoiceOption {
            value: scale_literal(value),
            label: inventory::anchor(value).unwrap_or(""),
        })
        .collect()
}

/// Read-only snapshot of a session for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub screen: Screen,
    pub screen_label: &'static str,
    pub step: usize,
    pub total_steps: usize,
    pub question: Option<QuestionView>,
    pub current_response: Option<String>,
    pub can_advance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notices: Option<Vec<Notice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SessionReport>,
}

/// A participant's run through the three instruments. Screens advance
/// strictly forward; `reset` is the only way back.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    id: SessionId,
    screen: Screen,
    step: usize,
    investor_responses: ChoiceResponses,
    literacy_responses: ChoiceResponses,
    inventory_responses: ScaleResponses,
    investor: Option<InvestorReport>,
    literacy: Option<LiteracyReport>,
    report: Option<SessionReport>,
}

impl AssessmentSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            screen: Screen::Instructions,
            step: 0,
            investor_responses: ChoiceResponses::new(),
            literacy_responses: ChoiceResponses::new(),
            inventory_responses: ScaleResponses::new(),
            investor: None,
            literacy: None,
            report: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub const fn total_steps(screen: Screen) -> usize {
        match screen {
            Screen::Instructions => 1,
            Screen::InvestorProfile => investor::QUESTION_COUNT,
            Screen::FinancialLiteracy => 4,
            Screen::RiskTaking => inventory::ITEM_COUNT,
            Screen::Results => 0,
        }
    }

    /// Records an answer for the active choice-based instrument. Overwrites
    /// a previous answer to the same question.
    pub fn record_choice(&mut self, question_id: &str, choice: &str) -> Result<(), AnswerError> {
        let (catalog, store) = match self.screen {
            Screen::InvestorProfile => {
                (investor::questions(), &mut self.investor_responses)
            }
            Screen::FinancialLiteracy => {
                (literacy::questions(), &mut self.literacy_responses)
            }
            screen => return Err(AnswerError::ResponsesClosed(screen)),
        };

        let question = catalog
            .iter()
            .find(|question| question.id == question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_owned()))?;

        if !question.options.iter().any(|option| option.value == choice) {
            return Err(AnswerError::UnknownChoice {
                question: question_id.to_owned(),
                choice: choice.to_owned(),
            });
        }

        store.insert(question_id.to_owned(), choice.to_owned());
        Ok(())
    }

    /// Records a 1..=7 rating for a risk-taking inventory item.
    pub fn record_scale(&mut self, item: u8, value: u8) -> Result<(), AnswerError> {
        if self.screen != Screen::RiskTaking {
            return Err(AnswerError::ResponsesClosed(self.screen));
        }
        if item < 1 || item as usize > inventory::ITEM_COUNT {
            return Err(AnswerError::UnknownItem(item));
        }
        if !(inventory::SCALE_MIN..=inventory::SCALE_MAX).contains(&value) {
            return Err(AnswerError::ValueOutOfRange { item, value });
        }

        self.inventory_responses.insert(item, value);
        Ok(())
    }

    fn current_question_id(&self) -> Option<&'static str> {
        match self.screen {
            Screen::InvestorProfile => {
                investor::questions().get(self.step).map(|q| q.id)
            }
            Screen::FinancialLiteracy => {
                literacy::questions().get(self.step).map(|q| q.id)
            }
            _ => None,
        }
    }

    fn current_item_id(&self) -> Option<u8> {
        match self.screen {
            Screen::RiskTaking => inventory::items().get(self.step).map(|item| item.id),
            _ => None,
        }
    }

    /// Whether the current step's gate is satisfied.
    pub fn can_advance(&self) -> bool {
        match self.screen {
            Screen::Instructions => true,
            Screen::InvestorProfile => self
                .current_question_id()
                .is_some_and(|id| self.investor_responses.contains_key(id)),
            Screen::FinancialLiteracy => self
                .current_question_id()
                .is_some_and(|id| self.literacy_responses.contains_key(id)),
            Screen::RiskTaking => self
                .current_item_id()
                .is_some_and(|id| self.inventory_responses.contains_key(&id)),
            Screen::Results => false,
        }
    }

    /// Inventory items without a response, ascending.
    pub fn unanswered_items(&self) -> Vec<u8> {
        (1..=inventory::ITEM_COUNT as u8)
            .filter(|id| !self.inventory_responses.contains_key(id))
            .collect()
    }

    /// Moves one step forward, crossing into the next screen when the
    /// current one is exhausted. Instrument results are finalized exactly
    /// once, at the moment their screen is left behind.
    pub fn advance(&mut self) -> Result<Screen, AdvanceError> {
        match self.screen {
            Screen::Instructions => {
                self.screen = Screen::InvestorProfile;
                self.step = 0;
            }
            Screen::Results => return Err(AdvanceError::SessionComplete),
            Screen::InvestorProfile | Screen::FinancialLiteracy | Screen::RiskTaking => {
                if !self.can_advance() {
                    return Err(AdvanceError::StepUnanswered);
                }
                if self.step + 1 < Self::total_steps(self.screen) {
                    self.step += 1;
                } else {
                    self.finish_screen()?;
                }
            }
        }

        Ok(self.screen)
    }

    fn finish_screen(&mut self) -> Result<(), AdvanceError> {
        match self.screen {
            Screen::InvestorProfile => {
                self.investor = Some(InvestorReport::from_responses(&self.investor_responses));
                self.screen = Screen::FinancialLiteracy;
                self.step = 0;
            }
            Screen::FinancialLiteracy => {
                self.literacy = Some(LiteracyReport::from_responses(&self.literacy_responses));
                self.screen = Screen::RiskTaking;
                self.step = 0;
            }
            Screen::RiskTaking => {
                let unanswered = self.unanswered_items();
                if !unanswered.is_empty() {
                    return Err(AdvanceError::InventoryIncomplete { unanswered });
                }
                self.report = Some(SessionReport::assemble(
                    self.id.clone(),
                    self.investor.clone(),
                    self.literacy.clone(),
                    RiskReport::from_responses(&self.inventory_responses),
                ));
                self.screen = Screen::Results;
                self.step = 0;
            }
            Screen::Instructions | Screen::Results => {}
        }
        Ok(())
    }

    /// Discards every response and artifact; the session id survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.id.clone());
    }

    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    fn current_response(&self) -> Option<String> {
        match self.screen {
            Screen::InvestorProfile => self
                .current_question_id()
                .and_then(|id| self.investor_responses.get(id).cloned()),
            Screen::FinancialLiteracy => self
                .current_question_id()
                .and_then(|id| self.literacy_responses.get(id).cloned()),
            Screen::RiskTaking => self
                .current_item_id()
                .and_then(|id| self.inventory_responses.get(&id))
                .map(u8::to_string),
            _ => None,
        }
    }

    pub fn view(&self) -> SessionView {
        let question = match self.screen {
            Screen::InvestorProfile => investor::questions()
                .into_iter()
                .nth(self.step)
                .map(QuestionView::from_question),
            Screen::FinancialLiteracy => literacy::questions()
                .into_iter()
                .nth(self.step)
                .map(QuestionView::from_question),
            Screen::RiskTaking => inventory::items()
                .into_iter()
                .nth(self.step)
                .map(QuestionView::from_item),
            Screen::Instructions | Screen::Results => None,
        };

        SessionView {
            session_id: self.id.clone(),
            screen: self.screen,
            screen_label: self.screen.label(),
            step: self.step,
            total_steps: Self::total_steps(self.screen),
            question,
            current_response: self.current_response(),
            can_advance: self.can_advance(),
            instruction: (self.screen == Screen::RiskTaking)
                .then_some(inventory::RESPONSE_INSTRUCTION),
            notices: (self.screen == Screen::Instructions)
                .then(instructions::notices),
            report: self.report.clone(),
        }
    }
}

#[cfg(test)]
impl AssessmentSession {
    /// Builds a session sitting on the final inventory step with the given
    /// ratings already recorded, regardless of how many are missing.
    pub(crate) fn at_final_inventory_step(id: SessionId, responses: ScaleResponses) -> Self {
        let mut session = Self::new(id);
        session.screen = Screen::RiskTaking;
        session.step = inventory::ITEM_COUNT - 1;
        session.inventory_responses = responses;
        session
    }
}
