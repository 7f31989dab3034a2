use serde::{Deserialize, Serialize};

/// Top-level screens of the assessment, traversed strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Instructions,
    InvestorProfile,
    FinancialLiteracy,
    RiskTaking,
    Results,
}

impl Screen {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Instructions,
            Self::InvestorProfile,
            Self::FinancialLiteracy,
            Self::RiskTaking,
            Self::Results,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Instructions => "Instruções",
            Self::InvestorProfile => "Perfil do Investidor",
            Self::FinancialLiteracy => "Conhecimento Financeiro",
            Self::RiskTaking => "Tomada de Risco",
            Self::Results => "Seus Perfis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Likert5,
    Likert7,
}

/// A selectable answer: machine value plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A catalog question for the choice-based instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<ChoiceOption>,
}

/// The five life domains partitioning the 30-item risk-taking inventory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskDomain {
    Ethical,
    Financial,
    HealthSafety,
    Recreational,
    Social,
}

impl RiskDomain {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Ethical,
            Self::Financial,
            Self::HealthSafety,
            Self::Recreational,
            Self::Social,
        ]
    }

    /// Presentation order on the results screen.
    pub const fn results_order() -> [Self; 5] {
        [
            Self::Ethical,
            Self::HealthSafety,
            Self::Recreational,
            Self::Social,
            Self::Financial,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Ethical => "E",
            Self::Financial => "F",
            Self::HealthSafety => "H/S",
            Self::Recreational => "R",
            Self::Social => "S",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ethical => "Ético",
            Self::Financial => "Financeiro",
            Self::HealthSafety => "Saúde/Segurança",
            Self::Recreational => "Recreativo",
            Self::Social => "Social",
        }
    }
}

/// Banded likelihood of risk-taking within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
        }
    }
}

/// One statement of the risk-taking inventory, answered on a 1..=7 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub id: u8,
    pub domain: RiskDomain,
    pub text: &'static str,
}

/// A descriptive band selected by threshold lookup against a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub title: &'static str,
    pub description: &'static str,
}
