use crate::assessments::domain::{ChoiceOption, Question, QuestionKind};

/// Questions graded against an answer key.
pub const OBJECTIVE_IDS: [&str; 3] = ["finlit_q1", "finlit_q2", "finlit_q3"];

/// The Likert self-rating that contributes its face value to the total.
pub const SELF_ASSESSMENT_ID: &str = "finlit_q4";

/// Points awarded for each correct objective answer.
pub const OBJECTIVE_POINTS: u8 = 2;

pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "finlit_q1",
            text: "Suponha que você tenha R$ 100,00 na poupança e a taxa de juros seja de 10% ao ano. Depois de 5 anos, quanto você teria se deixasse o dinheiro render?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Mais de R$ 150,00",
                },
                ChoiceOption {
                    value: "b",
                    label: "Exatamente R$ 150,00",
                },
                ChoiceOption {
                    value: "c",
                    label: "Menos de R$ 150,00",
                },
                ChoiceOption {
                    value: "d",
                    label: "Não sabe",
                },
            ],
        },
        Question {
            id: "finlit_q2",
            text: "Sua poupança rende 10% ao ano, mas a inflação é 12% ao ano. Depois de 1 ano, o que você conseguiria comprar com o dinheiro dessa conta?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Mais do que hoje",
                },
                ChoiceOption {
                    value: "b",
                    label: "Exatamente o mesmo que hoje",
                },
                ChoiceOption {
                    value: "c",
                    label: "Menos do que hoje",
                },
                ChoiceOption {
                    value: "d",
                    label: "Não sabe",
                },
            ],
        },
        Question {
            id: "finlit_q3",
            text: "\"Comprar ações de uma única empresa geralmente proporciona um retorno mais seguro do que investir em um fundo de ações diversificado.\"",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Verdadeiro",
                },
                ChoiceOption {
                    value: "b",
                    label: "Falso",
                },
                ChoiceOption {
                    value: "c",
                    label: "Não sabe",
                },
            ],
        },
        Question {
            id: "finlit_q4",
            text: "Em uma escala de 1 a 5, como você classificaria seu entendimento geral sobre finanças pessoais e gestão de dinheiro?",
            kind: QuestionKind::Likert5,
            options: vec![
                ChoiceOption { value: "1", label: "1" },
                ChoiceOption { value: "2", label: "2" },
                ChoiceOption { value: "3", label: "3" },
                ChoiceOption { value: "4", label: "4" },
                ChoiceOption { value: "5", label: "5" },
            ],
        },
    ]
}

/// Answer key for the objective questions. `None` for the self-rating.
pub fn correct_choice(question_id: &str) -> Option<&'static str> {
    match question_id {
        "finlit_q1" => Some("a"),
        "finlit_q2" => Some("c"),
        "finlit_q3" => Some("b"),
        _ => None,
    }
}
