use crate::assessments::domain::{ChoiceOption, Question, QuestionKind};

pub const QUESTION_COUNT: usize = 13;

/// The 13 investor-profile questions in presentation order.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "risk_pref_q1",
            text: "Em geral, como seu(sua) melhor amigo(a) descreveria você em relação a assumir riscos?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Um(a) verdadeiro(a) apostador(a); age primeiro, avalia depois",
                },
                ChoiceOption {
                    value: "b",
                    label: "Disposto(a) a correr riscos após análise cuidadosa; avalia primeiro, age com cautela",
                },
                ChoiceOption {
                    value: "c",
                    label: "Cauteloso(a); avança somente com muita segurança",
                },
                ChoiceOption {
                    value: "d",
                    label: "Evita riscos a qualquer custo",
                },
            ],
        },
        Question {
            id: "risk_pref_q2",
            text: "Você está em um programa de prêmios na TV e pode escolher uma das opções. Qual escolheria?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "R$ 1.000 em dinheiro agora",
                },
                ChoiceOption {
                    value: "b",
                    label: "50% de chance de ganhar R$ 5.000",
                },
                ChoiceOption {
                    value: "c",
                    label: "25% de chance de ganhar R$ 10.000",
                },
                ChoiceOption {
                    value: "d",
                    label: "5% de chance de ganhar R$ 100.000",
                },
            ],
        },
        Question {
            id: "risk_pref_q3",
            text: "Você economizou para as \"férias dos seus sonhos\", mas perdeu o emprego. O que faria?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Cancelar as férias",
                },
                ChoiceOption {
                    value: "b",
                    label: "Fazer uma viagem muito mais modesta",
                },
                ChoiceOption {
                    value: "c",
                    label: "Viajar como planejado",
                },
                ChoiceOption {
                    value: "d",
                    label: "Prolongar as férias",
                },
            ],
        },
        Question {
            id: "risk_pref_q4",
            text: "Se você inesperadamente recebesse R$ 20.000,00 para investir, o que faria?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Aplicaria em poupança, CDB de liquidez diária ou fundo DI.",
                },
                ChoiceOption {
                    value: "b",
                    label: "Investiria em títulos de renda fixa seguros ou em um fundo de renda fixa.",
                },
                ChoiceOption {
                    value: "c",
                    label: "Investiria em ações ou em um fundo de ações.",
                },
            ],
        },
        Question {
            id: "risk_pref_q5",
            text: "Em termos de experiência, quão confortável você se sente para investir em ações ou fundos de ações?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Nada confortável",
                },
                ChoiceOption {
                    value: "b",
                    label: "Um pouco confortável",
                },
                ChoiceOption {
                    value: "c",
                    label: "Muito confortável",
                },
            ],
        },
        Question {
            id: "risk_pref_q6",
            text: "Quando você pensa em \"risco\" no contexto financeiro, qual opção mais se aproxima do que vem primeiro à sua mente?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Perda",
                },
                ChoiceOption {
                    value: "b",
                    label: "Incerteza",
                },
                ChoiceOption {
                    value: "c",
                    label: "Oportunidade",
                },
                ChoiceOption {
                    value: "d",
                    label: "Emoção",
                },
            ],
        },
        Question {
            id: "risk_pref_q7",
            text: "A maior parte do seu patrimônio está em Tesouro Direto, um investimento seguro. Alguns especialistas projetam queda dos juros nos próximos meses e apontam oportunidades de ganhos no mercado de ações, mas também risco real de perdas. O que você faria?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Manteria os títulos.",
                },
                ChoiceOption {
                    value: "b",
                    label: "Venderia metade; aplicaria parte em renda fixa de curto prazo e parte em ações.",
                },
                ChoiceOption {
                    value: "c",
                    label: "Venderia todos os títulos e investiria em ações.",
                },
                ChoiceOption {
                    value: "d",
                    label: "Venderia todos os títulos, investiria em ações e ainda pegaria empréstimo para investir mais.",
                },
            ],
        },
        Question {
            id: "risk_pref_q8",
            text: "Considere quatro investimentos hipotéticos, cada um com um resultado possível de maior ganho e outro de maior perda. Qual deles você prefere?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "R$ 200,00 de ganho no melhor resultado; R$ 0 no pior resultado",
                },
                ChoiceOption {
                    value: "b",
                    label: "R$ 800,00 de ganho no melhor resultado; R$ 200,00 de perda no pior resultado",
                },
                ChoiceOption {
                    value: "c",
                    label: "R$2.600,00 de ganho no melhor resultado; R$ 800,00 de perda no pior resultado",
                },
                ChoiceOption {
                    value: "d",
                    label: "R$4.800,00 de ganho no melhor resultado; R$2.400,00 de perda no pior resultado",
                },
            ],
        },
        Question {
            id: "risk_pref_q9",
            text: "Imagine que você acabou de ganhar R$ 1.000,00. Agora você deve escolher entre:",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Ganho certo de R$ 500",
                },
                ChoiceOption {
                    value: "b",
                    label: "50% de chance de ganhar R$ 1.000 e 50% de não ganhar nada",
                },
            ],
        },
        Question {
            id: "risk_pref_q10",
            text: "Além do que você já possui, você recebeu R$ 2.000. Escolha entre:",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Perda certa de R$ 500",
                },
                ChoiceOption {
                    value: "b",
                    label: "50% de chance de perder R$ 1.000 e 50% de não perder nada",
                },
            ],
        },
        Question {
            id: "risk_pref_q11",
            text: "Você recebe uma herança de R$ 100.000 e deve investir TUDO em UMA opção:",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Poupança/Fundo DI",
                },
                ChoiceOption {
                    value: "b",
                    label: "Fundo balanceado (ações + renda fixa)",
                },
                ChoiceOption {
                    value: "c",
                    label: "Carteira com 15 ações",
                },
                ChoiceOption {
                    value: "d",
                    label: "Commodities (ouro, prata, petróleo)",
                },
            ],
        },
        Question {
            id: "risk_pref_q12",
            text: "Se você tem R$ 20.000,00 para investir, qual das seguintes opções de investimento você acharia mais atrativa?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "60% em investimentos de baixo risco; 30% em risco médio e 10% em alto risco",
                },
                ChoiceOption {
                    value: "b",
                    label: "30% em investimentos de baixo risco; 40% em risco médio e 30% em alto risco",
                },
                ChoiceOption {
                    value: "c",
                    label: "10% em investimentos de baixo risco; 40% em risco médio e 50% em alto risco",
                },
            ],
        },
        Question {
            id: "risk_pref_q13",
            text: "Seu vizinho e amigo de confiança, geólogo experiente, está formando um grupo para investir na exploração de uma mina de ouro. A chance de sucesso é estimada em 20%. Em caso de fracasso, todo o valor investido seria perdido. Se você tivesse o dinheiro, quanto investiria?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                ChoiceOption {
                    value: "a",
                    label: "Nada",
                },
                ChoiceOption {
                    value: "b",
                    label: "Um mês de salário",
                },
                ChoiceOption {
                    value: "c",
                    label: "Três meses de salário",
                },
                ChoiceOption {
                    value: "d",
                    label: "Seis meses de salário",
                },
            ],
        },
    ]
}

/// Empirically calibrated per-choice weights. Unknown pairs weigh zero so the
/// scorer stays total over arbitrary response maps.
pub fn choice_weight(question_id: &str, choice: &str) -> u16 {
    let weights: &[(&str, u16)] = match question_id {
        "risk_pref_q1" => &[("a", 4), ("b", 3), ("c", 2), ("d", 1)],
        "risk_pref_q2" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q3" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q4" => &[("a", 1), ("b", 2), ("c", 3)],
        "risk_pref_q5" => &[("a", 1), ("b", 2), ("c", 3)],
        "risk_pref_q6" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q7" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q8" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q9" => &[("a", 1), ("b", 3)],
        "risk_pref_q10" => &[("a", 1), ("b", 3)],
        "risk_pref_q11" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        "risk_pref_q12" => &[("a", 1), ("b", 2), ("c", 3)],
        "risk_pref_q13" => &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
        _ => return 0,
    };

    weights
        .iter()
        .find(|(value, _)| *value == choice)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}
