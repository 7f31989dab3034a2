use serde::Serialize;

/// A notice panel on the opening screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Notices shown before the first instrument, in display order.
pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            heading: "FIQUE ATENTO!",
            body: "Duração: 5 a 10 minutos. Responda todas as perguntas para que possamos calcular seus resultados.",
        },
        Notice {
            heading: "LEMBRE-SE",
            body: "Não há respostas \"corretas\" ou \"erradas\", mas é importante preencher o que melhor corresponde ao seu sentimento no momento.",
        },
        Notice {
            heading: "CONFIDENCIALIDADE",
            body: "Todas as informações fornecidas neste quiz serão tratadas de forma confidencial e anônima. As respostas não permitem a identificação dos participantes.",
        },
    ]
}
