//! Threshold classifiers. Bands are checked from the highest cutoff down and
//! every cutoff is inclusive, so each score lands in exactly one band.

use crate::assessments::domain::{Profile, RiskLevel};

/// Maps a summed investor score onto its tolerance band.
pub fn investor_profile(score: u16) -> Profile {
    if score >= 33 {
        Profile {
            title: "Alta tolerância ao risco",
            description: "Você demonstra uma disposição significativa para assumir riscos em busca de retornos mais elevados. Sente-se confortável com a volatilidade do mercado e compreende que perdas potenciais são parte da jornada de investimentos com maior potencial de crescimento.",
        }
    } else if score >= 29 {
        Profile {
            title: "Tolerância ao risco acima da média",
            description: "Você está disposto(a) a aceitar um nível de risco superior à média para alcançar seus objetivos financeiros. Possui um bom entendimento da relação risco-retorno e busca oportunidades que ofereçam um potencial de crescimento substancial, mesmo que isso envolva alguma volatilidade.",
        }
    } else if score >= 23 {
        Profile {
            title: "Tolerância ao risco média/moderada",
            description: "Seu perfil busca um equilíbrio entre segurança e crescimento. Você aceita correr alguns riscos para obter retornos melhores que os da renda fixa tradicional, mas preza pela diversificação e por uma estratégia que não exponha seu patrimônio a oscilações extremas.",
        }
    } else if score >= 19 {
        Profile {
            title: "Tolerância ao risco abaixo da média",
            description: "Você prioriza a preservação do seu capital, mas entende que uma pequena exposição ao risco pode ser necessária para obter rendimentos um pouco melhores. Prefere investimentos mais previsíveis e se sente desconfortável com grandes flutuações no valor da sua carteira.",
        }
    } else {
        Profile {
            title: "Baixa tolerância ao risco",
            description: "Sua principal prioridade é a segurança e a preservação do capital. Você prefere investimentos com baixíssimo risco e alta liquidez, mesmo que isso signifique obter retornos mais modestos. A previsibilidade é um fator chave em suas decisões financeiras.",
        }
    }
}

/// Maps the combined literacy total (objective plus self-rating) onto a band.
pub fn literacy_profile(score: u8) -> Profile {
    if score >= 9 {
        Profile {
            title: "Alfabetização financeira alta",
            description: "Compreensão sólida de juros, inflação e diversificação.",
        }
    } else if score >= 7 {
        Profile {
            title: "Acima da média",
            description: "Domínio consistente; faltam poucos ajustes.",
        }
    } else if score >= 5 {
        Profile {
            title: "Moderada",
            description: "Base adequada; aprofunde juros reais e diversificação.",
        }
    } else if score >= 3 {
        Profile {
            title: "Básica",
            description: "Reforce inflação, juros compostos e risco.",
        }
    } else {
        Profile {
            title: "Muito baixa",
            description: "Sugere-se aprendizado guiado dos conceitos essenciais.",
        }
    }
}

/// Classifies a domain average on the 1..=7 likelihood scale.
pub fn classify_average(average: f64) -> RiskLevel {
    if average >= 5.5 {
        RiskLevel::High
    } else if average >= 3.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn investor_bands_are_inclusive_at_each_cutoff() {
        assert_eq!(investor_profile(33).title, "Alta tolerância ao risco");
        assert_eq!(investor_profile(32).title, "Tolerância ao risco acima da média");
        assert_eq!(investor_profile(29).title, "Tolerância ao risco acima da média");
        assert_eq!(investor_profile(28).title, "Tolerância ao risco média/moderada");
        assert_eq!(investor_profile(23).title, "Tolerância ao risco média/moderada");
        assert_eq!(investor_profile(22).title, "Tolerância ao risco abaixo da média");
        assert_eq!(investor_profile(19).title, "Tolerância ao risco abaixo da média");
        assert_eq!(investor_profile(18).title, "Baixa tolerância ao risco");
        assert_eq!(investor_profile(0).title, "Baixa tolerância ao risco");
    }

    #[test]
    fn literacy_bands_are_inclusive_at_each_cutoff() {
        assert_eq!(literacy_profile(11).title, "Alfabetização financeira alta");
        assert_eq!(literacy_profile(9).title, "Alfabetização financeira alta");
        assert_eq!(literacy_profile(8).title, "Acima da média");
        assert_eq!(literacy_profile(7).title, "Acima da média");
        assert_eq!(literacy_profile(6).title, "Moderada");
        assert_eq!(literacy_profile(5).title, "Moderada");
        assert_eq!(literacy_profile(4).title, "Básica");
        assert_eq!(literacy_profile(3).title, "Básica");
        assert_eq!(literacy_profile(2).title, "Muito baixa");
        assert_eq!(literacy_profile(0).title, "Muito baixa");
    }

    #[test]
    fn average_classification_boundaries_round_up() {
        assert_eq!(classify_average(7.0), RiskLevel::High);
        assert_eq!(classify_average(5.5), RiskLevel::High);
        assert_eq!(classify_average(5.4), RiskLevel::Medium);
        assert_eq!(classify_average(3.5), RiskLevel::Medium);
        assert_eq!(classify_average(3.4), RiskLevel::Low);
        assert_eq!(classify_average(1.0), RiskLevel::Low);
        assert_eq!(classify_average(0.0), RiskLevel::Low);
    }
}
