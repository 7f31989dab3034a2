use crate::assessments::domain::{InventoryItem, RiskDomain, RiskLevel};

pub const ITEM_COUNT: usize = 30;
pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 7;

/// Instruction shown above every inventory item.
pub const RESPONSE_INSTRUCTION: &str =
    "Indique a probabilidade de sua ação em cada situação, utilizando a escala de 1 (Extremamente Improvável) a 7 (Extremamente Provável).";

/// The 30 risk-taking statements in presentation order.
pub fn items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            domain: RiskDomain::Social,
            text: "Admitir que seus gostos são diferentes dos de um(a) amigo(a).",
        },
        InventoryItem {
            id: 2,
            domain: RiskDomain::Recreational,
            text: "Acampar em uma área selvagem.",
        },
        InventoryItem {
            id: 3,
            domain: RiskDomain::Financial,
            text: "Apostar o equivalente a um dia de salário em corridas de cavalo.",
        },
        InventoryItem {
            id: 4,
            domain: RiskDomain::Financial,
            text: "Investir 10% de sua renda anual em um fundo de investimento diversificado de crescimento moderado.",
        },
        InventoryItem {
            id: 5,
            domain: RiskDomain::HealthSafety,
            text: "Beber excessivamente em um evento social.",
        },
        InventoryItem {
            id: 6,
            domain: RiskDomain::Ethical,
            text: "Fazer algumas deduções questionáveis na sua declaração de imposto de renda.",
        },
        InventoryItem {
            id: 7,
            domain: RiskDomain::Social,
            text: "Discordar de uma figura de autoridade sobre um assunto importante.",
        },
        InventoryItem {
            id: 8,
            domain: RiskDomain::Financial,
            text: "Apostar o equivalente a um dia de salário em um jogo de pôquer de altas apostas.",
        },
        InventoryItem {
            id: 9,
            domain: RiskDomain::Ethical,
            text: "Ter um caso com uma pessoa casada.",
        },
        InventoryItem {
            id: 10,
            domain: RiskDomain::Ethical,
            text: "Apresentar o trabalho de outra pessoa como se fosse seu.",
        },
        InventoryItem {
            id: 11,
            domain: RiskDomain::Recreational,
            text: "Descer uma trilha de mountain bike que está além da sua habilidade.",
        },
        InventoryItem {
            id: 12,
            domain: RiskDomain::Financial,
            text: "Investir 5% de sua renda anual em uma ação muito especulativa.",
        },
        InventoryItem {
            id: 13,
            domain: RiskDomain::Recreational,
            text: "Fazer rafting em corredeiras com correnteza forte.",
        },
        InventoryItem {
            id: 14,
            domain: RiskDomain::Financial,
            text: "Apostar o equivalente a um dia de salário no resultado de um evento esportivo.",
        },
        InventoryItem {
            id: 15,
            domain: RiskDomain::HealthSafety,
            text: "Praticar sexo sem proteção.",
        },
        InventoryItem {
            id: 16,
            domain: RiskDomain::Ethical,
            text: "Revelar o segredo de um(a) amigo(a) para outra pessoa.",
        },
        InventoryItem {
            id: 17,
            domain: RiskDomain::HealthSafety,
            text: "Dirigir um carro sem usar cinto de segurança.",
        },
        InventoryItem {
            id: 18,
            domain: RiskDomain::Financial,
            text: "Investir 10% de sua renda anual em um novo empreendimento.",
        },
        InventoryItem {
            id: 19,
            domain: RiskDomain::Recreational,
            text: "Fazer uma aula de paraquedismo.",
        },
        InventoryItem {
            id: 20,
            domain: RiskDomain::HealthSafety,
            text: "Andar de motocicleta sem capacete.",
        },
        InventoryItem {
            id: 21,
            domain: RiskDomain::Social,
            text: "Escolher uma carreira que você realmente gosta em vez de uma que ofereça mais segurança ou prestígio.",
        },
        InventoryItem {
            id: 22,
            domain: RiskDomain::Social,
            text: "Expressar sua opinião sobre um assunto polêmico em uma reunião de trabalho.",
        },
        InventoryItem {
            id: 23,
            domain: RiskDomain::HealthSafety,
            text: "Tomar sol sem usar protetor solar.",
        },
        InventoryItem {
            id: 24,
            domain: RiskDomain::Recreational,
            text: "Pular de bungee-jumping de uma ponte alta.",
        },
        InventoryItem {
            id: 25,
            domain: RiskDomain::Recreational,
            text: "Pilotar um avião de pequeno porte.",
        },
        InventoryItem {
            id: 26,
            domain: RiskDomain::HealthSafety,
            text: "Andar para casa sozinho(a) à noite em uma área perigosa da cidade.",
        },
        InventoryItem {
            id: 27,
            domain: RiskDomain::Social,
            text: "Mudar-se para uma cidade ou estado longe de sua família.",
        },
        InventoryItem {
            id: 28,
            domain: RiskDomain::Social,
            text: "Iniciar uma nova carreira aos 35 anos.",
        },
        InventoryItem {
            id: 29,
            domain: RiskDomain::Ethical,
            text: "Deixar seus filhos pequenos sozinhos em casa enquanto sai para resolver algo rápido.",
        },
        InventoryItem {
            id: 30,
            domain: RiskDomain::Ethical,
            text: "Não devolver uma carteira encontrada que contém R$ 500.",
        },
    ]
}

/// Fixed item membership per domain. Every domain owns exactly six items.
pub const fn domain_items(domain: RiskDomain) -> [u8; 6] {
    match domain {
        RiskDomain::Ethical => [6, 9, 10, 16, 29, 30],
        RiskDomain::Financial => [3, 4, 8, 12, 14, 18],
        RiskDomain::HealthSafety => [5, 15, 17, 20, 23, 26],
        RiskDomain::Recreational => [2, 11, 13, 19, 24, 25],
        RiskDomain::Social => [1, 7, 21, 22, 27, 28],
    }
}

/// Verbal anchor for each scale point.
pub const fn anchor(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("Extremamente improvável"),
        2 => Some("Moderadamente improvável"),
        3 => Some("Um pouco improvável"),
        4 => Some("Nem improvável nem provável"),
        5 => Some("Um pouco provável"),
        6 => Some("Moderadamente provável"),
        7 => Some("Extremamente provável"),
        _ => None,
    }
}

/// Narrative interpretation for a domain at a given likelihood band.
pub const fn interpretation(domain: RiskDomain, level: RiskLevel) -> &'static str {
    match (domain, level) {
        (RiskDomain::Ethical, RiskLevel::High) => {
            "No domínio ético, você parece tolerar comportamentos que envolvem quebra de normas sociais ou morais. Há tendência a aceitar riscos reputacionais, priorizando ganhos pessoais mesmo em situações eticamente questionáveis, como omitir informações ou apropriar-se de crédito alheio."
        }
        (RiskDomain::Ethical, RiskLevel::Medium) => {
            "No domínio ético, você parece respeitar regras e convenções, mas com certa flexibilidade em contextos específicos. Há tendência a relativizar condutas morais diante de dilemas práticos, o que indica disposição para equilibrar princípios e benefícios imediatos."
        }
        (RiskDomain::Ethical, RiskLevel::Low) => {
            "No domínio ético, você parece valorizar rigidamente normas sociais e morais. Evita transgressões como enganar, trapacear ou explorar situações em benefício próprio, demonstrando tendência a preservar integridade e reputação pessoal. Essa postura sugere forte preocupação com imagem pública e confiança nas relações."
        }
        (RiskDomain::Financial, RiskLevel::High) => {
            "No domínio financeiro, você parece inclinado a assumir riscos significativos. Há tendência a investir em ativos especulativos, participar de apostas ou aplicar recursos em empreendimentos incertos, aceitando alta variabilidade nos resultados em busca de maiores ganhos."
        }
        (RiskDomain::Financial, RiskLevel::Medium) => {
            "No domínio financeiro, você parece moderadamente aberto a riscos. Demonstra tendência a aceitar investimentos diversificados ou novos negócios de forma controlada, avaliando cuidadosamente custos e benefícios antes de se expor a perdas potenciais."
        }
        (RiskDomain::Financial, RiskLevel::Low) => {
            "No domínio financeiro, você parece conservador. Evita apostas ou investimentos de alto risco, como ações especulativas ou criptomoedas voláteis, e tende a privilegiar segurança e estabilidade em decisões econômicas. Existe tendência a proteger o patrimônio em vez de buscar retornos elevados."
        }
        (RiskDomain::HealthSafety, RiskLevel::High) => {
            "No domínio saúde/segurança, você parece tolerar riscos físicos elevados. Demonstra tendência a se envolver em comportamentos perigosos sem medidas de proteção adequadas, aceitando potenciais consequências negativas para saúde e segurança pessoal."
        }
        (RiskDomain::HealthSafety, RiskLevel::Medium) => {
            "No domínio saúde/segurança, você parece alternar entre cuidados consistentes e comportamentos de risco moderado. Demonstra tendência a se expor em algumas situações, como consumo excessivo de álcool ou trânsito em locais inseguros, mas mantendo certo equilíbrio no cotidiano."
        }
        (RiskDomain::HealthSafety, RiskLevel::Low) => {
            "No domínio saúde/segurança, você parece adotar postura preventiva. Evita práticas como dirigir sem cinto, praticar sexo sem proteção ou frequentar áreas perigosas, demonstrando tendência a priorizar integridade física e longevidade."
        }
        (RiskDomain::Recreational, RiskLevel::High) => {
            "No domínio recreativo, você parece inclinado a experiências intensas e radicais. Demonstra forte tendência a participar de atividades como paraquedismo, bungee-jumping ou rafting, valorizando emoção, adrenalina e novidade como elementos centrais do lazer."
        }
        (RiskDomain::Recreational, RiskLevel::Medium) => {
            "No domínio recreativo, você parece buscar novidade em níveis moderados. Demonstra tendência a participar de atividades que envolvem desafio controlado, como trilhas, esportes supervisionados ou viagens a locais menos comuns."
        }
        (RiskDomain::Recreational, RiskLevel::Low) => {
            "No domínio recreativo, você parece preferir lazer seguro e previsível. Demonstra tendência a escolher atividades de baixo risco, como caminhadas, leitura ou práticas culturais, evitando esportes radicais ou experiências imprevisíveis."
        }
        (RiskDomain::Social, RiskLevel::High) => {
            "No domínio social, você parece inclinado a se expor e afirmar posições com firmeza. Demonstra tendência a confrontar autoridades, mudar de carreira ou ambiente social com facilidade e valorizar autenticidade e independência, mesmo diante de críticas ou oposição."
        }
        (RiskDomain::Social, RiskLevel::Medium) => {
            "No domínio social, você parece equilibrado. Demonstra tendência a se posicionar quando necessário, expressando opiniões de forma assertiva, mas sem exageros confrontativos, ajustando seu comportamento ao contexto."
        }
        (RiskDomain::Social, RiskLevel::Low) => {
            "No domínio social, você parece adotar postura cautelosa. Demonstra tendência a evitar conflitos e preservar a harmonia em interações, mesmo que precise silenciar opiniões pessoais ou evitar confrontos com autoridades."
        }
    }
}
