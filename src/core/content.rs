//! Static page content
//!
//! Every record here is an immutable literal created once at startup. Sections
//! render them read-only and never mutate them.

/// Product name as rendered in the navbar, hero and footer.
pub const BRAND_NAME: &str = "HADASSA";
/// Accent suffix rendered after the brand name.
pub const BRAND_SUFFIX: &str = "IA";
/// Full product name for metadata and structured data.
pub const PRODUCT_NAME: &str = "Hadassa IA";

pub const COPYRIGHT: &str = "© 2024 HADASSA IA — CNPJ: XX.XXX.XXX/0001-XX";

pub const RISK_DISCLAIMER: &str = "Aviso: O mercado financeiro envolve riscos. Resultados passados não garantem lucros futuros. O uso de robôs de investimento não elimina o risco de perda de capital. Utilize sempre um gerenciamento de risco adequado às suas condições financeiras.";

/// Icons the content records may reference.
///
/// Rendering lives in `ui::icon`; content only names the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    ArrowRight,
    Award,
    BarChart,
    Brain,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    Clock,
    Cpu,
    Lock,
    MessageCircle,
    ShieldCheck,
    Target,
    TrendingUp,
    XCircle,
    Zap,
}

/// Benefit card shown in the features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// One row of the manual vs. automated comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub manual_value: &'static str,
    pub automated_value: &'static str,
}

/// Methodology step; `ordinal` is zero-padded ("01", "02", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodologyStep {
    pub ordinal: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Guarantee badge displayed under the hero call to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustBadge {
    pub icon: IconKind,
    pub label: &'static str,
}

/// Copy for a section heading block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const HERO_EYEBROW: &str = "Automação Profissional MT5";
pub const HERO_CTA_LABEL: &str = "QUERO ACESSO IMEDIATO";
pub const NAV_CTA_LABEL: &str = "ACESSAR AGORA";
pub const FINAL_CTA_LABEL: &str = "GARANTIR MEU ACESSO";
pub const CONTACT_LABEL: &str = "Testar Grátis";

pub const FEATURES_COPY: SectionCopy = SectionCopy {
    title: "Por que os Traders falham?",
    subtitle: "A maioria dos traders perde dinheiro por fatores humanos. A Hadassa IA elimina essas fraquezas.",
};

pub const COMPARISON_COPY: SectionCopy = SectionCopy {
    title: "Humano vs. Hadassa IA",
    subtitle: "A evolução do trading exige ferramentas que superem a capacidade humana.",
};

pub const METHODOLOGY_COPY: SectionCopy = SectionCopy {
    title: "Metodologia Fimathe Pura",
    subtitle: "O robô segue rigorosamente os princípios criados por Marcelo Ferreira.",
};

pub const FAQ_COPY: SectionCopy = SectionCopy {
    title: "FAQ",
    subtitle: "Tire suas dúvidas sobre o funcionamento do Hadassa IA.",
};

pub const FINAL_CTA_COPY: SectionCopy = SectionCopy {
    title: "Automatize sua estratégia hoje",
    subtitle: "Pare de lutar contra o mercado e comece a operar com a vantagem tecnológica que você merece.",
};

/// Column headers of the comparison table, in render order.
pub const COMPARISON_HEADERS: [&str; 3] = ["Funcionalidade", "Trader Manual", "Hadassa IA"];

pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        icon: IconKind::Brain,
        title: "Psicológico",
        description: "O medo de perder faz o humano hesitar. O Hadassa IA não tem sentimentos: ele apenas executa o plano matemático sem desvios.",
    },
    FeatureEntry {
        icon: IconKind::Clock,
        title: "Tempo Real",
        description: "Você não consegue monitorar múltiplos ativos simultaneamente. O robô faz isso 24 horas por dia, 5 dias por semana, sem cansaço.",
    },
    FeatureEntry {
        icon: IconKind::Target,
        title: "Cálculo Preciso",
        description: "Traçar canais e expansões manualmente gera erros de milímetros que custam caro. Na IA, a precisão é absoluta e instantânea.",
    },
];

pub const COMPARISON_ROWS: [ComparisonRow; 5] = [
    ComparisonRow {
        feature: "Cálculo de Canais Fimathe",
        manual_value: "Impreciso / Lento",
        automated_value: "Instantâneo",
    },
    ComparisonRow {
        feature: "Operação na Zona Neutra",
        manual_value: "Risco Emocional",
        automated_value: "Proteção Automática",
    },
    ComparisonRow {
        feature: "Monitoramento 24/5",
        manual_value: "Limitado (Sono)",
        automated_value: "100% do Tempo",
    },
    ComparisonRow {
        feature: "Gerenciamento de Risco",
        manual_value: "Indisciplinado",
        automated_value: "Rígido e Matemático",
    },
    ComparisonRow {
        feature: "Execução de Trailing Stop",
        manual_value: "Reativo / Atrasado",
        automated_value: "Ponto a Ponto",
    },
];

pub const METHODOLOGY_STEPS: [MethodologyStep; 4] = [
    MethodologyStep {
        ordinal: "01",
        title: "Mapeamento",
        description: "Identificação automática do Canal de Referência com base na volatilidade atual.",
        icon: IconKind::BarChart,
    },
    MethodologyStep {
        ordinal: "02",
        title: "Segurança",
        description: "Filtro inteligente de Zona Neutra para evitar falsos rompimentos e armadilhas.",
        icon: IconKind::ShieldCheck,
    },
    MethodologyStep {
        ordinal: "03",
        title: "Projeção",
        description: "Alvos matemáticos baseados em 50%, 100% e 200% da expansão Fimathe.",
        icon: IconKind::TrendingUp,
    },
    MethodologyStep {
        ordinal: "04",
        title: "Trailing",
        description: "Proteção de lucro móvel que avança conforme o preço atinge novos níveis.",
        icon: IconKind::Zap,
    },
];

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Funciona em quais ativos?",
        answer: "O Hadassa IA é versátil e funciona em qualquer ativo disponível no MetaTrader 5: HK50, Ouro (XAUUSD), Índices (Nasdaq, S&P500), Forex e até ativos da B3.",
    },
    FaqEntry {
        question: "Preciso de muito capital para começar?",
        answer: "Não. O robô é totalmente configurável. Você pode ajustar o tamanho do lote de acordo com sua banca, permitindo operar até em contas pequenas (Contas Cent ou Standard).",
    },
    FaqEntry {
        question: "O suporte ajuda na instalação?",
        answer: "Com certeza! Oferecemos tutoriais em vídeo passo a passo e disponibilizamos arquivos de configuração (.set) otimizados para os principais ativos.",
    },
    FaqEntry {
        question: "É uma licença única ou mensalidade?",
        answer: "Nesta oferta, você garante o acesso vitalício. Sem mensalidades, sem taxas ocultas. Pague uma vez e use para sempre.",
    },
];

pub const TRUST_BADGES: [TrustBadge; 3] = [
    TrustBadge {
        icon: IconKind::ShieldCheck,
        label: "Garantia de 7 Dias",
    },
    TrustBadge {
        icon: IconKind::Award,
        label: "Acesso Vitalício",
    },
    TrustBadge {
        icon: IconKind::Lock,
        label: "Licença Ilimitada",
    },
];
