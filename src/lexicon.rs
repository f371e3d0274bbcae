//! Weighted emotional lexicon.
//!
//! Each [`Category`] owns a list of themed keyword groups. A group's
//! [`Subcategory`] fixes its salience weight; the weights are hand-tuned and
//! shared by every category.

use serde::{Serialize, Serializer};

/// A scored emotion, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Anxiety,
    Sadness,
    Anger,
    Fear,
    Sleep,
    Calm,
    Joy,
    Confusion,
    Guilt,
    Stress,
}

impl Category {
    /// All categories in scoring order. Ties go to the earlier entry.
    pub const ALL: [Category; 10] = [
        Category::Anxiety,
        Category::Sadness,
        Category::Anger,
        Category::Fear,
        Category::Sleep,
        Category::Calm,
        Category::Joy,
        Category::Confusion,
        Category::Guilt,
        Category::Stress,
    ];

    /// Lexicon identifier, also used as the emotion label.
    pub fn id(self) -> &'static str {
        match self {
            Category::Anxiety => "ansiedade",
            Category::Sadness => "tristeza",
            Category::Anger => "raiva",
            Category::Fear => "medo",
            Category::Sleep => "sono",
            Category::Calm => "calma",
            Category::Joy => "alegria",
            Category::Confusion => "confusao",
            Category::Guilt => "culpa",
            Category::Stress => "estresse",
        }
    }

    /// Keyword groups for this category.
    pub fn keywords(self) -> &'static [(Subcategory, &'static [&'static str])] {
        match self {
            Category::Anxiety => ANXIETY,
            Category::Sadness => SADNESS,
            Category::Anger => ANGER,
            Category::Fear => FEAR,
            Category::Sleep => SLEEP,
            Category::Calm => CALM,
            Category::Joy => JOY,
            Category::Confusion => CONFUSION,
            Category::Guilt => GUILT,
            Category::Stress => STRESS,
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Themed keyword group within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcategory {
    Primary,
    Colloquial,
    Somatic,
    Thoughts,
    Crisis,
    Loneliness,
    Grief,
    Triggers,
    Frustration,
    Specific,
    Insecurity,
    Quality,
    Causes,
    Fatigue,
    Positive,
    Achievements,
    Expressions,
    Gratitude,
    Love,
    Existential,
    Decision,
    Work,
    Life,
}

impl Subcategory {
    /// Salience weight added per matching keyword.
    pub fn weight(self) -> u8 {
        match self {
            Subcategory::Crisis => 5,
            Subcategory::Somatic => 4,
            Subcategory::Primary
            | Subcategory::Loneliness
            | Subcategory::Grief
            | Subcategory::Specific
            | Subcategory::Fatigue
            | Subcategory::Positive
            | Subcategory::Achievements
            | Subcategory::Gratitude
            | Subcategory::Love => 3,
            Subcategory::Colloquial
            | Subcategory::Thoughts
            | Subcategory::Triggers
            | Subcategory::Frustration
            | Subcategory::Insecurity
            | Subcategory::Quality
            | Subcategory::Causes
            | Subcategory::Expressions
            | Subcategory::Existential
            | Subcategory::Decision
            | Subcategory::Work
            | Subcategory::Life => 2,
        }
    }
}

type Groups = &'static [(Subcategory, &'static [&'static str])];

const ANXIETY: Groups = &[
    (
        Subcategory::Primary,
        &[
            "ansioso", "ansiosa", "ansiedade", "nervoso", "nervosa", "tenso", "tensa",
            "apreensivo", "apreensiva", "aflito", "aflita", "angustiado", "angustiada",
            "agitado", "agitada", "inquieto", "inquieta", "preocupado", "preocupada",
        ],
    ),
    (
        Subcategory::Colloquial,
        &[
            "pilhado", "pilhada", "ligado", "ligada", "elétrico", "elétrica",
            "a mil", "mil por hora", "não paro", "acelerado", "acelerada",
            "noiado", "noiada", "paranóico", "paranoica", "surtando", "pirando",
            "passando mal", "mal estar", "ruim", "estranho", "estranha",
        ],
    ),
    (
        Subcategory::Somatic,
        &[
            "coração acelerado", "coração disparado", "coração batendo forte",
            "taquicardia", "suando", "suor frio", "mãos suando", "tremendo",
            "aperto no peito", "peito apertado", "dor no peito", "falta de ar",
            "não consigo respirar", "sufocando", "formigando", "formigamento",
            "tontura", "tonto", "tonta", "enjoo", "náusea", "boca seca",
            "tensão muscular", "ombros tensos", "mandíbula travada", "dor de cabeça",
        ],
    ),
    (
        Subcategory::Thoughts,
        &[
            "vai dar errado", "e se", "não vai dar certo", "preocupado com",
            "não consigo parar de pensar", "pensando demais", "mente acelerada",
            "não sai da minha cabeça", "pensamento intrusivo", "ruminando",
            "catastrofizando", "imaginando o pior", "antecipando", "medo de",
        ],
    ),
    (
        Subcategory::Crisis,
        &[
            "pânico", "ataque de pânico", "crise de ansiedade", "crise de pânico",
            "desespero", "desesperado", "desesperada", "vou morrer", "morrendo",
            "infarto", "enfartando", "enlouquecer", "enlouquecendo", "ficando louco",
            "perder o controle", "perdendo o controle", "surtar", "surtando",
            "não aguento", "não suporto", "socorro", "me ajuda", "ajuda",
        ],
    ),
];

const SADNESS: Groups = &[
    (
        Subcategory::Primary,
        &[
            "triste", "tristeza", "deprimido", "deprimida", "depressão", "depressivo",
            "pra baixo", "para baixo", "desanimado", "desanimada", "melancólico",
            "melancólica", "abatido", "abatida", "desalentado", "desalentada",
            "sem ânimo", "sem vontade", "desmotivado", "desmotivada",
        ],
    ),
    (
        Subcategory::Colloquial,
        &[
            "na fossa", "fossa", "down", "mal", "péssimo", "péssima", "horrível",
            "uma merda", "uma porcaria", "lixo", "me sentindo lixo", "fracassado",
            "fracassada", "inútil", "imprestável", "não sirvo pra nada",
        ],
    ),
    (
        Subcategory::Somatic,
        &[
            "sem energia", "exausto", "exausta", "cansado", "cansada", "peso",
            "pesado", "pesada", "vazio", "vazia", "oco", "oca", "apático",
            "apática", "letárgico", "letárgica", "arrastando", "corpo pesado",
            "não consigo levantar", "sem forças",
        ],
    ),
    (
        Subcategory::Thoughts,
        &[
            "não tenho vontade", "pra que", "pra quê", "nada faz sentido",
            "sem sentido", "não importa", "tanto faz", "dane-se", "foda-se",
            "ninguém liga", "ninguém se importa", "não faz diferença",
            "nunca vai mudar", "sempre assim", "não tem jeito", "sem esperança",
        ],
    ),
    (
        Subcategory::Loneliness,
        &[
            "sozinho", "sozinha", "solitário", "solitária", "isolado", "isolada",
            "abandonado", "abandonada", "rejeitado", "rejeitada", "excluído", "excluída",
            "ninguém me entende", "incompreendido", "incompreendida", "sem amigos",
            "invisível", "ignorado", "ignorada", "esquecido", "esquecida",
            "não tenho ninguém", "não tenho com quem conversar",
        ],
    ),
    (
        Subcategory::Grief,
        &[
            "perdi", "perda", "luto", "morreu", "faleceu", "saudade", "falta",
            "sinto falta", "queria que estivesse aqui", "nunca mais vou ver",
        ],
    ),
    (
        Subcategory::Crisis,
        &[
            "não aguento mais", "cansei", "cansei de tudo", "quero sumir",
            "queria sumir", "desaparecer", "quero desistir", "vou desistir",
            "não vale a pena", "não quero mais", "acabou pra mim",
        ],
    ),
];

const ANGER: Groups = &[
    (
        Subcategory::Primary,
        &[
            "raiva", "irritado", "irritada", "bravo", "brava", "furioso", "furiosa",
            "com ódio", "ódio", "indignado", "indignada", "revoltado", "revoltada",
            "irado", "irada", "enfurecido", "enfurecida",
        ],
    ),
    (
        Subcategory::Colloquial,
        &[
            "puto", "puta", "putasso", "de saco cheio", "estressado", "estressada",
            "no limite", "explodindo", "a ponto de explodir", "perdendo a paciência",
            "sem paciência", "não aguento mais isso", "chega", "basta",
        ],
    ),
    (
        Subcategory::Triggers,
        &[
            "injusto", "injusta", "injustiça", "não é justo", "cansei de",
            "sempre eu", "ninguém ajuda", "abusando", "abuso", "desrespeito",
            "falta de respeito", "humilhado", "humilhada", "traído", "traída",
            "mentira", "mentiram", "enganado", "enganada",
        ],
    ),
    (
        Subcategory::Frustration,
        &[
            "frustrado", "frustrada", "frustração", "não consigo", "impossível",
            "não dá", "deu errado", "falhou", "fracassei", "não funcionou",
            "travado", "travada", "empacado", "empacada", "bloqueado", "bloqueada",
        ],
    ),
];

const FEAR: Groups = &[
    (
        Subcategory::Primary,
        &[
            "medo", "com medo", "assustado", "assustada", "apavorado", "apavorada",
            "aterrorizado", "aterrorizada", "temor", "receio", "receoso", "receosa",
            "amedrontado", "amedrontada",
        ],
    ),
    (
        Subcategory::Specific,
        &[
            "fobia", "pavor", "horror", "pânico de", "medo de morrer",
            "medo de ficar louco", "medo de perder o controle", "medo do futuro",
            "medo de ficar sozinho", "medo de falhar", "medo de errar",
        ],
    ),
    (
        Subcategory::Insecurity,
        &[
            "inseguro", "insegura", "insegurança", "vulnerável", "frágil",
            "exposto", "exposta", "desprotegido", "desprotegida", "em perigo",
            "ameaçado", "ameaçada",
        ],
    ),
];

const SLEEP: Groups = &[
    (
        Subcategory::Primary,
        &[
            "insônia", "não durmo", "sem sono", "acordado", "acordada",
            "não consigo dormir", "dificuldade pra dormir", "dificuldade para dormir",
        ],
    ),
    (
        Subcategory::Colloquial,
        &[
            "virado", "virada", "não prego o olho", "revirando na cama",
            "olho arregalado", "não vem o sono", "fugiu o sono",
        ],
    ),
    (
        Subcategory::Quality,
        &[
            "dormindo mal", "sono ruim", "acordo várias vezes", "acordo no meio da noite",
            "pesadelos", "pesadelo", "sonho ruim", "sono leve", "não descanso",
            "acordo cansado", "acordo cansada", "noite mal dormida",
        ],
    ),
    (
        Subcategory::Causes,
        &[
            "pensando demais", "mente não para", "não desligo", "preocupações",
            "ansiedade na hora de dormir", "medo de dormir", "medo do escuro",
        ],
    ),
    (
        Subcategory::Fatigue,
        &[
            "exausto", "exausta", "morto de cansaço", "morta de cansaço",
            "esgotado", "esgotada", "destruído", "destruída", "acabado", "acabada",
            "precisando dormir", "preciso descansar", "não aguento de sono",
        ],
    ),
];

const CALM: Groups = &[
    (
        Subcategory::Primary,
        &[
            "calmo", "calma", "tranquilo", "tranquila", "em paz", "paz",
            "sereno", "serena", "relaxado", "relaxada", "zen", "centrado", "centrada",
        ],
    ),
    (
        Subcategory::Positive,
        &[
            "bem", "melhor", "aliviado", "aliviada", "leve", "descansado", "descansada",
            "renovado", "renovada", "revigorado", "revigorada", "equilibrado", "equilibrada",
        ],
    ),
    (
        Subcategory::Achievements,
        &[
            "consegui", "superei", "venci", "passou", "melhorou", "está passando",
            "estou conseguindo", "deu certo", "funcionou",
        ],
    ),
];

const JOY: Groups = &[
    (
        Subcategory::Primary,
        &[
            "feliz", "alegre", "contente", "animado", "animada", "empolgado", "empolgada",
            "entusiasmado", "entusiasmada", "radiante", "vibrante", "eufórico", "eufórica",
        ],
    ),
    (
        Subcategory::Expressions,
        &[
            "muito bom", "ótimo", "ótima", "maravilhoso", "maravilhosa", "incrível",
            "fantástico", "fantástica", "sensacional", "demais", "top", "perfeito", "perfeita",
        ],
    ),
    (
        Subcategory::Gratitude,
        &[
            "grato", "grata", "gratidão", "agradeço", "obrigado", "obrigada",
            "abençoado", "abençoada", "sortudo", "sortuda", "privilegiado", "privilegiada",
        ],
    ),
    (
        Subcategory::Love,
        &[
            "amor", "amado", "amada", "querido", "querida", "acolhido", "acolhida",
            "abraçado", "abraçada", "carinho", "afeto", "conexão", "pertencimento",
        ],
    ),
];

const CONFUSION: Groups = &[
    (
        Subcategory::Primary,
        &[
            "confuso", "confusa", "perdido", "perdida", "sem rumo", "desorientado",
            "desorientada", "não sei", "não entendo", "não faço ideia",
        ],
    ),
    (
        Subcategory::Existential,
        &[
            "sentido da vida", "propósito", "por que estou aqui", "qual o sentido",
            "crise existencial", "quem eu sou", "o que fazer da vida",
        ],
    ),
    (
        Subcategory::Decision,
        &[
            "não sei o que fazer", "indeciso", "indecisa", "dúvida", "em dúvida",
            "não sei escolher", "difícil decidir", "muitas opções",
        ],
    ),
];

const GUILT: Groups = &[
    (
        Subcategory::Primary,
        &[
            "culpa", "culpado", "culpada", "me culpo", "arrependido", "arrependida",
            "remorso", "vergonha", "envergonhado", "envergonhada",
        ],
    ),
    (
        Subcategory::Expressions,
        &[
            "não devia ter", "me arrependo", "foi minha culpa", "estraguei tudo",
            "fiz besteira", "fiz merda", "magoei", "machuquei", "erro meu",
            "devia ter feito diferente", "se eu tivesse",
        ],
    ),
];

const STRESS: Groups = &[
    (
        Subcategory::Primary,
        &[
            "estressado", "estressada", "estresse", "stress", "sobrecarregado",
            "sobrecarregada", "overwhelmed", "sufocado", "sufocada",
        ],
    ),
    (
        Subcategory::Work,
        &[
            "trabalho demais", "muito trabalho", "deadline", "prazo", "cobrança",
            "pressão", "chefe", "reunião", "demanda", "burnout", "esgotamento profissional",
        ],
    ),
    (
        Subcategory::Life,
        &[
            "muita coisa", "não dou conta", "não consigo dar conta", "acumulando",
            "pilha de coisas", "mil coisas", "correria", "loucura", "caos",
        ],
    ),
];
