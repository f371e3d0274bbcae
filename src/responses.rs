//! Empathetic response banks.

use crate::lexicon::Category;

/// A named position in a composed reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Validation,
    Comfort,
    LightAction,
    UrgentAction,
    Safety,
    Encouragement,
    Exploration,
}

/// Templates for one category slot. Empty when the category has no such slot.
pub fn category_bank(category: Category, slot: Slot) -> &'static [&'static str] {
    match (category, slot) {
        (Category::Anxiety, Slot::Validation) => &[
            "Faz sentido você se sentir assim. A ansiedade pode ser muito intensa.",
            "O que você está sentindo é real e válido.",
            "Eu entendo. Ansiedade é difícil de lidar.",
            "Seu corpo está respondendo a algo que percebe como ameaça. É uma reação natural, mesmo que desconfortável.",
            "É corajoso da sua parte reconhecer e falar sobre isso.",
        ],
        (Category::Anxiety, Slot::Comfort) => &[
            "Estou aqui com você.",
            "Vamos passar por isso juntos.",
            "Você não precisa enfrentar isso sozinho.",
            "Estou aqui, no seu tempo.",
        ],
        (Category::Anxiety, Slot::LightAction) => &[
            "Que tal respirarmos juntos? Só alguns minutos.",
            "Vamos tentar trazer você de volta ao presente?",
            "Posso te guiar em uma respiração que ajuda a acalmar.",
            "Quer experimentar um exercício rápido que pode aliviar?",
        ],
        (Category::Anxiety, Slot::UrgentAction) => &[
            "Vamos respirar agora. Inspire comigo... segure... e solte devagar.",
            "Foque na minha voz. Você está seguro. Vamos fazer o 4-7-8 juntos.",
            "Estou aqui. Vamos usar a técnica 5-4-3-2-1 para te ancorar no presente.",
        ],

        (Category::Sadness, Slot::Validation) => &[
            "Está tudo bem sentir tristeza. É uma emoção importante.",
            "A tristeza faz parte da vida. Não precisa lutar contra ela.",
            "O que você está sentindo é válido.",
            "Eu ouço você. Isso parece muito difícil.",
            "Ter dias assim faz parte. Não precisa se cobrar.",
        ],
        (Category::Sadness, Slot::Comfort) => &[
            "Estou aqui se precisar.",
            "Você não está sozinho nisso.",
            "Pode falar o que quiser. Estou ouvindo.",
            "Às vezes só precisamos de alguém que escute, sem julgamento.",
        ],
        (Category::Sadness, Slot::LightAction) => &[
            "Quer escrever um pouco sobre o que está sentindo? Pode ajudar.",
            "Que tal colocar isso em palavras no diário?",
            "Às vezes expressar ajuda a processar. Quer tentar?",
        ],

        (Category::Anger, Slot::Validation) => &[
            "Raiva é uma emoção válida. Faz sentido você sentir isso.",
            "O que você está sentindo é compreensível.",
            "Parece que algo te incomodou bastante.",
            "É natural sentir raiva diante de situações injustas.",
        ],
        (Category::Anger, Slot::Comfort) => &[
            "Estou aqui para ouvir, sem julgamento.",
            "Pode desabafar. É para isso que estou aqui.",
            "Às vezes precisamos colocar pra fora.",
        ],
        (Category::Anger, Slot::LightAction) => &[
            "Quer tentar uma respiração para ajudar a processar essa energia?",
            "Que tal escrever o que está sentindo? Pode ajudar a clarear.",
            "Respirar fundo pode ajudar a pensar com mais clareza depois.",
        ],

        (Category::Fear, Slot::Validation) => &[
            "Medo é uma emoção protetora. Seu corpo está tentando te cuidar.",
            "É normal sentir medo. Não precisa ter vergonha.",
            "O que você está sentindo faz sentido.",
            "Reconhecer o medo já é um passo corajoso.",
        ],
        (Category::Fear, Slot::Safety) => &[
            "Você está seguro agora.",
            "Neste momento, você está bem.",
            "Vamos focar no aqui e agora. Neste instante, você está a salvo.",
        ],
        (Category::Fear, Slot::LightAction) => &[
            "Vamos fazer um exercício de ancoragem para te trazer ao presente?",
            "A técnica 5-4-3-2-1 pode ajudar a se sentir mais no controle.",
            "Respirar devagar pode ajudar seu corpo a entender que está seguro.",
        ],

        (Category::Sleep, Slot::Validation) => &[
            "Insônia é muito difícil. Afeta tudo.",
            "Não conseguir dormir é frustrante, eu sei.",
            "O cansaço pesa, né? Faz sentido você estar esgotado.",
        ],
        (Category::Sleep, Slot::Comfort) => &[
            "Estou aqui para te ajudar a relaxar.",
            "Vamos tentar acalmar sua mente juntos.",
            "Não precisa forçar o sono. Vamos só relaxar.",
        ],
        (Category::Sleep, Slot::LightAction) => &[
            "Que tal uma meditação guiada para sono?",
            "Vamos relaxar seu corpo aos poucos?",
            "Uma respiração lenta pode preparar seu corpo para descansar.",
        ],

        (Category::Calm, Slot::Validation) => &[
            "Que bom saber que você está bem.",
            "Fico feliz em ouvir isso.",
            "Momentos de calma são preciosos. Aproveite.",
        ],
        (Category::Calm, Slot::Encouragement) => &[
            "Você está fazendo um ótimo trabalho cuidando de si.",
            "Continue se ouvindo assim.",
            "Essa consciência sobre si mesmo é valiosa.",
        ],

        (Category::Joy, Slot::Validation) => &[
            "Que maravilha! Fico muito feliz por você.",
            "Isso é ótimo de ouvir!",
            "Momentos assim são especiais. Que bom que está vivendo isso.",
        ],
        (Category::Joy, Slot::Encouragement) => &[
            "Você merece se sentir bem.",
            "Aproveite esse momento. Você trabalhou para isso.",
            "A alegria também faz parte do processo. Celebre!",
        ],

        (Category::Confusion, Slot::Validation) => &[
            "Não ter certeza sobre os próprios sentimentos é comum.",
            "Às vezes as emoções são confusas mesmo. Está tudo bem.",
            "Não precisamos rotular tudo. Às vezes só sentimos.",
        ],
        (Category::Confusion, Slot::Comfort) => &[
            "Estou aqui para ajudar você a explorar o que está sentindo.",
            "Vamos descobrir juntos, no seu tempo.",
            "Não precisa ter todas as respostas agora.",
        ],
        (Category::Confusion, Slot::Exploration) => &[
            "Como seu corpo está se sentindo fisicamente agora?",
            "Se fosse dar uma cor para o que sente, qual seria?",
            "O que você gostaria de sentir agora?",
        ],

        (Category::Guilt, Slot::Validation) => &[
            "Culpa é um sentimento pesado. Entendo.",
            "Errar faz parte de ser humano. Não significa que você é ruim.",
            "Reconhecer o erro já mostra consciência. Isso é positivo.",
        ],
        (Category::Guilt, Slot::Comfort) => &[
            "Você não é seus erros.",
            "Todo mundo falha às vezes. Isso não te define.",
            "Se perdoar é difícil, mas importante.",
        ],

        (Category::Stress, Slot::Validation) => &[
            "Parece que tem muita coisa acontecendo. É compreensível se sentir sobrecarregado.",
            "Estresse constante é esgotante. Você não está exagerando.",
            "É muita coisa para uma pessoa só dar conta.",
        ],
        (Category::Stress, Slot::Comfort) => &[
            "Você não precisa resolver tudo agora.",
            "Uma coisa de cada vez.",
            "Está tudo bem fazer uma pausa.",
        ],
        (Category::Stress, Slot::LightAction) => &[
            "Vamos respirar um pouco? Pode ajudar a clarear a mente.",
            "Que tal pausar por 5 minutos para descomprimir?",
            "Um exercício de respiração pode te ajudar a pensar melhor depois.",
        ],

        _ => &[],
    }
}

pub const CRISIS_COMFORT: &[&str] = &[
    "Estou aqui com você. Você não está sozinho.",
    "Eu ouço você. Isso parece muito difícil.",
    "Obrigado por me contar. Isso foi corajoso.",
];

pub const CRISIS_SAFETY: &[&str] = &[
    "Você está seguro comigo agora.",
    "Vamos passar por esse momento juntos.",
    "Um passo de cada vez. Agora, só respira comigo.",
];

pub const CRISIS_ACTION: &[&str] = &[
    "Vamos focar apenas na respiração agora. Inspire... e expire...",
    "Olhe ao seu redor. Você está no presente. Está seguro.",
    "Vamos fazer o 5-4-3-2-1 juntos para te ancorar.",
];

/// Hotline information, used only when self-harm language was detected.
pub const CRISIS_RESOURCES: &[&str] = &[
    "Se você está pensando em se machucar, por favor ligue para o CVV: 188.",
    "O CVV (188) está disponível 24 horas. Eles podem ajudar.",
    "Você importa. Por favor, considere ligar para o 188 ou ir a uma emergência.",
];

pub const FAREWELL: &[&str] = &[
    "Cuide-se! Volte quando precisar.",
    "Até mais! Estarei aqui quando você quiser.",
    "Boa noite! Durma bem.",
    "Tchau! Foi bom conversar com você.",
    "Até logo! Lembre-se: você não está sozinho.",
];

pub const GRATITUDE: &[&str] = &[
    "Fico feliz em poder ajudar!",
    "É para isso que estou aqui. Sempre que precisar.",
    "Que bom que ajudou! Volte quando quiser.",
    "Obrigado por confiar em mim.",
];

pub const NOT_UNDERSTOOD: &[&str] = &[
    "Hmm, não tenho certeza se entendi. Pode me contar mais?",
    "Estou aqui para ouvir. Como você está se sentindo?",
    "Pode me explicar melhor o que está sentindo?",
    "Conte-me mais sobre o que está passando.",
    "Estou ouvindo. O que está acontecendo com você?",
];

pub const ABOUT_ASSISTANT: &[&str] = &[
    "Sou um assistente do Calm Mind, aqui para te acompanhar em momentos difíceis. Como posso ajudar?",
    "Sou parte do Calm Mind, criado para oferecer acolhimento e exercícios de bem-estar. Como você está?",
    "Sou seu companheiro aqui no Calm Mind. Não sou terapeuta, mas posso te ouvir e sugerir exercícios. Como está se sentindo?",
];

pub const CONVERSATIONAL: &str =
    "Estou aqui para ouvir você. Pode falar o que quiser, sem julgamento. O que está passando pela sua cabeça?";
