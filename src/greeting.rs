//! Time-of-day greetings.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl DayPeriod {
    /// Buckets a 24h clock hour: [5,12) morning, [12,18) afternoon,
    /// [18,23) evening, anything else late night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            18..=22 => DayPeriod::Evening,
            _ => DayPeriod::LateNight,
        }
    }

    /// Opening lines when the assistant speaks first.
    pub fn openers(self) -> &'static [&'static str] {
        match self {
            DayPeriod::Morning => &[
                "Bom dia! Como você está se sentindo hoje?",
                "Bom dia! Que bom te ver. Como você está?",
                "Bom dia! Estou aqui para você. Como está se sentindo?",
            ],
            DayPeriod::Afternoon => &[
                "Boa tarde! Como está sendo o seu dia?",
                "Boa tarde! Vejo que você voltou. Como está se sentindo?",
                "Boa tarde! Estou aqui. Como você está?",
            ],
            DayPeriod::Evening => &[
                "Boa noite! Como você está se sentindo?",
                "Boa noite! Como foi o seu dia?",
                "Boa noite! Estou aqui se precisar conversar.",
            ],
            DayPeriod::LateNight => &[
                "Oi! O sono não veio, né? Estou aqui com você.",
                "Oi! Noite difícil? Posso te ajudar.",
                "Olá! Não consegue dormir? Vamos ver como posso ajudar.",
            ],
        }
    }

    /// Replies when the user greets first.
    pub fn replies(self) -> &'static [&'static str] {
        match self {
            DayPeriod::Morning => &[
                "Bom dia! Como você está se sentindo hoje?",
                "Bom dia! Que bom te ver por aqui. Como está?",
                "Olá! Bom dia. Em que posso te ajudar hoje?",
            ],
            DayPeriod::Afternoon => &[
                "Boa tarde! Como está sendo seu dia?",
                "Olá! Boa tarde. Como você está?",
                "Boa tarde! Tudo bem com você?",
            ],
            DayPeriod::Evening => &[
                "Boa noite! Como você está se sentindo?",
                "Olá! Boa noite. Como foi seu dia?",
                "Boa noite! Estou aqui se precisar.",
            ],
            DayPeriod::LateNight => &[
                "Oi! O sono não veio, né? Estou aqui se quiser conversar.",
                "Olá! Noite difícil? Posso te ajudar com algo.",
                "Oi. Insônia? Vamos ver se consigo te ajudar a relaxar.",
            ],
        }
    }
}

/// Picks one template uniformly. Empty banks yield an empty string.
pub fn pick<R: Rng + ?Sized>(bank: &[&'static str], rng: &mut R) -> &'static str {
    bank.choose(rng).copied().unwrap_or_default()
}

/// Proactive greeting for the given hour.
pub fn greeting<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> &'static str {
    pick(DayPeriod::from_hour(hour).openers(), rng)
}

/// Reply to a user's greeting at the given hour.
pub fn greeting_reply<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> &'static str {
    pick(DayPeriod::from_hour(hour).replies(), rng)
}
