//! Intent detectors evaluated against the raw, un-normalized input.

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named intent detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternRule {
    HelpSeeking,
    CrisisSevere,
    WantsToTalk,
    Gratitude,
    Greeting,
    Farewell,
    AboutAssistant,
    Reflective,
    TimeAcute,
    TimeRecurring,
    TimePast,
}

const RULE_COUNT: usize = 11;

impl PatternRule {
    pub const ALL: [PatternRule; RULE_COUNT] = [
        PatternRule::HelpSeeking,
        PatternRule::CrisisSevere,
        PatternRule::WantsToTalk,
        PatternRule::Gratitude,
        PatternRule::Greeting,
        PatternRule::Farewell,
        PatternRule::AboutAssistant,
        PatternRule::Reflective,
        PatternRule::TimeAcute,
        PatternRule::TimeRecurring,
        PatternRule::TimePast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternRule::HelpSeeking => "helpSeeking",
            PatternRule::CrisisSevere => "crisisSevere",
            PatternRule::WantsToTalk => "wantsToTalk",
            PatternRule::Gratitude => "gratitude",
            PatternRule::Greeting => "greeting",
            PatternRule::Farewell => "farewell",
            PatternRule::AboutAssistant => "aboutAssistant",
            PatternRule::Reflective => "reflective",
            PatternRule::TimeAcute => "timeAcute",
            PatternRule::TimeRecurring => "timeRecurring",
            PatternRule::TimePast => "timePast",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            PatternRule::HelpSeeking => {
                r"(?i)\b(me ajuda|ajuda|socorro|preciso de ajuda|pode me ajudar|ajude-me)\b"
            }
            PatternRule::CrisisSevere => {
                r"(?i)\b(quero morrer|vou me matar|não quero mais viver|acabar com tudo|suic[ií]d\w*|me machucar|me cortar|me ferir)\b"
            }
            PatternRule::WantsToTalk => {
                r"(?i)\b(preciso (falar|desabafar|conversar|de alguém)|alguém (pra|para) (ouvir|conversar)|posso (falar|desabafar)|quero (falar|desabafar|conversar))\b"
            }
            PatternRule::Gratitude => {
                r"(?i)\b(obrigad[oa]|valeu|muito obrigad|brigad[oa]|ajudou|ajudando|funcionou|deu certo)\b"
            }
            PatternRule::Greeting => {
                r"(?i)^(oi|olá|hey|ola|e aí|eai|boa noite|boa tarde|bom dia|oie|oii)\b"
            }
            PatternRule::Farewell => {
                r"(?i)\b(tchau|até mais|até logo|vou dormir|vou descansar|boa noite|obrigad[oa] por tudo)\b"
            }
            PatternRule::AboutAssistant => {
                r"(?i)\b(quem é você|você é quem|o que você é|é uma ia|é um robô|é humano)\b"
            }
            PatternRule::Reflective => {
                r"(?i)\b(não sei (como|o que) (estou sentindo|me sinto|sinto)|confuso sobre (meus sentimentos|como me sinto))\b"
            }
            PatternRule::TimeAcute => r"(?i)\b(agora|neste momento|nessa hora|hoje|acabei de)\b",
            PatternRule::TimeRecurring => {
                r"(?i)\b(sempre|todo dia|toda hora|frequentemente|constantemente|direto|vira e mexe)\b"
            }
            PatternRule::TimePast => {
                r"(?i)\b(ontem|semana passada|mês passado|antigamente|antes|no passado)\b"
            }
        }
    }
}

static PATTERN_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(PatternRule::ALL.iter().map(|rule| rule.pattern()))
        .expect("intent patterns are valid")
});

/// Which detectors fired for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternMatches {
    matched: [bool; RULE_COUNT],
}

impl PatternMatches {
    pub fn get(&self, rule: PatternRule) -> bool {
        self.matched[rule as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternRule, bool)> + '_ {
        PatternRule::ALL.iter().map(move |rule| (*rule, self.get(*rule)))
    }
}

impl Serialize for PatternMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RULE_COUNT))?;
        for (rule, hit) in self.iter() {
            map.serialize_entry(rule.name(), &hit)?;
        }
        map.end()
    }
}

/// Evaluates every detector against `raw_text`.
pub fn match_patterns(raw_text: &str) -> PatternMatches {
    let mut matches = PatternMatches::default();
    for index in PATTERN_SET.matches(raw_text).iter() {
        matches.matched[index] = true;
    }
    matches
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn fired(text: &str) -> Vec<PatternRule> {
        match_patterns(text)
            .iter()
            .filter_map(|(rule, hit)| hit.then_some(rule))
            .collect()
    }

    #[test]
    fn rule_index_matches_declaration_order() {
        for (index, rule) in PatternRule::ALL.iter().enumerate() {
            assert_eq!(*rule as usize, index);
        }
    }

    #[test]
    fn crisis_phrases() {
        assert!(match_patterns("eu quero morrer").get(PatternRule::CrisisSevere));
        assert!(match_patterns("Não quero mais viver assim").get(PatternRule::CrisisSevere));
        assert!(match_patterns("penso em suicídio").get(PatternRule::CrisisSevere));
        assert!(!match_patterns("quero dormir").get(PatternRule::CrisisSevere));
    }

    #[test]
    fn greeting_only_at_start() {
        assert!(match_patterns("oi, bom dia").get(PatternRule::Greeting));
        assert!(match_patterns("Olá!").get(PatternRule::Greeting));
        assert!(match_patterns("oie").get(PatternRule::Greeting));
        assert!(!match_patterns("eu disse oi").get(PatternRule::Greeting));
        assert!(!match_patterns("oito horas").get(PatternRule::Greeting));
    }

    #[test]
    fn boa_noite_is_both_greeting_and_farewell() {
        let rules = fired("boa noite");
        assert!(rules.contains(&PatternRule::Greeting));
        assert!(rules.contains(&PatternRule::Farewell));
    }

    #[test]
    fn help_and_talk() {
        assert!(match_patterns("socorro").get(PatternRule::HelpSeeking));
        assert!(match_patterns("preciso desabafar").get(PatternRule::WantsToTalk));
        assert!(match_patterns("preciso de alguém").get(PatternRule::WantsToTalk));
    }

    #[test]
    fn reflective_and_meta() {
        assert!(match_patterns("não sei o que estou sentindo").get(PatternRule::Reflective));
        assert!(match_patterns("quem é você?").get(PatternRule::AboutAssistant));
    }

    #[test]
    fn temporal_markers() {
        let rules = fired("ontem e hoje, sempre assim");
        assert!(rules.contains(&PatternRule::TimePast));
        assert!(rules.contains(&PatternRule::TimeAcute));
        assert!(rules.contains(&PatternRule::TimeRecurring));
    }

    #[test]
    fn empty_input_matches_nothing() {
        assert!(fired("").is_empty());
        assert!(fired("   ").is_empty());
    }

    #[test]
    fn serializes_as_name_map() {
        let value = serde_json::to_value(match_patterns("obrigado")).unwrap();
        assert_eq!(value["gratitude"], true);
        assert_eq!(value["crisisSevere"], false);
        assert_eq!(value.as_object().unwrap().len(), PatternRule::ALL.len());
    }
}
