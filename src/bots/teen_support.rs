//! Teen-support bot: helps parents identify which substance their
//! teen's symptoms point to, then offers advice.

use once_cell::sync::Lazy;

use crate::domain::dialogue::{HandlerSet, StateRegistry, Transition};
use crate::domain::foundation::{EngineError, FactTable, TagCounts};
use crate::domain::tags::{PhraseTable, PhraseTableError};
use crate::ports::BotDefinition;

/// Substances the bot can identify; each is both a tag and the key
/// into the advice table.
const SUBSTANCES: [&str; 7] = [
    "alcohol", "cocaine", "weed", "hallucinogen", "tobacco", "adderall", "opioid",
];

/// Symptom vocabulary, phrase -> substance tag. Shared symptoms map
/// to the `common` tag and are narrowed down by follow-up questions.
const VOCABULARY: &str = r#"
# weed
red eyes: weed
bloodshot eyes: weed
slow reaction time: weed
bad memory: weed
poor memory: weed
extreme hunger: weed
munchies: weed
giggly: weed
lethargic: weed
dazed: weed
"420": weed
rolling paper: weed
bong: weed
grinder: weed
cannabis: weed
joint: weed
blunt: weed
hemp: weed

# adderall
headache: adderall
tremors: adderall
seizures: adderall
adderall: adderall
excitable: adderall
aggressive: adderall

# alcohol
slurred speech: alcohol
bruises: alcohol
smell of alcohol: alcohol
alcohol: alcohol
outburst: alcohol
bottles: alcohol

# tobacco
bad breath: tobacco
yellow fingers: tobacco
wheezing: tobacco
smoke: tobacco
burns: tobacco
lighter: tobacco
matches: tobacco
tobacco: tobacco

# cocaine
dilated pupils: cocaine
nosebleed: cocaine
runny nose: cocaine
snort: cocaine
powder: cocaine
razor: cocaine

# hallucinogens
anxious: hallucinogen
disoriented: hallucinogen
sweating: hallucinogen
chills: hallucinogen
hallucinating: hallucinogen
seeing things: hallucinogen

# opioids
needles: opioid
syringe: opioid
needle marks: opioid
scabs: opioid
droopy: opioid

# shared symptoms
cough: common
fast heartbeat: common
dry mouth: common
poor coordination: common
no motivation: common
paranoid: common
baggies: common
air freshener: common
mouthwash: common
mints: common
gum: common
nausea: common
missing school: common
grades: common
fights: common
mood: common
weight: common
withdrawn: common

# yes / no / thanks
yes: yes
yeah: yes
yep: yes
no: no
nope: no
thanks: thanks
thank you: thanks
"#;

static ADVICE: Lazy<FactTable> = Lazy::new(|| {
    FactTable::from_pairs([
        (
            "alcohol",
            concat!(
                "Seems like your teen is using alcohol, the most popular drug among ",
                "teens. Approach them with nonjudgmental information on drinking ",
                "safely, and let them know you're always around to help.",
            ),
        ),
        (
            "cocaine",
            concat!(
                "Seems like your teen is using cocaine, a highly addictive and ",
                "dangerous drug. Talk to them calmly about how long and how often ",
                "they've been using; for frequent use, rehab or a local support ",
                "group is the safest option.",
            ),
        ),
        (
            "tobacco",
            concat!(
                "Sounds like your teen is using tobacco. Interventions are proven ",
                "effective: talk calmly about the long and short term effects, and ",
                "reassure them they can come to you for help.",
            ),
        ),
        (
            "adderall",
            concat!(
                "Sounds like your teen is using Adderall recreationally. Think about ",
                "the stressors that may have led them there, talk about their ",
                "feelings and mental health, and be open, understanding, and kind.",
            ),
        ),
        (
            "opioid",
            concat!(
                "Sounds like your teen is using opioids. This is serious: seek a ",
                "health professional promptly, and engage their support system ",
                "rather than confronting them alone.",
            ),
        ),
    ])
});

/// Substance-specific follow-up asked after identification, with
/// advice branched on the answer. Substances without an entry get the
/// generic flat advice from [`ADVICE`].
struct FollowUp {
    substance: &'static str,
    intro: &'static str,
    question: &'static str,
    advice_if_yes: &'static str,
    advice_if_no: &'static str,
}

const FOLLOW_UPS: [FollowUp; 2] = [
    FollowUp {
        substance: "weed",
        intro: "Sounds like your teen is using marijuana.",
        question: "Is marijuana legal in your state?",
        advice_if_yes: concat!(
            "It's widely used where it's legal, so keep perspective: warn your ",
            "teen about the repercussions, stay calm, and keep the conversation open.",
        ),
        advice_if_no: concat!(
            "Possession is a real risk where it's illegal. Confiscate what you ",
            "find, stay calm, and talk through the consequences together.",
        ),
    },
    FollowUp {
        substance: "hallucinogen",
        intro: concat!(
            "Sounds like your teen is using hallucinogens. They aren't chemically ",
            "addictive, but a general addiction to their effects shows up as heavier ",
            "doses, time and money spent obtaining them, and neglected responsibilities.",
        ),
        question: "Is your teen doing any of those things?",
        advice_if_yes: concat!(
            "That's serious: tolerance builds with consistent use, so overdoses and ",
            "bad trips get more likely. Talk about the dangers first; brief ",
            "counseling interventions and family training programs both help.",
        ),
        advice_if_no: concat!(
            "Good. Keep the conversation open and honest; group or individual ",
            "therapy helps address the reasons behind the use and builds better ",
            "coping skills.",
        ),
    },
];

fn follow_up(substance: &str) -> Option<&'static FollowUp> {
    FOLLOW_UPS.iter().find(|f| f.substance == substance)
}

/// Follow-up questions asked when only shared symptoms matched, in
/// order, each paired with the substance a "yes" identifies.
const PROBES: [(&str, &str); 7] = [
    (
        "Does your teen have bloodshot eyes often, and do they seem to be losing motivation?",
        "weed",
    ),
    (
        "Is your teen being overly talkative and unusually excitable?",
        "adderall",
    ),
    (
        "Is your teen getting into fights and unable to do complex tasks?",
        "alcohol",
    ),
    (
        "Have you noticed your teen coughing or wheezing a lot, or stained fingers?",
        "tobacco",
    ),
    (
        "Has your teen been getting frequent nose bleeds or often have a runny nose?",
        "cocaine",
    ),
    (
        "Has your teen been seeing things that aren't there?",
        "hallucinogen",
    ),
    ("Have you noticed any injection marks on your teen?", "opioid"),
];

/// Remembered conversation context.
#[derive(Debug, Default)]
pub struct TeenSupportScratch {
    /// The substance identified so far, if any.
    substance: Option<String>,
    /// Index of the probe question currently on the table.
    probe: usize,
    /// Answer to the substance-specific follow-up question.
    answered_yes: bool,
}

fn recognized_substance(tags: &TagCounts) -> Option<&'static str> {
    SUBSTANCES.into_iter().find(|&s| tags.contains(s))
}

fn probe_state(index: usize) -> String {
    format!("probe_{}", index + 1)
}

/// A bot that helps parents work out which substance their teen may
/// be using, from described symptoms.
pub struct TeenSupportBot;

impl BotDefinition for TeenSupportBot {
    type Scratch = TeenSupportScratch;

    fn name() -> &'static str {
        "TeenSupportBot"
    }

    fn greeting() -> Option<String> {
        Some(
            concat!(
                "Welcome. I help parents work out what substance their teen may be ",
                "using.\nWhat symptoms have you noticed?"
            )
            .to_string(),
        )
    }

    fn registry() -> StateRegistry {
        let mut states = vec!["waiting".to_string(), "identified".to_string()];
        states.extend((0..PROBES.len()).map(probe_state));
        StateRegistry::new(states, "waiting")
    }

    fn phrase_table() -> Result<PhraseTable, PhraseTableError> {
        PhraseTable::from_yaml(VOCABULARY)
    }

    fn handlers() -> HandlerSet<TeenSupportScratch> {
        let mut builder = HandlerSet::builder()
            .respond_from("waiting", |scratch: &mut TeenSupportScratch, _message, tags| {
                scratch.substance = None;
                scratch.probe = 0;
                scratch.answered_yes = false;
                if let Some(substance) = recognized_substance(tags) {
                    scratch.substance = Some(substance.to_string());
                    return Ok(Transition::to_state("identified"));
                }
                if tags.contains("thanks") {
                    return Ok(Transition::finish("thanks"));
                }
                // Shared or unrecognized symptoms: narrow down with
                // follow-up questions.
                Ok(Transition::to_state(probe_state(0)))
            })
            .on_enter("identified", |scratch| {
                let substance = scratch.substance.as_deref().unwrap_or_default();
                match follow_up(substance) {
                    Some(fu) => Ok(format!("{}\n\n{}", fu.intro, fu.question)),
                    None => {
                        let advice = ADVICE.get(substance)?;
                        Ok(format!(
                            "{}\n\nAny other problems with your teen and drugs?",
                            advice
                        ))
                    }
                }
            })
            .respond_from("identified", |scratch, _message, tags| {
                let pending = scratch
                    .substance
                    .as_deref()
                    .map_or(false, |s| follow_up(s).is_some());
                if pending {
                    scratch.answered_yes = tags.contains("yes");
                    return Ok(Transition::finish("resolved"));
                }
                if tags.contains("yes") {
                    Ok(Transition::finish("more_help"))
                } else if tags.contains("thanks") {
                    Ok(Transition::finish("thanks"))
                } else {
                    Ok(Transition::finish("success"))
                }
            })
            .finish_with("thanks", |_scratch| Ok("You're welcome!".to_string()))
            .finish_with("success", |_scratch| {
                Ok("Great, let me know if you need anything else!".to_string())
            })
            .finish_with("resolved", |scratch| {
                let substance = scratch.substance.as_deref().unwrap_or_default();
                let fu = follow_up(substance)
                    .ok_or_else(|| EngineError::UnknownEntity(substance.to_string()))?;
                Ok(if scratch.answered_yes {
                    fu.advice_if_yes
                } else {
                    fu.advice_if_no
                }
                .to_string())
            })
            .finish_with("more_help", |_scratch| {
                Ok("I'm happy to help! Tell me about the other symptoms you've noticed.".to_string())
            })
            .finish_with("fail", |_scratch| {
                Ok(concat!(
                    "I've tried my best but I still don't understand. ",
                    "Maybe try asking a health professional?"
                )
                .to_string())
            });

        for (index, (question, substance)) in PROBES.iter().enumerate() {
            let question = *question;
            let substance = *substance;
            builder = builder
                .on_enter(probe_state(index), move |_scratch: &TeenSupportScratch| {
                    Ok(question.to_string())
                })
                .respond_from(
                    probe_state(index),
                    move |scratch: &mut TeenSupportScratch, _message, tags| {
                        if tags.contains("yes") {
                            scratch.substance = Some(substance.to_string());
                            return Ok(Transition::to_state("identified"));
                        }
                        scratch.probe = index + 1;
                        if scratch.probe < PROBES.len() {
                            Ok(Transition::to_state(probe_state(scratch.probe)))
                        } else {
                            Ok(Transition::finish("fail"))
                        }
                    },
                );
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StateName;

    #[test]
    fn definition_is_fully_wired() {
        let engine = TeenSupportBot::engine().unwrap();
        assert!(engine.warnings().is_empty());
    }

    #[test]
    fn red_eyes_identifies_weed_immediately() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("my kid has red eyes").unwrap();
        assert!(reply.contains("marijuana"));
        assert_eq!(engine.current_state(), &StateName::new("identified"));
    }

    #[test]
    fn shared_symptom_starts_the_probe_sequence() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("there's a weird cough and mood swings").unwrap();
        assert_eq!(reply, PROBES[0].0);
        assert_eq!(engine.current_state(), &StateName::new("probe_1"));
    }

    #[test]
    fn answering_yes_to_a_probe_identifies_its_substance() {
        let mut engine = TeenSupportBot::engine().unwrap();
        engine.respond("bad grades lately").unwrap();
        engine.respond("no").unwrap();
        let reply = engine.respond("yes, very excitable").unwrap();
        assert!(reply.contains("Adderall"));
        assert_eq!(engine.current_state(), &StateName::new("identified"));
    }

    #[test]
    fn exhausting_every_probe_finishes_with_fail() {
        let mut engine = TeenSupportBot::engine().unwrap();
        engine.respond("something is off").unwrap();
        for _ in 0..PROBES.len() - 1 {
            engine.respond("nope").unwrap();
        }
        let reply = engine.respond("nope").unwrap();
        assert!(reply.contains("health professional"));
        assert_eq!(engine.current_state(), &StateName::new("waiting"));
    }

    #[test]
    fn follow_up_after_advice_offers_more_help() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("smell of alcohol on their clothes").unwrap();
        assert!(reply.contains("Any other problems"));
        let reply = engine.respond("yes actually").unwrap();
        assert!(reply.contains("happy to help"));
        assert_eq!(engine.current_state(), &StateName::new("waiting"));
    }

    #[test]
    fn marijuana_question_branches_on_legality() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("found a bong in their room").unwrap();
        assert!(reply.contains("Is marijuana legal in your state?"));

        let reply = engine.respond("yes it is").unwrap();
        assert!(reply.contains("repercussions"));
        assert_eq!(engine.current_state(), &StateName::new("waiting"));

        // Same question, other branch.
        engine.respond("there's rolling paper everywhere").unwrap();
        let reply = engine.respond("no").unwrap();
        assert!(reply.contains("Confiscate"));
        assert_eq!(engine.current_state(), &StateName::new("waiting"));
    }

    #[test]
    fn hallucinogen_question_asks_about_addiction_signs() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("they say they keep seeing things").unwrap();
        assert!(reply.contains("Is your teen doing any of those things?"));

        let reply = engine.respond("no, none of that").unwrap();
        assert!(reply.contains("coping skills"));
        assert_eq!(engine.current_state(), &StateName::new("waiting"));
    }

    #[test]
    fn numeric_slang_counts_as_a_symptom() {
        let mut engine = TeenSupportBot::engine().unwrap();
        let reply = engine.respond("they keep writing 420 everywhere").unwrap();
        assert!(reply.contains("marijuana"));
    }
}
