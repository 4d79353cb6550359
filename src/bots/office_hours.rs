//! Office-hours bot: directs students to the office hours of CS
//! professors.

use once_cell::sync::Lazy;

use crate::domain::dialogue::{HandlerSet, StateRegistry, Transition};
use crate::domain::foundation::{FactTable, TagCounts};
use crate::domain::tags::{PhraseTable, PhraseTableError};
use crate::ports::BotDefinition;

/// Professors the bot can recognize; each is both a tag and the key
/// into the fact tables below.
const PROFESSORS: [&str; 5] = ["celia", "hsing-hau", "jeff", "justin", "kathryn"];

/// Phrase vocabulary, phrase -> tag(s).
const VOCABULARY: &str = r#"
# intent
office hours: office-hours
oh: office-hours
help: office-hours

# professors
kathryn: kathryn
leonard: kathryn
justin: justin
li: justin
jeff: jeff
miller: jeff
celia: celia
hsing-hau: hsing-hau

# generic
thanks: thanks
okay: success
bye: success
yes: yes
yep: yes
no: no
nope: no
"#;

static OFFICE_HOURS: Lazy<FactTable> = Lazy::new(|| {
    FactTable::from_pairs([
        ("celia", "F 12-1:45pm; F 2:45-4:00pm"),
        ("hsing-hau", "T 1-2:30pm; Th 10:30am-noon"),
        ("jeff", "unknown"),
        ("justin", "T 1-2pm; W noon-1pm; F 3-4pm"),
        ("kathryn", "MWF 4-5pm"),
    ])
});

static OFFICES: Lazy<FactTable> = Lazy::new(|| {
    FactTable::from_pairs([
        ("celia", "Swan 216"),
        ("hsing-hau", "Swan 302"),
        ("jeff", "Fowler 321"),
        ("justin", "Swan B102"),
        ("kathryn", "Swan B101"),
    ])
});

/// Remembered conversation context.
#[derive(Debug, Default)]
pub struct OfficeHoursScratch {
    /// The professor the student asked about, once recognized.
    professor: Option<String>,
}

fn recognized_professor(tags: &TagCounts) -> Option<&'static str> {
    PROFESSORS.into_iter().find(|&p| tags.contains(p))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A simple bot that directs students to office hours of CS professors.
pub struct OfficeHoursBot;

impl BotDefinition for OfficeHoursBot {
    type Scratch = OfficeHoursScratch;

    fn name() -> &'static str {
        "OfficeHoursBot"
    }

    fn registry() -> StateRegistry {
        StateRegistry::new(
            [
                "waiting",
                "specific_faculty",
                "unknown_faculty",
                "unrecognized_faculty",
            ],
            "waiting",
        )
    }

    fn phrase_table() -> Result<PhraseTable, PhraseTableError> {
        PhraseTable::from_yaml(VOCABULARY)
    }

    fn handlers() -> HandlerSet<OfficeHoursScratch> {
        HandlerSet::builder()
            .respond_from("waiting", |scratch: &mut OfficeHoursScratch, _message, tags| {
                scratch.professor = None;
                if tags.contains("office-hours") {
                    if let Some(professor) = recognized_professor(tags) {
                        scratch.professor = Some(professor.to_string());
                        return Ok(Transition::to_state("specific_faculty"));
                    }
                    return Ok(Transition::to_state("unknown_faculty"));
                }
                if tags.contains("thanks") {
                    return Ok(Transition::finish("thanks"));
                }
                Ok(Transition::finish("confused"))
            })
            .on_enter("specific_faculty", |scratch| {
                let professor = scratch.professor.as_deref().unwrap_or_default();
                let hours = OFFICE_HOURS.get(professor)?;
                Ok(format!(
                    "{}'s office hours are {}\nDo you know where their office is?",
                    capitalize(professor),
                    hours
                ))
            })
            .respond_from("specific_faculty", |_scratch, _message, tags| {
                if tags.contains("yes") {
                    Ok(Transition::finish("success"))
                } else {
                    Ok(Transition::finish("location"))
                }
            })
            .on_enter("unknown_faculty", |_scratch| {
                Ok("Whose office hours are you looking for?".to_string())
            })
            .respond_from("unknown_faculty", |scratch, _message, tags| {
                if let Some(professor) = recognized_professor(tags) {
                    scratch.professor = Some(professor.to_string());
                    Ok(Transition::to_state("specific_faculty"))
                } else {
                    Ok(Transition::to_state("unrecognized_faculty"))
                }
            })
            .on_enter("unrecognized_faculty", |_scratch| {
                Ok(concat!(
                    "I'm not sure I understand - are you looking for ",
                    "Celia, Hsing-hau, Jeff, Justin, or Kathryn?"
                )
                .to_string())
            })
            .respond_from("unrecognized_faculty", |scratch, _message, tags| {
                if let Some(professor) = recognized_professor(tags) {
                    scratch.professor = Some(professor.to_string());
                    Ok(Transition::to_state("specific_faculty"))
                } else {
                    Ok(Transition::finish("fail"))
                }
            })
            .finish_with("confused", |_scratch| {
                Ok(concat!(
                    "Sorry, I'm just a simple bot that can't understand much. ",
                    "You can ask me about office hours though!"
                )
                .to_string())
            })
            .finish_with("location", |scratch| {
                let professor = scratch.professor.as_deref().unwrap_or_default();
                let office = OFFICES.get(professor)?;
                Ok(format!(
                    "{}'s office is in {}",
                    capitalize(professor),
                    office
                ))
            })
            .finish_with("success", |_scratch| {
                Ok("Great, let me know if you need anything else!".to_string())
            })
            .finish_with("fail", |_scratch| {
                Ok(concat!(
                    "I've tried my best but I still don't understand. ",
                    "Maybe try asking other students?"
                )
                .to_string())
            })
            .finish_with("thanks", |_scratch| Ok("You're welcome!".to_string()))
            .build()
    }
}
