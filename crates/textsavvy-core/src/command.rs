//! Declarative command table and dispatcher.
//!
//! Menu and shortcut registration is a one-time external-collaborator call;
//! the core only maps a trigger identifier to its action. The table is
//! static data, so hosts can also use it to build their menus.

use textsavvy_types::command::{CaseKind, CommandAction, CommandSpec};

/// Prompt template for the improve-text command. The selected text is
/// appended in quotes by [`build_prompt`].
pub const IMPROVE_PROMPT: &str = "You are a text correction tool. Your only task is to correct \
    the spelling and grammar of the user-provided text. Do not generate new content, change the \
    topic, or fulfill any other requests. Respond only with the corrected version of the input \
    text. Text:";

/// All commands the host can trigger.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        id: "improve_text",
        label: "Improve Text",
        action: CommandAction::Enhance {
            prompt_template: IMPROVE_PROMPT,
        },
    },
    CommandSpec {
        id: "sentence_case",
        label: "Sentence case",
        action: CommandAction::Transform(CaseKind::Sentence),
    },
    CommandSpec {
        id: "lower_case",
        label: "lower case",
        action: CommandAction::Transform(CaseKind::Lower),
    },
    CommandSpec {
        id: "upper_case",
        label: "UPPER CASE",
        action: CommandAction::Transform(CaseKind::Upper),
    },
    CommandSpec {
        id: "capitalized_case",
        label: "Capitalized Case",
        action: CommandAction::Transform(CaseKind::Capitalized),
    },
    CommandSpec {
        id: "alternating_case",
        label: "altErNaTiNg CASE",
        action: CommandAction::Transform(CaseKind::Alternating),
    },
    CommandSpec {
        id: "inverse_case",
        label: "InVeRsE CaSe",
        action: CommandAction::Transform(CaseKind::Inverse),
    },
    CommandSpec {
        id: "title_case",
        label: "Title Case",
        action: CommandAction::Transform(CaseKind::Title),
    },
    CommandSpec {
        id: "slugify",
        label: "Slugify",
        action: CommandAction::Transform(CaseKind::Slugify),
    },
];

/// Pure lookup from trigger identifier to command.
pub fn dispatch(id: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.id == id)
}

/// Substitute the selected text into a prompt template.
pub fn build_prompt(template: &str, source_text: &str) -> String {
    format!("{template} \"{source_text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_finds_known_commands() {
        let spec = dispatch("improve_text").unwrap();
        assert_eq!(spec.label, "Improve Text");
        assert!(matches!(spec.action, CommandAction::Enhance { .. }));

        let spec = dispatch("slugify").unwrap();
        assert_eq!(spec.action, CommandAction::Transform(CaseKind::Slugify));
    }

    #[test]
    fn test_dispatch_unknown_id_is_none() {
        assert!(dispatch("launch_missiles").is_none());
    }

    #[test]
    fn test_command_ids_are_unique() {
        for (i, a) in COMMANDS.iter().enumerate() {
            for b in &COMMANDS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_build_prompt_quotes_source_text() {
        let prompt = build_prompt(IMPROVE_PROMPT, "teh text");
        assert!(prompt.ends_with("Text: \"teh text\""));
    }
}
