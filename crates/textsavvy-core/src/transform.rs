//! Static case transforms.
//!
//! Pure string functions applied to selected text. These intentionally work
//! word-by-word on space boundaries, matching how users see the transforms
//! behave on selections that span element boundaries.

use textsavvy_types::command::CaseKind;

/// Apply one case transform.
pub fn apply_case(kind: CaseKind, text: &str) -> String {
    match kind {
        CaseKind::Sentence => sentence_case(text),
        CaseKind::Lower => text.to_lowercase(),
        CaseKind::Upper => text.to_uppercase(),
        CaseKind::Capitalized => capitalized_case(text),
        CaseKind::Alternating => alternating_case(text),
        CaseKind::Inverse => inverse_case(text),
        CaseKind::Title => title_case(text),
        CaseKind::Slugify => slugify(text),
    }
}

/// Words left lowercase in title case unless they lead the text.
const SMALL_WORDS: [&str; 18] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so", "the",
    "to", "up", "yet",
];

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sentence_case(text: &str) -> String {
    capitalize_first(&text.to_lowercase())
}

fn capitalized_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn alternating_case(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            if i % 2 == 0 {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn inverse_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && SMALL_WORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '-')
        .collect();

    let mut out = String::with_capacity(filtered.len());
    let mut last_was_hyphen = false;
    for c in filtered.chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped == '-' {
            if !last_was_hyphen {
                out.push('-');
            }
            last_was_hyphen = true;
        } else {
            out.push(mapped);
            last_was_hyphen = false;
        }
    }
    out
}
