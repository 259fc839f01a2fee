//! Recipe text parsing.
//!
//! The generation webhook returns one loosely structured text blob. Sections
//! are located by literal markers; a marker that never occurs means the
//! section is absent, not an error. Parsing is pure and happens at render
//! time - the raw text stays the source of truth.

/// Literal section markers in generated recipe text.
pub const INTRO_MARKER: &str = "Intro:";
pub const CONTEXT_MARKER: &str = "User-Centric Context:";
pub const INGREDIENTS_MARKER: &str = "Ingredients:";
pub const INSTRUCTIONS_MARKER: &str = "Instructions:";
pub const FINAL_MESSAGE_MARKER: &str = "Final Message:";

/// Structured view of a generated recipe's text. Each section is present
/// only when its marker occurs somewhere in the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSections {
    /// Intro paragraph, trimmed, with newline runs collapsed.
    pub intro: Option<String>,
    /// Ingredient lines in source order, bullets and numbering stripped.
    pub ingredient_list: Option<Vec<String>>,
    /// Instruction lines in source order, leading step numbers stripped.
    pub instruction_steps: Option<Vec<String>>,
    /// Closing message, trimmed, inner newlines preserved for display.
    pub final_message: Option<String>,
}

/// Parse raw recipe text into its display sections.
///
/// Each slice starts after the first occurrence of its marker and runs to the
/// next delimiting marker, or to the end of the text when that marker is
/// absent - a plausible response shape, not an error state.
pub fn parse_recipe(content: &str) -> RecipeSections {
    let intro = section_after(content, INTRO_MARKER)
        .map(|rest| collapse_newlines(slice_until(rest, CONTEXT_MARKER).trim()));

    let ingredient_list = section_after(content, INGREDIENTS_MARKER).map(|rest| {
        non_blank_lines(slice_until(rest, INSTRUCTIONS_MARKER))
            .map(strip_bullet)
            .collect()
    });

    let instruction_steps = section_after(content, INSTRUCTIONS_MARKER).map(|rest| {
        non_blank_lines(slice_until(rest, FINAL_MESSAGE_MARKER))
            .map(strip_step_number)
            .collect()
    });

    let final_message =
        section_after(content, FINAL_MESSAGE_MARKER).map(|rest| rest.trim().to_string());

    RecipeSections {
        intro,
        ingredient_list,
        instruction_steps,
        final_message,
    }
}

/// Text after the first occurrence of `marker`, or `None` when absent.
fn section_after<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    content
        .find(marker)
        .map(|idx| &content[idx + marker.len()..])
}

/// Slice up to the next occurrence of `marker`; the whole input when absent.
fn slice_until<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Lines of `text` with blank lines discarded.
fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Collapse runs of consecutive newlines to single newlines.
fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == '\n' {
            if !in_run {
                out.push('\n');
            }
            in_run = true;
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}

/// Strip any leading bullet/numbering prefix (dashes, bullets, digits, dots,
/// whitespace) from an ingredient line, then trim.
fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(|c: char| {
        c == '-' || c == '•' || c == '.' || c.is_ascii_digit() || c.is_whitespace()
    })
    .trim()
    .to_string()
}

/// Strip a leading "<number>. " prefix from an instruction line, then trim.
/// The prefix must sit at the very start of the line to be stripped.
fn strip_step_number(line: &str) -> String {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let rest = if digits_end > 0 && line[digits_end..].starts_with('.') {
        line[digits_end + 1..].trim_start()
    } else {
        line
    };
    rest.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RECIPE: &str = "Intro:\nHello\nUser-Centric Context:\nIngredients:\n- egg\n- milk\nInstructions:\n1. Crack egg\n2. Add milk\nFinal Message:\nEnjoy!";

    #[test]
    fn test_full_recipe_round_trip() {
        let sections = parse_recipe(FULL_RECIPE);
        assert_eq!(sections.intro.as_deref(), Some("Hello"));
        assert_eq!(
            sections.ingredient_list,
            Some(vec!["egg".to_string(), "milk".to_string()])
        );
        assert_eq!(
            sections.instruction_steps,
            Some(vec!["Crack egg".to_string(), "Add milk".to_string()])
        );
        assert_eq!(sections.final_message.as_deref(), Some("Enjoy!"));
    }

    #[test]
    fn test_no_markers_yields_no_sections() {
        let sections = parse_recipe("Just a plain paragraph about soup.\nNothing else.");
        assert_eq!(sections, RecipeSections::default());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_recipe(""), RecipeSections::default());
    }

    #[test]
    fn test_ingredients_run_to_end_when_instructions_absent() {
        let sections = parse_recipe("Ingredients:\n- flour\n- water\n- yeast");
        assert_eq!(
            sections.ingredient_list,
            Some(vec![
                "flour".to_string(),
                "water".to_string(),
                "yeast".to_string()
            ])
        );
        assert!(sections.instruction_steps.is_none());
        assert!(sections.final_message.is_none());
    }

    #[test]
    fn test_intro_runs_to_end_when_context_marker_absent() {
        let sections = parse_recipe("Intro:\nA cozy stew for cold nights.\n\nWith love.");
        assert_eq!(
            sections.intro.as_deref(),
            Some("A cozy stew for cold nights.\nWith love.")
        );
    }

    #[test]
    fn test_intro_collapses_newline_runs() {
        let sections = parse_recipe("Intro:\n\n\nLine one\n\n\n\nLine two\nUser-Centric Context:");
        assert_eq!(sections.intro.as_deref(), Some("Line one\nLine two"));
    }

    #[test]
    fn test_ingredient_bullet_variants() {
        let sections =
            parse_recipe("Ingredients:\n- 2 eggs\n• milk\n3. sugar\n   butter\nInstructions:");
        assert_eq!(
            sections.ingredient_list,
            Some(vec![
                "eggs".to_string(),
                "milk".to_string(),
                "sugar".to_string(),
                "butter".to_string()
            ])
        );
    }

    #[test]
    fn test_blank_ingredient_lines_discarded() {
        let sections = parse_recipe("Ingredients:\n\n- egg\n   \n- milk\n\nInstructions:");
        assert_eq!(
            sections.ingredient_list,
            Some(vec!["egg".to_string(), "milk".to_string()])
        );
    }

    #[test]
    fn test_instruction_number_only_stripped_at_line_start() {
        // A step number behind leading whitespace is not a prefix match; the
        // line is only trimmed.
        let sections = parse_recipe("Instructions:\n1. Preheat oven\n  2. Mix well\nHeat for 350");
        assert_eq!(
            sections.instruction_steps,
            Some(vec![
                "Preheat oven".to_string(),
                "2. Mix well".to_string(),
                "Heat for 350".to_string()
            ])
        );
    }

    #[test]
    fn test_final_message_preserves_inner_newlines() {
        let sections = parse_recipe("Final Message:\n\nBon appetit!\nCome back soon.\n");
        assert_eq!(
            sections.final_message.as_deref(),
            Some("Bon appetit!\nCome back soon.")
        );
    }

    #[test]
    fn test_marker_mid_text_still_counts() {
        let sections = parse_recipe("Some preamble. Final Message: thanks for cooking");
        assert_eq!(
            sections.final_message.as_deref(),
            Some("thanks for cooking")
        );
    }

    #[test]
    fn test_present_but_empty_section() {
        let sections = parse_recipe("Intro:\nUser-Centric Context:\nother text");
        // Marker present, so the section exists even when its text is empty.
        assert_eq!(sections.intro.as_deref(), Some(""));
    }
}
