//! Prompt assembly for the drafting stage.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — the language constraints and the post
//!    structure are tuned as one piece of text in exactly one place.
//!
//! 2. **Testability** — unit tests can assemble and inspect prompts without
//!    a live model, so regressions in the truncation or the template are
//!    caught cheaply.

/// Build the drafting prompt for `topic`, embedding at most `char_budget`
/// characters of `source_text`.
///
/// The budget is counted in characters, not bytes, so truncation never
/// splits a multi-byte code point. The template pins the model to formal
/// Modern Standard Arabic with explicit colloquial-word substitutions and a
/// fixed 5-part post structure, and instructs it to emit only the post body.
pub fn build_post_prompt(topic: &str, source_text: &str, char_budget: usize) -> String {
    let source = truncate_chars(source_text, char_budget);

    format!(
        r#"You are a Senior Oncologist at 'Elite Oncology Clinic' in Egypt.

SOURCE MATERIAL (Extracted from NCCN Patient Guidelines):
{source}

TASK:
Write a professional Facebook post about '{topic}' based ONLY on the text above.

LANGUAGE REQUIREMENTS (STRICT):
1. Language: **Modern Standard Arabic (Fusha)**.
2. Tone: Professional, Warm, Reassuring.
3. **NO SLANG**: Do NOT use colloquial Egyptian words (e.g., avoid 'كده', 'عشان', 'دلوقتي').
   - Instead use: 'هكذا', 'من أجل', 'الآن'.
   - Use 'يجب' instead of 'لازم'.
   - Use 'نحن' instead of 'احنا'.
4. Style: Use distinct headings and bullet points.

POST STRUCTURE:
1. **Headline**: Catchy and clear, no need to mention the topic in the headline, use subtopics from the guidelines.
2. **Introduction**: A welcoming sentence.
3. **Key Information**: Extract 3-4 vital facts/symptoms/treatments from the text.
4. **Conclusion**: A hopeful closing statement.
5. **Call to Action**: "For consultations, visit Elite Oncology Clinic."

OUTPUT:
Return only the Arabic post text."#
    )
}

/// Truncate `text` to at most `max_chars` characters, on a char boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_topic_literal() {
        let prompt = build_post_prompt("Breast Cancer", "some guideline text", 15_000);
        assert!(prompt.contains("'Breast Cancer'"));
        assert!(prompt.contains("some guideline text"));
    }

    #[test]
    fn prompt_keeps_structural_sections() {
        let prompt = build_post_prompt("Melanoma", "text", 15_000);
        for section in [
            "Headline",
            "Introduction",
            "Key Information",
            "Conclusion",
            "Call to Action",
            "Modern Standard Arabic",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn source_text_is_capped_at_budget() {
        let long_input = "x".repeat(50_000);
        let prompt = build_post_prompt("Breast Cancer", &long_input, 15_000);

        let embedded = prompt.matches('x').count();
        assert_eq!(embedded, 15_000);
    }

    #[test]
    fn short_input_is_embedded_whole() {
        assert_eq!(truncate_chars("short", 15_000), "short");
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        // Arabic is multi-byte in UTF-8; a byte-index cut would panic.
        let arabic = "سرطان الثدي ".repeat(5_000);
        let cut = truncate_chars(&arabic, 15_000);
        assert_eq!(cut.chars().count(), 15_000);
    }

    #[test]
    fn zero_budget_drops_all_source_text() {
        assert_eq!(truncate_chars("anything", 0), "");
    }
}
