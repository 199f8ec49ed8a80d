//! CRM comment assembly.

use super::dictionary::{dictionary, find_question_text, Lang};
use crate::common::QuizAnswer;

/// Merge the AI report with the submitter's open-ended answers into the
/// plain-text comment stored on the CRM lead.
///
/// Without answers the comment is the report text itself. Question wording is
/// canonicalized against the language's question dictionary so the CRM shows
/// the same text as the quiz; unmatched questions pass through verbatim.
pub fn assemble_comment(answers: Option<&[QuizAnswer]>, lang: Lang, report_html: &str) -> String {
    let answers = match answers {
        Some(list) if !list.is_empty() => list,
        _ => return report_html.to_string(),
    };

    let dict = dictionary(lang);
    let blocks: Vec<String> = answers
        .iter()
        .filter(|a| a.is_open_ended())
        .map(|a| {
            let question = find_question_text(dict, &a.question).unwrap_or(&a.question);
            format!("{}:\n{}", question, a.answer)
        })
        .collect();

    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        lang.report_header(),
        report_html,
        lang.open_answers_header(),
        blocks.join("\n\n"),
    )
}
