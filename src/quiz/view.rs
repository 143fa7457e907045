//! Question card markup.

use crate::content::{Question, QuizOption, Resource};
use crate::dom::{el, ElementNode};

use super::{NavAction, OPTION_LETTERS};

/// Feedback heading for the correct option.
pub const CORRECT_LABEL: &str = "✓ Best answer!";

/// Feedback heading for every other option.
pub const INCORRECT_LABEL: &str = "❌ Not the best choice.";

/// Element id of the card for question `index`.
#[must_use]
pub fn card_id(index: usize) -> String {
    format!("question{index}")
}

/// Letter shown for the option at display position `position`.
#[must_use]
pub fn option_letter(position: usize) -> &'static str {
    OPTION_LETTERS.get(position).copied().unwrap_or("")
}

/// Build the card for question `index` with options in display order.
///
/// The first card starts visible; all others start hidden.
#[must_use]
pub fn question_card(
    index: usize,
    question: &Question,
    options: &[QuizOption],
    question_count: usize,
) -> ElementNode {
    let display = if index == 0 { "block" } else { "none" };

    el("div")
        .class("question-card")
        .id(card_id(index))
        .style("display", display)
        .child(el("div").class("question-number").text(format!("Question {}", index + 1)))
        .child(
            el("div")
                .class("scenario")
                .child(el("h2").text(question.title.as_str()))
                .child(el("p").text(question.scenario.as_str()))
                .child(
                    el("p")
                        .class("question-text")
                        .child(el("strong").text(question.question.as_str())),
                ),
        )
        .child(
            el("div").class("options").children(
                options
                    .iter()
                    .enumerate()
                    .map(|(position, option)| option_button(index, position, option)),
            ),
        )
        .child(resources(&question.resources))
        .child(navigation_buttons(index, question_count))
}

fn option_button(question_index: usize, position: usize, option: &QuizOption) -> ElementNode {
    let label = if option.correct {
        CORRECT_LABEL
    } else {
        INCORRECT_LABEL
    };

    el("div")
        .class("option")
        .attr("data-correct", option.correct.to_string())
        .attr("data-question-index", question_index.to_string())
        .attr("tabindex", "0")
        .attr("role", "button")
        .attr("aria-pressed", "false")
        .child(
            el("div")
                .class("option-content")
                .child(el("div").class("option-letter").text(option_letter(position)))
                .child(
                    el("div")
                        .child(el("div").class("option-text").text(option.text.as_str()))
                        .child(
                            el("div")
                                .class("feedback")
                                .child(el("strong").text(label))
                                .text(format!(" {}", option.feedback)),
                        ),
                ),
        )
}

fn resources(resources: &[Resource]) -> ElementNode {
    el("div")
        .class("resources")
        .child(el("h3").text("Learn More"))
        .child(el("ul").children(resources.iter().map(|resource| {
            el("li").child(
                el("a")
                    .attr("href", resource.url.as_str())
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .text(resource.title.as_str()),
            )
        })))
}

fn navigation_buttons(index: usize, question_count: usize) -> ElementNode {
    let back = if index == 0 {
        NavAction::BackToModules
    } else {
        NavAction::Previous
    };
    let forward = if index + 1 == question_count {
        NavAction::Complete
    } else {
        NavAction::Next
    };

    el("div")
        .class("navigation-buttons")
        .child(
            el("button")
                .class("btn-secondary")
                .attr("data-action", back.as_str())
                .text(back.label()),
        )
        .child(
            el("button")
                .class("btn-primary")
                .attr("data-action", forward.as_str())
                .text(forward.label()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn question(options: usize) -> Question {
        Question {
            title: "Group chat".to_string(),
            scenario: "Someone is left out.".to_string(),
            question: "What now?".to_string(),
            options: (0..options)
                .map(|i| QuizOption {
                    text: format!("opt{i}"),
                    correct: i == 0,
                    feedback: format!("fb{i}"),
                })
                .collect(),
            resources: vec![Resource {
                title: "Guide".to_string(),
                url: "https://example.org/guide".to_string(),
            }],
        }
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(5), "F");
        assert_eq!(option_letter(6), "");
    }

    #[test]
    fn test_card_structure() {
        let q = question(3);
        let mut doc = Document::new();
        let body = doc.body();
        doc.append(body, question_card(1, &q, &q.options, 3));

        let card = doc.get_element_by_id("question1").unwrap();
        assert_eq!(doc.style(card, "display"), Some("none"));
        let options = doc.query_selector_all_within(card, ".option");
        assert_eq!(options.len(), 3);
        assert_eq!(doc.attr(options[0], "data-correct"), Some("true"));
        assert_eq!(doc.attr(options[1], "data-question-index"), Some("1"));
        assert_eq!(doc.attr(options[2], "aria-pressed"), Some("false"));

        let feedback = doc.query_selector_all_within(card, ".feedback");
        assert_eq!(doc.text_content(feedback[0]), "✓ Best answer! fb0");
        assert_eq!(doc.text_content(feedback[1]), "❌ Not the best choice. fb1");

        let link = doc.query_selector(".resources a").unwrap();
        assert_eq!(doc.attr(link, "target"), Some("_blank"));
    }

    #[test]
    fn test_navigation_buttons_by_position() {
        let q = question(2);
        let mut doc = Document::new();
        let body = doc.body();
        doc.append(body, question_card(0, &q, &q.options, 1));

        let buttons = doc.query_selector_all("button");
        assert_eq!(doc.attr(buttons[0], "data-action"), Some("back-to-modules"));
        assert_eq!(doc.text_content(buttons[0]), "Back to Modules");
        assert_eq!(doc.attr(buttons[1], "data-action"), Some("complete"));
        assert_eq!(doc.text_content(buttons[1]), "Complete Module");

        let card = doc.get_element_by_id("question0").unwrap();
        assert_eq!(doc.style(card, "display"), Some("block"));
    }
}
