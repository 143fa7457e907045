//! Quiz controller state machine.
//!
//! # Overview
//!
//! A [`QuizController`] is created per module page view by
//! [`QuizController::mount`], which writes the module header, renders every
//! question card once (each with a freshly shuffled copy of its options),
//! and shows the first question. From then on every user event is a method
//! call on the controller with the page's [`Document`]:
//!
//! - [`select_option`](QuizController::select_option) /
//!   [`on_click`](QuizController::on_click) for pointer selection
//! - [`on_keydown`](QuizController::on_keydown) for arrow/Enter/Space on a
//!   focused option
//! - [`advance`](QuizController::advance),
//!   [`previous`](QuizController::previous) and
//!   [`complete`](QuizController::complete) for navigation
//!
//! The controller is the source of truth for `{current question,
//! completed, selections}`; the document mirrors it. Document slots that
//! are missing are skipped without affecting the state machine.
//!
//! # Example
//!
//! ```
//! use conscious_choice::content::{Module, Question, QuizOption};
//! use conscious_choice::page::skeleton;
//! use conscious_choice::quiz::{QuizController, QuizError, Transition};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let module = Module {
//!     id: 1,
//!     title: "Honesty".into(),
//!     subtitle: String::new(),
//!     description: String::new(),
//!     completion_message: "Done".into(),
//!     questions: vec![Question {
//!         title: "Q".into(),
//!         scenario: "S".into(),
//!         question: "?".into(),
//!         options: vec![QuizOption { text: "Tell".into(), correct: true, feedback: String::new() }],
//!         resources: vec![],
//!     }],
//! };
//!
//! let mut doc = skeleton::module_page();
//! let mut quiz = QuizController::mount(&mut doc, module, 1, 7, &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(
//!     quiz.advance(&mut doc),
//!     Err(QuizError::NothingSelected { finishing: true })
//! );
//! quiz.select_option(&mut doc, 0, 0).unwrap();
//! assert!(matches!(quiz.advance(&mut doc), Ok(Transition::Completed(_))));
//! assert_eq!(quiz.progress_percent(), 100.0);
//! ```

use rand::Rng;

use crate::content::{Module, Question, QuizOption};
use crate::dom::{Document, NodeId};
use crate::page::skeleton::SITE_NAME;
use crate::page::MODULES_ANCHOR;

use super::shuffle::shuffled;
use super::view::question_card;
use super::{FollowOn, NavAction, OptionKey, QuizError, Transition};

/// Per-page-view quiz state.
#[derive(Debug, Clone)]
pub struct QuizController {
    /// Module content as loaded
    module: Module,
    /// Id the page was opened with (drives the follow-on)
    module_id: u32,
    follow_on: FollowOn,
    /// Options per question in display order
    displayed: Vec<Vec<QuizOption>>,
    /// Selected display position per question
    selected: Vec<Option<usize>>,
    current: usize,
    completed: bool,
    /// Rendered question cards (empty if the page has no container)
    cards: Vec<NodeId>,
    /// Rendered option elements per card, in display order
    option_nodes: Vec<Vec<NodeId>>,
}

impl QuizController {
    /// Render `module` into `doc` and show its first question.
    ///
    /// `module_id` is the id the page was requested with and
    /// `module_count` the number of modules on the site; together they
    /// decide the follow-on action offered on completion.
    pub fn mount<R: Rng + ?Sized>(
        doc: &mut Document,
        module: Module,
        module_id: u32,
        module_count: u32,
        rng: &mut R,
    ) -> Self {
        let question_count = module.question_count();
        let displayed: Vec<Vec<QuizOption>> = module
            .questions
            .iter()
            .map(|q| shuffled(&q.options, rng))
            .collect();

        let mut controller = Self {
            module,
            module_id,
            follow_on: FollowOn::after(module_id, module_count),
            displayed,
            selected: vec![None; question_count],
            current: 0,
            completed: false,
            cards: Vec::new(),
            option_nodes: Vec::new(),
        };

        controller.write_header(doc);
        controller.render_questions(doc);
        controller.show_question(doc, 0);
        controller.configure_follow_on(doc);
        if let Some(message) = doc.get_element_by_id("completionMessage") {
            doc.set_text(message, controller.module.completion_message.as_str());
        }

        log::info!(
            "Mounted module {} ({}) with {} questions",
            controller.module_id,
            controller.module.title,
            question_count
        );
        controller
    }

    fn write_header(&self, doc: &mut Document) {
        let slots = [
            ("moduleBadge", format!("Module {}", self.module.id)),
            ("moduleTitle", self.module.title.clone()),
            ("moduleSubtitle", self.module.subtitle.clone()),
            ("moduleDescription", self.module.description.clone()),
            ("totalQuestions", self.question_count().to_string()),
        ];
        for (id, value) in slots {
            if let Some(slot) = doc.get_element_by_id(id) {
                doc.set_text(slot, value);
            }
        }
        doc.set_title(format!("{} - {}", self.module.title, SITE_NAME));
    }

    fn render_questions(&mut self, doc: &mut Document) {
        let Some(container) = doc.get_element_by_id("questionsContainer") else {
            log::warn!("Page has no question container; questions not rendered");
            return;
        };
        let count = self.question_count();
        let cards = self
            .module
            .questions
            .iter()
            .zip(&self.displayed)
            .enumerate()
            .map(|(index, (question, options))| question_card(index, question, options, count));
        self.cards = doc.set_children(container, cards);
        self.option_nodes = self
            .cards
            .iter()
            .map(|&card| doc.query_selector_all_within(card, ".option"))
            .collect();
    }

    fn configure_follow_on(&self, doc: &mut Document) {
        if let Some(button) = doc.get_element_by_id("nextModuleBtn") {
            doc.set_text(button, self.follow_on.label());
            doc.set_attr(button, "data-href", self.follow_on.href());
        }
    }

    // ==================== State ====================

    /// The loaded module.
    #[must_use]
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Id the page was opened with.
    #[must_use]
    pub fn module_id(&self) -> u32 {
        self.module_id
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.module.question_count()
    }

    /// Index of the displayed question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed question, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.module.questions.get(self.current)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the displayed question is the last one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.question_count()
    }

    /// Options of question `index` in display order.
    #[must_use]
    pub fn displayed_options(&self, index: usize) -> &[QuizOption] {
        self.displayed.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Selected display position for question `index`.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selected.get(index).copied().flatten()
    }

    #[must_use]
    pub fn has_selection(&self, index: usize) -> bool {
        self.selection(index).is_some()
    }

    /// The action offered on the completion card.
    #[must_use]
    pub fn follow_on(&self) -> FollowOn {
        self.follow_on
    }

    /// Progress bar fill in percent: 100 once completed, otherwise
    /// `100 * (current + 1) / question_count`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.completed {
            100.0
        } else if self.question_count() == 0 {
            0.0
        } else {
            (self.current + 1) as f64 / self.question_count() as f64 * 100.0
        }
    }

    /// Rendered card for question `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<NodeId> {
        self.cards.get(index).copied()
    }

    /// Rendered option element at `position` of question `index`.
    #[must_use]
    pub fn option_node(&self, index: usize, position: usize) -> Option<NodeId> {
        self.option_nodes.get(index).and_then(|o| o.get(position)).copied()
    }

    /// `(question, position)` of a rendered option element.
    #[must_use]
    pub fn locate_option(&self, node: NodeId) -> Option<(usize, usize)> {
        self.option_nodes.iter().enumerate().find_map(|(q, nodes)| {
            nodes.iter().position(|&n| n == node).map(|p| (q, p))
        })
    }

    /// `(question, position)` of the focused option, if focus is on one.
    #[must_use]
    pub fn focused_option(&self, doc: &Document) -> Option<(usize, usize)> {
        doc.focused().and_then(|node| self.locate_option(node))
    }

    // ==================== Display ====================

    fn set_progress(&self, doc: &mut Document) {
        if let Some(bar) = doc.get_element_by_id("progressBar") {
            doc.set_style(bar, "width", format!("{}%", self.progress_percent()));
        }
    }

    fn hide_all(&self, doc: &mut Document) {
        for &card in &self.cards {
            doc.set_style(card, "display", "none");
        }
    }

    /// Display question `index`, update progress, and focus its first
    /// option. Returns `false` (and changes nothing) if `index` is out of
    /// range or the module is complete.
    pub fn show_question(&mut self, doc: &mut Document, index: usize) -> bool {
        if self.completed || index >= self.question_count() {
            return false;
        }

        self.hide_all(doc);
        if let Some(card) = self.card(index) {
            doc.set_style(card, "display", "block");
        }
        self.current = index;
        log::debug!("Showing question {}/{}", index + 1, self.question_count());

        if let Some(label) = doc.get_element_by_id("currentQuestion") {
            doc.set_text(label, (index + 1).to_string());
        }
        self.set_progress(doc);
        if let Some(first) = self.option_node(index, 0) {
            doc.focus(first);
        }
        true
    }

    // ==================== Selection ====================

    /// Select the option at display `position` of question `index`,
    /// clearing any earlier selection on that question.
    ///
    /// # Errors
    ///
    /// [`QuizError::AlreadyCompleted`] after completion,
    /// [`QuizError::NoSuchOption`] for an out-of-range target.
    pub fn select_option(
        &mut self,
        doc: &mut Document,
        index: usize,
        position: usize,
    ) -> Result<(), QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        let Some(option) = self.displayed_options(index).get(position) else {
            return Err(QuizError::NoSuchOption {
                question: index,
                position,
            });
        };
        let correct = option.correct;
        self.selected[index] = Some(position);
        log::debug!(
            "Question {} option {} selected ({})",
            index + 1,
            position,
            if correct { "correct" } else { "incorrect" }
        );

        if let Some(nodes) = self.option_nodes.get(index) {
            for &node in nodes {
                doc.remove_class(node, "selected");
                doc.remove_class(node, "correct");
                doc.remove_class(node, "incorrect");
                doc.set_attr(node, "aria-pressed", "false");
            }
        }
        if let Some(node) = self.option_node(index, position) {
            doc.add_class(node, "selected");
            doc.add_class(node, if correct { "correct" } else { "incorrect" });
            doc.set_attr(node, "aria-pressed", "true");
        }
        Ok(())
    }

    // ==================== Navigation ====================

    /// Move to the next question.
    ///
    /// # Errors
    ///
    /// [`QuizError::NothingSelected`] if the displayed question has no
    /// selection, [`QuizError::AtLastQuestion`] on the last question,
    /// [`QuizError::AlreadyCompleted`] after completion.
    pub fn next_question(&mut self, doc: &mut Document) -> Result<Transition, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if self.current + 1 >= self.question_count() {
            return Err(QuizError::AtLastQuestion);
        }
        if !self.has_selection(self.current) {
            return Err(QuizError::NothingSelected { finishing: false });
        }
        let next = self.current + 1;
        self.show_question(doc, next);
        Ok(Transition::Question(next))
    }

    /// Complete the module from its last question.
    ///
    /// # Errors
    ///
    /// [`QuizError::NothingSelected`] without a selection,
    /// [`QuizError::NotAtLastQuestion`] elsewhere,
    /// [`QuizError::AlreadyCompleted`] when called twice.
    pub fn complete(&mut self, doc: &mut Document) -> Result<Transition, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if !self.is_last_question() {
            return Err(QuizError::NotAtLastQuestion);
        }
        if !self.has_selection(self.current) {
            return Err(QuizError::NothingSelected { finishing: true });
        }

        self.hide_all(doc);
        self.completed = true;
        if let Some(card) = doc.get_element_by_id("completionCard") {
            doc.add_class(card, "active");
        }
        self.set_progress(doc);
        log::info!(
            "Module {} complete, follow-on: {}",
            self.module_id,
            self.follow_on.href()
        );
        Ok(Transition::Completed(self.follow_on))
    }

    /// Next question, or completion when on the last one.
    ///
    /// # Errors
    ///
    /// See [`next_question`](Self::next_question) and
    /// [`complete`](Self::complete).
    pub fn advance(&mut self, doc: &mut Document) -> Result<Transition, QuizError> {
        if !self.completed && self.is_last_question() {
            self.complete(doc)
        } else {
            self.next_question(doc)
        }
    }

    /// Move to the previous question; from the first question, leave for
    /// the homepage module list.
    ///
    /// # Errors
    ///
    /// [`QuizError::AlreadyCompleted`] after completion.
    pub fn previous(&mut self, doc: &mut Document) -> Result<Transition, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        if self.current == 0 {
            return Ok(Transition::Navigate(MODULES_ANCHOR.to_string()));
        }
        let previous = self.current - 1;
        self.show_question(doc, previous);
        Ok(Transition::Question(previous))
    }

    // ==================== Events ====================

    /// Keyboard handling for a focused option: arrows move focus
    /// circularly within the option's question, Enter/Space select it.
    ///
    /// Returns `Ok(false)` when focus is not on an option.
    ///
    /// # Errors
    ///
    /// Propagates [`select_option`](Self::select_option) errors.
    pub fn on_keydown(&mut self, doc: &mut Document, key: OptionKey) -> Result<bool, QuizError> {
        let Some((index, position)) = self.focused_option(doc) else {
            return Ok(false);
        };
        let count = self.option_nodes[index].len();

        match key {
            OptionKey::Next => doc.focus(self.option_nodes[index][(position + 1) % count]),
            OptionKey::Previous => {
                doc.focus(self.option_nodes[index][(position + count - 1) % count]);
            }
            OptionKey::Activate => self.select_option(doc, index, position)?,
        }
        Ok(true)
    }

    /// [`on_keydown`](Self::on_keydown) for a DOM key name such as
    /// `"ArrowDown"` or `" "`. Unrelated keys are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`select_option`](Self::select_option) errors.
    pub fn on_key_name(&mut self, doc: &mut Document, key: &str) -> Result<bool, QuizError> {
        match OptionKey::from_key_name(key) {
            Some(key) => self.on_keydown(doc, key),
            None => Ok(false),
        }
    }

    /// Route a click on `target` (or anything inside it).
    ///
    /// Options are selected and focused; card navigation buttons perform
    /// their action; the follow-on button yields its navigation once the
    /// module is complete. Other clicks return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the triggered action.
    pub fn on_click(
        &mut self,
        doc: &mut Document,
        target: NodeId,
    ) -> Result<Option<Transition>, QuizError> {
        if let Some(option) = doc.closest(target, |e| e.has_class("option")) {
            if let Some((index, position)) = self.locate_option(option) {
                self.select_option(doc, index, position)?;
                doc.focus(option);
            }
            return Ok(None);
        }

        if doc
            .closest(target, |e| e.id() == Some("nextModuleBtn"))
            .is_some()
        {
            return Ok(self
                .completed
                .then(|| Transition::Navigate(self.follow_on.href())));
        }

        let action = doc
            .closest(target, |e| e.tag() == "button")
            .and_then(|button| doc.attr(button, "data-action"))
            .and_then(NavAction::parse);
        match action {
            Some(NavAction::BackToModules | NavAction::Previous) => self.previous(doc).map(Some),
            Some(NavAction::Next) => self.next_question(doc).map(Some),
            Some(NavAction::Complete) => self.complete(doc).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Resource;
    use crate::page::skeleton;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn module(id: u32, questions: usize) -> Module {
        Module {
            id,
            title: format!("Module title {id}"),
            subtitle: "Sub".to_string(),
            description: "Desc".to_string(),
            completion_message: "All done".to_string(),
            questions: (0..questions)
                .map(|q| Question {
                    title: format!("Q{q}"),
                    scenario: "S".to_string(),
                    question: "?".to_string(),
                    options: (0..3)
                        .map(|o| QuizOption {
                            text: format!("q{q}o{o}"),
                            correct: o == 1,
                            feedback: format!("f{o}"),
                        })
                        .collect(),
                    resources: vec![Resource {
                        title: "R".to_string(),
                        url: "https://example.org".to_string(),
                    }],
                })
                .collect(),
        }
    }

    fn mount(questions: usize) -> (Document, QuizController) {
        let mut doc = skeleton::module_page();
        let quiz = QuizController::mount(
            &mut doc,
            module(2, questions),
            2,
            7,
            &mut StdRng::seed_from_u64(9),
        );
        (doc, quiz)
    }

    fn text_of(doc: &Document, id: &str) -> String {
        doc.text_content(doc.get_element_by_id(id).unwrap())
    }

    #[test]
    fn test_mount_writes_header_and_progress() {
        let (doc, quiz) = mount(4);
        assert_eq!(text_of(&doc, "moduleBadge"), "Module 2");
        assert_eq!(text_of(&doc, "moduleTitle"), "Module title 2");
        assert_eq!(text_of(&doc, "totalQuestions"), "4");
        assert_eq!(text_of(&doc, "currentQuestion"), "1");
        assert_eq!(text_of(&doc, "completionMessage"), "All done");
        assert_eq!(text_of(&doc, "nextModuleBtn"), "Next Module");
        assert_eq!(doc.title(), "Module title 2 - Conscious Choice");

        let bar = doc.get_element_by_id("progressBar").unwrap();
        assert_eq!(doc.style(bar, "width"), Some("25%"));
        assert_eq!(quiz.current_index(), 0);
        assert!(!quiz.is_completed());
    }

    #[test]
    fn test_first_option_is_focused() {
        let (doc, quiz) = mount(2);
        assert_eq!(quiz.focused_option(&doc), Some((0, 0)));
    }

    #[test]
    fn test_selection_marks_and_clears() {
        let (mut doc, mut quiz) = mount(2);
        quiz.select_option(&mut doc, 0, 0).unwrap();
        quiz.select_option(&mut doc, 0, 2).unwrap();

        let a = quiz.option_node(0, 0).unwrap();
        let b = quiz.option_node(0, 2).unwrap();
        assert!(!doc.has_class(a, "selected"));
        assert!(!doc.has_class(a, "correct") && !doc.has_class(a, "incorrect"));
        assert_eq!(doc.attr(a, "aria-pressed"), Some("false"));
        assert!(doc.has_class(b, "selected"));
        assert_eq!(doc.attr(b, "aria-pressed"), Some("true"));
        assert_eq!(quiz.selection(0), Some(2));

        let correct = quiz.displayed_options(0)[2].correct;
        assert_eq!(doc.has_class(b, "correct"), correct);
        assert_eq!(doc.has_class(b, "incorrect"), !correct);
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut doc, mut quiz) = mount(1);
        assert_eq!(
            quiz.select_option(&mut doc, 0, 3),
            Err(QuizError::NoSuchOption {
                question: 0,
                position: 3
            })
        );
        assert!(quiz.select_option(&mut doc, 5, 0).is_err());
    }

    #[test]
    fn test_advance_requires_selection() {
        let (mut doc, mut quiz) = mount(3);
        assert_eq!(
            quiz.advance(&mut doc),
            Err(QuizError::NothingSelected { finishing: false })
        );
        assert_eq!(quiz.current_index(), 0);
        assert!(!doc.is_hidden(quiz.card(0).unwrap()));

        quiz.select_option(&mut doc, 0, 1).unwrap();
        assert_eq!(quiz.advance(&mut doc), Ok(Transition::Question(1)));
        assert!(doc.is_hidden(quiz.card(0).unwrap()));
        assert!(!doc.is_hidden(quiz.card(1).unwrap()));
    }

    #[test]
    fn test_previous_has_no_precondition() {
        let (mut doc, mut quiz) = mount(2);
        assert_eq!(
            quiz.previous(&mut doc),
            Ok(Transition::Navigate("index.html#modules".to_string()))
        );
        quiz.select_option(&mut doc, 0, 0).unwrap();
        quiz.advance(&mut doc).unwrap();
        assert_eq!(quiz.previous(&mut doc), Ok(Transition::Question(0)));
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_complete_from_last_question() {
        let (mut doc, mut quiz) = mount(2);
        assert_eq!(quiz.complete(&mut doc), Err(QuizError::NotAtLastQuestion));
        quiz.select_option(&mut doc, 0, 0).unwrap();
        quiz.advance(&mut doc).unwrap();
        assert_eq!(quiz.next_question(&mut doc), Err(QuizError::AtLastQuestion));
        assert_eq!(
            quiz.advance(&mut doc),
            Err(QuizError::NothingSelected { finishing: true })
        );

        quiz.select_option(&mut doc, 1, 0).unwrap();
        assert_eq!(
            quiz.advance(&mut doc),
            Ok(Transition::Completed(FollowOn::NextModule(3)))
        );
        assert!(quiz.is_completed());
        assert!(doc.is_hidden(quiz.card(0).unwrap()));
        assert!(doc.is_hidden(quiz.card(1).unwrap()));

        let card = doc.get_element_by_id("completionCard").unwrap();
        assert!(doc.has_class(card, "active"));
        let bar = doc.get_element_by_id("progressBar").unwrap();
        assert_eq!(doc.style(bar, "width"), Some("100%"));

        assert_eq!(quiz.advance(&mut doc), Err(QuizError::AlreadyCompleted));
        assert_eq!(quiz.previous(&mut doc), Err(QuizError::AlreadyCompleted));
    }

    #[test]
    fn test_keyboard_wraps_within_question() {
        let (mut doc, mut quiz) = mount(2);
        assert!(quiz.on_key_name(&mut doc, "ArrowUp").unwrap());
        assert_eq!(quiz.focused_option(&doc), Some((0, 2)));
        assert!(quiz.on_key_name(&mut doc, "ArrowDown").unwrap());
        assert_eq!(quiz.focused_option(&doc), Some((0, 0)));
        assert!(quiz.on_key_name(&mut doc, "ArrowRight").unwrap());
        assert!(quiz.on_key_name(&mut doc, "Enter").unwrap());
        assert_eq!(quiz.selection(0), Some(1));
        assert!(!quiz.on_key_name(&mut doc, "Escape").unwrap());
    }

    #[test]
    fn test_click_routing() {
        let (mut doc, mut quiz) = mount(2);
        let option_text = doc
            .query_selector_all_within(quiz.option_node(0, 1).unwrap(), ".option-text")[0];
        assert_eq!(quiz.on_click(&mut doc, option_text), Ok(None));
        assert_eq!(quiz.selection(0), Some(1));

        let next = doc.query_selector_all_within(quiz.card(0).unwrap(), "button.btn-primary")[0];
        assert_eq!(
            quiz.on_click(&mut doc, next),
            Ok(Some(Transition::Question(1)))
        );

        let follow_on = doc.get_element_by_id("nextModuleBtn").unwrap();
        assert_eq!(quiz.on_click(&mut doc, follow_on), Ok(None));
    }

    #[test]
    fn test_last_module_follow_on_home() {
        let mut doc = skeleton::module_page();
        let quiz = QuizController::mount(
            &mut doc,
            module(7, 1),
            7,
            7,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(quiz.follow_on(), FollowOn::Home);
        assert_eq!(text_of(&doc, "nextModuleBtn"), "Back to Home");
    }

    #[test]
    fn test_missing_container_keeps_state_machine() {
        let mut doc = Document::new();
        let mut quiz = QuizController::mount(
            &mut doc,
            module(1, 2),
            1,
            7,
            &mut StdRng::seed_from_u64(1),
        );
        assert!(quiz.card(0).is_none());
        quiz.select_option(&mut doc, 0, 0).unwrap();
        assert_eq!(quiz.advance(&mut doc), Ok(Transition::Question(1)));
    }

    #[test]
    fn test_empty_module() {
        let (mut doc, mut quiz) = mount(0);
        assert_eq!(quiz.progress_percent(), 0.0);
        assert_eq!(quiz.advance(&mut doc), Err(QuizError::AtLastQuestion));
        assert_eq!(quiz.complete(&mut doc), Err(QuizError::NotAtLastQuestion));
    }
}
