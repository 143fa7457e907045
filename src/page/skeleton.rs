//! Built-in host page skeletons.
//!
//! These provide every slot the populators and the quiz controller look
//! up, in their unrendered state.

use crate::dom::{el, Document, ElementNode};

use super::{HOME_PAGE, MODULES_ANCHOR};

/// Site name used in navigation and document titles.
pub const SITE_NAME: &str = "Conscious Choice";

fn nav(links: &[(&str, &str)]) -> ElementNode {
    el("header").class("site-header").child(
        el("nav")
            .child(el("a").class("logo").attr("href", HOME_PAGE).text(SITE_NAME))
            .child(el("div").class("nav-menu").children(
                links
                    .iter()
                    .map(|(href, label)| el("a").attr("href", *href).text(*label)),
            )),
    )
}

/// The homepage skeleton.
#[must_use]
pub fn homepage() -> Document {
    let mut doc = Document::new();
    doc.set_title(SITE_NAME);
    let body = doc.body();

    doc.append(
        body,
        nav(&[
            ("#hero", "Home"),
            ("#philosophy", "Philosophy"),
            ("#modules", "Modules"),
            ("#about", "About"),
        ]),
    );
    doc.append(
        body,
        el("section")
            .id("hero")
            .class("hero")
            .child(el("h1"))
            .child(el("p").class("tagline"))
            .child(el("div").class("description"))
            .child(el("a").class("cta-button").attr("href", "#modules")),
    );
    doc.append(
        body,
        el("section")
            .id("philosophy")
            .class("philosophy")
            .child(el("h2"))
            .child(el("div").id("philosophyCards").class("philosophy-grid")),
    );
    doc.append(
        body,
        el("section")
            .id("modules")
            .class("modules")
            .child(el("h2"))
            .child(el("p").class("modules-intro"))
            .child(el("div").class("module-list")),
    );
    doc.append(
        body,
        el("section")
            .id("about")
            .class("about")
            .child(el("h2"))
            .child(el("div").id("aboutParagraphs"))
            .child(el("div").id("projectMeta").class("project-meta")),
    );
    doc.append(body, el("footer").child(el("p").id("footerText")));
    doc
}

/// The module page skeleton.
#[must_use]
pub fn module_page() -> Document {
    let mut doc = Document::new();
    doc.set_title(SITE_NAME);
    let body = doc.body();

    doc.append(body, nav(&[(HOME_PAGE, "Home"), (MODULES_ANCHOR, "Modules")]));
    doc.append(
        body,
        el("div")
            .class("module-header")
            .child(el("span").id("moduleBadge").class("module-badge"))
            .child(el("h1").id("moduleTitle"))
            .child(el("p").id("moduleSubtitle").class("module-subtitle"))
            .child(el("p").id("moduleDescription")),
    );
    doc.append(
        body,
        el("div")
            .class("progress-container")
            .child(
                el("div")
                    .class("progress-text")
                    .text("Question ")
                    .child(el("span").id("currentQuestion").text("1"))
                    .text(" of ")
                    .child(el("span").id("totalQuestions")),
            )
            .child(
                el("div")
                    .class("progress-track")
                    .child(el("div").id("progressBar").class("progress-bar")),
            ),
    );
    doc.append(body, el("div").id("questionsContainer"));
    doc.append(
        body,
        el("div")
            .id("completionCard")
            .class("completion-card")
            .child(el("h2").text("Module Complete"))
            .child(el("p").id("completionMessage"))
            .child(el("button").id("nextModuleBtn").class("btn-primary")),
    );
    doc
}
