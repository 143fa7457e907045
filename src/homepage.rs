//! Homepage population.
//!
//! Writes site content and module summaries into the fixed homepage slots.
//! Each region looks up its anchors independently and skips anything the
//! host page does not provide, so one missing region never stops the rest
//! of the page from rendering.

use crate::content::{
    About, Footer, Hero, HeroDescription, HomepageContent, Module, ModulesSection, Philosophy,
};
use crate::dom::{el, Document, ElementNode};
use crate::page::module_href;

/// Number of description characters shown on a module card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 180;

/// Populate every homepage region from loaded content.
pub fn populate_homepage(doc: &mut Document, content: &HomepageContent) {
    populate_hero(doc, &content.site.hero);
    populate_philosophy(doc, &content.site.philosophy);
    populate_modules_section(doc, &content.site.modules, &content.modules);
    populate_about(doc, &content.site.about);
    populate_footer(doc, &content.site.footer);
}

pub fn populate_hero(doc: &mut Document, hero: &Hero) {
    if let Some(title) = doc.query_selector(".hero h1") {
        doc.set_text(title, hero.title.as_str());
    }
    if let Some(tagline) = doc.query_selector(".hero .tagline") {
        doc.set_text(tagline, hero.tagline.as_str());
    }
    if let Some(description) = doc.query_selector(".hero .description") {
        match &hero.description {
            HeroDescription::Text(text) => doc.set_text(description, text.as_str()),
            HeroDescription::Paragraphs(paragraphs) => {
                doc.set_children(description, paragraphs.iter().map(|p| el("p").text(p.as_str())));
            }
        }
    }
    if let Some(cta) = doc.query_selector(".cta-button") {
        doc.set_text(cta, hero.cta_text.as_str());
        doc.set_attr(cta, "href", hero.cta_link.as_str());
    }
}

pub fn populate_philosophy(doc: &mut Document, philosophy: &Philosophy) {
    if let Some(title) = doc.query_selector(".philosophy h2") {
        doc.set_text(title, philosophy.title.as_str());
    }
    let Some(cards) = doc.get_element_by_id("philosophyCards") else {
        return;
    };
    doc.set_children(
        cards,
        philosophy.cards.iter().map(|card| {
            el("div")
                .class("philosophy-card")
                .child(el("h3").text(card.title.as_str()))
                .child(el("p").text(card.text.as_str()))
        }),
    );
}

/// Populate the module list heading and one summary card per module.
///
/// Cards are numbered by list position, never by the module's own id.
pub fn populate_modules_section(doc: &mut Document, section: &ModulesSection, modules: &[Module]) {
    if let Some(title) = doc.query_selector("#modules h2") {
        doc.set_text(title, section.title.as_str());
    }
    if let Some(intro) = doc.query_selector(".modules-intro") {
        doc.set_text(intro, section.intro.as_str());
    }
    let Some(list) = doc.query_selector(".module-list") else {
        return;
    };
    doc.set_children(
        list,
        modules
            .iter()
            .enumerate()
            .map(|(index, module)| module_card(index, module)),
    );
}

/// Summary card for the module at list position `index` (0-based).
#[must_use]
pub fn module_card(index: usize, module: &Module) -> ElementNode {
    let href = module_href(module.id);
    el("div")
        .class("module-card")
        .attr("data-href", href.as_str())
        .child(el("div").class("module-number").text(format!("{:02}", index + 1)))
        .child(el("h3").text(module.title.as_str()))
        .child(el("p").class("module-role").text(module.subtitle.as_str()))
        .child(el("p").text(preview_description(&module.description)))
        .child(
            el("a")
                .class("module-link")
                .attr("href", href)
                .text(format!("{} Scenarios →", module.question_count())),
        )
}

/// First [`DESCRIPTION_PREVIEW_CHARS`] characters followed by `...`.
///
/// The cut is by character, not by word, and the ellipsis is always added.
#[must_use]
pub fn preview_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

pub fn populate_about(doc: &mut Document, about: &About) {
    if let Some(title) = doc.query_selector("#about h2") {
        doc.set_text(title, about.title.as_str());
    }
    if let Some(paragraphs) = doc.get_element_by_id("aboutParagraphs") {
        doc.set_children(
            paragraphs,
            about.paragraphs.iter().map(|p| el("p").text(p.as_str())),
        );
    }
    if let Some(meta) = doc.get_element_by_id("projectMeta") {
        doc.set_children(
            meta,
            about.meta.iter().map(|item| {
                el("p")
                    .child(el("strong").text(format!("{}:", item.label)))
                    .text(format!(" {}", item.value))
            }),
        );
    }
}

pub fn populate_footer(doc: &mut Document, footer: &Footer) {
    let target = doc
        .get_element_by_id("footerText")
        .or_else(|| doc.query_selector("footer p"));
    if let Some(target) = target {
        doc.set_text(target, footer.text.as_str());
    }
}
