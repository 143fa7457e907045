use conscious_choice::content::{ContentLoader, DirFetcher};
use conscious_choice::dom::Document;
use conscious_choice::page::PageKind;
use conscious_choice::site::{Page, PageView, Site};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

// =============================================================================
// Fixtures
// =============================================================================

/// Module `id` has `id` questions with three options each.
fn module_json(id: u32) -> serde_json::Value {
    let questions: Vec<_> = (1..=id)
        .map(|q| {
            json!({
                "title": format!("Scenario {q}"),
                "scenario": format!("Situation {q} of module {id}"),
                "question": "What do you do?",
                "options": [
                    { "text": "Speak up", "correct": true, "feedback": "Honest." },
                    { "text": "Stay quiet", "correct": false, "feedback": "Avoidant." },
                    { "text": "Change the subject", "correct": false, "feedback": "Evasive." }
                ],
                "resources": [{ "title": "Reading", "url": "https://example.org/read" }]
            })
        })
        .collect();
    json!({
        "id": id,
        "title": format!("Module title {id}"),
        "subtitle": format!("Role {id}"),
        "description": "x".repeat(200),
        "completionMessage": format!("Finished module {id}"),
        "questions": questions
    })
}

fn site_json() -> serde_json::Value {
    json!({
        "hero": {
            "title": "Conscious Choice",
            "tagline": "Decide on purpose",
            "description": ["First paragraph", "Second paragraph"],
            "ctaText": "Start",
            "ctaLink": "#modules"
        },
        "philosophy": {
            "title": "Philosophy",
            "cards": [{ "title": "Awareness", "text": "Notice first." }]
        },
        "modules": { "title": "Modules", "intro": "Seven practices." },
        "about": {
            "title": "About",
            "paragraphs": ["We teach choices."],
            "meta": [{ "label": "Version", "value": "1.0" }]
        },
        "footer": { "text": "Made with care" }
    })
}

fn write_json(root: &Path, name: &str, value: &serde_json::Value) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(name), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn full_site() -> TempDir {
    let dir = tempdir().unwrap();
    write_json(dir.path(), "site.json", &site_json());
    for id in 1..=7 {
        write_json(dir.path(), &format!("module{id}.json"), &module_json(id));
    }
    dir
}

/// Like [`full_site`], but `module{n}.json` carries id `8 - n`.
fn reversed_ids_site() -> TempDir {
    let dir = full_site();
    for n in 1..=7u32 {
        let mut module = module_json(n);
        module["id"] = json!(8 - n);
        write_json(dir.path(), &format!("module{n}.json"), &module);
    }
    dir
}

fn lay_out(page: &mut Page) {
    let doc = page.document_mut();
    for (id, top) in [("hero", 0.0), ("philosophy", 900.0), ("modules", 1800.0), ("about", 2700.0)] {
        let section = doc.get_element_by_id(id).unwrap();
        doc.set_offset_top(section, top);
    }
}

fn active_nav_links(doc: &Document) -> Vec<String> {
    doc.query_selector_all(".nav-menu a.active")
        .into_iter()
        .filter_map(|link| doc.attr(link, "href").map(str::to_string))
        .collect()
}

fn site(root: &Path) -> Site<DirFetcher> {
    Site::new(ContentLoader::new(DirFetcher::new(root)))
}

fn open(root: &Path, url: &str) -> PageView {
    site(root).open(url, &mut StdRng::seed_from_u64(1))
}

fn rendered(view: PageView) -> Page {
    match view {
        PageView::Rendered(page) => page,
        other => panic!("Expected a rendered page, got {:?}", other),
    }
}

fn text_of(doc: &Document, selector: &str) -> String {
    doc.query_selector(selector)
        .map(|node| doc.text_content(node))
        .unwrap_or_default()
}

// =============================================================================
// Homepage
// =============================================================================

#[test]
fn test_homepage_renders_every_region() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "index.html"));
    assert_eq!(page.kind(), PageKind::Home);
    assert!(page.is_populated());

    let doc = page.document();
    assert_eq!(text_of(doc, ".hero h1"), "Conscious Choice");
    assert_eq!(text_of(doc, ".hero .tagline"), "Decide on purpose");
    assert_eq!(doc.query_selector_all(".hero .description p").len(), 2);
    assert_eq!(doc.query_selector_all("#philosophyCards .philosophy-card").len(), 1);
    assert_eq!(text_of(doc, "#footerText"), "Made with care");
}

#[test]
fn test_module_cards_numbered_by_position() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "index.html"));
    let doc = page.document();

    let numbers: Vec<String> = doc
        .query_selector_all(".module-card .module-number")
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect();
    assert_eq!(numbers, ["01", "02", "03", "04", "05", "06", "07"]);

    let links: Vec<String> = doc
        .query_selector_all(".module-card .module-link")
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect();
    assert_eq!(links[2], "3 Scenarios →");
}

#[test]
fn test_module_card_numbers_ignore_data_ids() {
    let dir = reversed_ids_site();
    let page = rendered(open(dir.path(), "index.html"));
    assert!(page.is_populated());
    let doc = page.document();

    let cards = doc.query_selector_all(".module-card");
    assert_eq!(cards.len(), 7);
    for (index, &card) in cards.iter().enumerate() {
        let number = doc.query_selector_all_within(card, ".module-number")[0];
        assert_eq!(doc.text_content(number), format!("{:02}", index + 1));

        let data_id = 7 - index;
        let expected = format!("module.html?id={data_id}");
        assert_eq!(doc.attr(card, "data-href"), Some(expected.as_str()));
        let link = doc.query_selector_all_within(card, ".module-link")[0];
        assert_eq!(doc.attr(link, "href"), Some(expected.as_str()));
    }
}

#[test]
fn test_module_card_description_is_truncated() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "index.html"));
    let doc = page.document();

    let card = doc.query_selector(".module-card").unwrap();
    let paragraphs = doc.query_selector_all_within(card, "p");
    let preview = doc.text_content(*paragraphs.last().unwrap());
    assert_eq!(preview, format!("{}...", "x".repeat(180)));
}

#[test]
fn test_homepage_any_module_failure_leaves_skeleton() {
    let dir = full_site();
    fs::remove_file(dir.path().join("data/module5.json")).unwrap();

    let page = rendered(open(dir.path(), "index.html"));
    assert!(!page.is_populated());
    assert_eq!(page.error().unwrap().path(), "data/module5.json");

    let doc = page.document();
    assert_eq!(text_of(doc, ".hero h1"), "");
    assert_eq!(text_of(doc, "#footerText"), "");
    assert!(doc.query_selector_all(".module-card").is_empty());
}

#[test]
fn test_homepage_malformed_site_document() {
    let dir = full_site();
    fs::write(dir.path().join("data/site.json"), "{ not json").unwrap();

    let page = rendered(open(dir.path(), "index.html"));
    assert!(!page.is_populated());
    assert!(page.error().unwrap().to_string().contains("data/site.json"));
}

// =============================================================================
// Scrolling
// =============================================================================

#[test]
fn test_homepage_scroll_highlights_one_link() {
    let dir = full_site();
    let mut page = rendered(open(dir.path(), "index.html"));
    lay_out(&mut page);

    assert_eq!(page.on_scroll(0.0).as_deref(), Some("hero"));
    assert_eq!(active_nav_links(page.document()), ["#hero"]);

    assert_eq!(page.on_scroll(1700.0).as_deref(), Some("modules"));
    assert_eq!(active_nav_links(page.document()), ["#modules"]);

    assert_eq!(page.on_scroll(99_999.0).as_deref(), Some("about"));
    assert_eq!(active_nav_links(page.document()), ["#about"]);
}

#[test]
fn test_homepage_anchor_scroll_targets() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "index.html"));
    let doc = page.document();

    assert_eq!(page.scroll_target("#about"), doc.get_element_by_id("about"));
    assert_eq!(page.scroll_target("#modules"), doc.get_element_by_id("modules"));
    // an id that exists but no link points at
    assert_eq!(page.scroll_target("#footerText"), None);
    assert_eq!(page.scroll_target("#"), None);
    assert_eq!(page.scroll_target("index.html"), None);
}

#[test]
fn test_module_page_scrolling() {
    let dir = full_site();
    let mut page = rendered(open(dir.path(), "module.html?id=2"));

    assert_eq!(page.on_scroll(0.0), None);
    assert!(active_nav_links(page.document()).is_empty());
    assert_eq!(page.scroll_target("#modules"), None);
    assert_eq!(page.scroll_target("index.html#modules"), None);
}

// =============================================================================
// Module page
// =============================================================================

#[test]
fn test_module_page_renders_one_visible_card() {
    let dir = full_site();
    for id in 1..=7u32 {
        let page = rendered(open(dir.path(), &format!("module.html?id={id}")));
        let doc = page.document();
        let cards = doc.query_selector_all(".question-card");
        assert_eq!(cards.len(), id as usize);

        let visible: Vec<_> = cards.iter().filter(|&&c| !doc.is_hidden(c)).collect();
        assert_eq!(visible.len(), 1, "module {id}");
        assert_eq!(text_of(doc, "#totalQuestions"), id.to_string());
    }
}

#[test]
fn test_module_page_header_and_title() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "module.html?id=3"));
    let doc = page.document();

    assert_eq!(text_of(doc, "#moduleBadge"), "Module 3");
    assert_eq!(text_of(doc, "#moduleTitle"), "Module title 3");
    assert_eq!(text_of(doc, "#moduleSubtitle"), "Role 3");
    assert_eq!(doc.title(), "Module title 3 - Conscious Choice");
    assert_eq!(text_of(doc, "#completionMessage"), "Finished module 3");
    assert_eq!(text_of(doc, "#nextModuleBtn"), "Next Module");
    let button = doc.get_element_by_id("nextModuleBtn").unwrap();
    assert_eq!(doc.attr(button, "data-href"), Some("module.html?id=4"));
}

#[test]
fn test_last_module_returns_home() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "module.html?id=7"));
    let quiz = page.quiz().unwrap();
    assert_eq!(quiz.follow_on().href(), "index.html");
    assert_eq!(text_of(page.document(), "#nextModuleBtn"), "Back to Home");
}

#[test]
fn test_lenient_id_parsing() {
    let dir = full_site();
    let page = rendered(open(dir.path(), "module.html?id=3abc"));
    assert_eq!(text_of(page.document(), "#moduleBadge"), "Module 3");
}

#[test]
fn test_invalid_ids_redirect_home() {
    let dir = full_site();
    for url in [
        "module.html?id=8",
        "module.html?id=0",
        "module.html?id=abc",
        "module.html",
    ] {
        match open(dir.path(), url) {
            PageView::Redirect(target) => assert_eq!(target, "index.html", "{url}"),
            other => panic!("Expected redirect for {url}, got {:?}", other),
        }
    }
}

#[test]
fn test_follow_lands_on_homepage() {
    let dir = full_site();
    let page = rendered(site(dir.path()).follow("module.html?id=99", &mut StdRng::seed_from_u64(0)));
    assert_eq!(page.kind(), PageKind::Home);
}

#[test]
fn test_unknown_page_is_inert() {
    let dir = full_site();
    assert!(matches!(open(dir.path(), "about.html"), PageView::Inert));
}

#[test]
fn test_missing_module_keeps_skeleton() {
    let dir = full_site();
    fs::remove_file(dir.path().join("data/module2.json")).unwrap();

    let page = rendered(open(dir.path(), "module.html?id=2"));
    assert!(page.quiz().is_none());
    assert_eq!(text_of(page.document(), "#moduleTitle"), "");
    assert!(page.document().query_selector_all(".question-card").is_empty());
}

#[test]
fn test_same_seed_same_option_order() {
    let dir = full_site();
    let site = site(dir.path());
    let order = |seed: u64| -> Vec<String> {
        let page = rendered(site.open("module.html?id=4", &mut StdRng::seed_from_u64(seed)));
        let quiz = page.quiz().unwrap();
        (0..quiz.question_count())
            .flat_map(|q| quiz.displayed_options(q).to_vec())
            .map(|o| o.text)
            .collect()
    };
    assert_eq!(order(11), order(11));
}
