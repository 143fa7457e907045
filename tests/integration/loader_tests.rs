use conscious_choice::content::{
    check_module, AuthoringIssue, ContentError, ContentLoader, DirFetcher, Fetcher,
    HeroDescription,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, name: &str, body: &str) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(name), body).unwrap();
}

const MODULE: &str = r#"{
    "id": 1,
    "title": "Honesty",
    "questions": [{
        "title": "The mistake",
        "scenario": "You broke the build.",
        "question": "What now?",
        "options": [
            { "text": "Own it", "correct": true },
            { "text": "Blame CI" }
        ]
    }]
}"#;

#[test]
fn test_load_module_from_directory() {
    let dir = tempdir().unwrap();
    write(dir.path(), "module1.json", MODULE);

    let loader = ContentLoader::new(DirFetcher::new(dir.path()));
    let module = loader.load_module(1).unwrap();
    assert_eq!(module.title, "Honesty");
    assert_eq!(module.subtitle, "");
    assert_eq!(module.question_count(), 1);
    assert!(!module.questions[0].options[1].correct);
    assert!(check_module(&module, 1).is_empty());
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let loader = ContentLoader::new(DirFetcher::new(dir.path()));

    match loader.load_module(4) {
        Err(ContentError::Load { path, reason }) => {
            assert_eq!(path, "data/module4.json");
            assert!(reason.contains("404"));
        }
        other => panic!("Expected Load error, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "module2.json", r#"{ "id": 2, "title": "No questions key" }"#);

    let loader = ContentLoader::new(DirFetcher::new(dir.path()));
    let err = loader.load_module(2).unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
    assert_eq!(err.path(), "data/module2.json");
}

#[test]
fn test_fetcher_refuses_paths_outside_root() {
    let dir = tempdir().unwrap();
    let fetcher = DirFetcher::new(dir.path().join("site"));
    let response = fetcher.fetch("../secret.json").unwrap();
    assert!(!response.is_success());
    assert_eq!(response.status, 403);
}

#[test]
fn test_homepage_fails_on_single_missing_module() {
    let dir = tempdir().unwrap();
    for id in 1..=3 {
        write(
            dir.path(),
            &format!("module{id}.json"),
            &MODULE.replace("\"id\": 1", &format!("\"id\": {id}")),
        );
    }
    write(
        dir.path(),
        "site.json",
        r#"{
            "hero": { "title": "T", "tagline": "G", "description": "One block" },
            "philosophy": { "title": "P", "cards": [] },
            "modules": { "title": "M" },
            "about": { "title": "A", "paragraphs": [] },
            "footer": { "text": "F" }
        }"#,
    );

    let loader = ContentLoader::new(DirFetcher::new(dir.path())).with_module_count(3);
    let content = loader.load_homepage().unwrap();
    assert_eq!(content.modules.len(), 3);
    assert_eq!(
        content.site.hero.description,
        HeroDescription::Text("One block".to_string())
    );

    let loader = ContentLoader::new(DirFetcher::new(dir.path())).with_module_count(4);
    let err = loader.load_homepage().unwrap_err();
    assert_eq!(err.path(), "data/module4.json");
}

#[test]
fn test_check_reports_authoring_issues() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "module5.json",
        r#"{
            "id": 6,
            "title": "Courage",
            "questions": [{
                "title": "Q",
                "scenario": "S",
                "question": "?",
                "options": [
                    { "text": "a", "correct": true },
                    { "text": "b", "correct": true }
                ]
            }]
        }"#,
    );

    let loader = ContentLoader::new(DirFetcher::new(dir.path()));
    let module = loader.load_module(5).unwrap();
    let issues = check_module(&module, 5);
    assert!(issues.contains(&AuthoringIssue::IdMismatch {
        expected: 5,
        found: 6
    }));
    assert!(issues.contains(&AuthoringIssue::CorrectCount {
        question: 0,
        count: 2
    }));
}
