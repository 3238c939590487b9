use expect_test::expect;
use tasklens_cli::{document, render_report, Backup};
use tasklens_decode::{Engine, OutputMode, RenderConfig};

fn fixture() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_backup.xml");
    std::fs::read_to_string(path).expect("read fixture")
}

fn render(config: RenderConfig) -> Vec<String> {
    let text = fixture();
    let doc = roxmltree::Document::parse(&text).expect("parse fixture");
    let backup = Backup::index(&doc).expect("index fixture");
    let mut engine = Engine::new(config).expect("static registry validates");
    let mut lines = Vec::new();
    render_report(&backup, &mut engine, &mut lines);
    lines
}

#[test]
fn plain_report_groups_by_project_and_profile() {
    let lines = render(RenderConfig::plain());
    expect![[r#"
        Project: Home
            Profile: Night
                Display State: Is:Off
                Device Boot
                Entry Task: Quiet
                    WiFi: Set:Off
                    Flash: Good night
            Task: Helper
                Variable Set: Name:%x, To:1
        No Project
            Task: Loose
                Unmapped action code 4242: a
    "#]]
    .assert_eq(&document("sample", &lines, OutputMode::Plain));
}

#[test]
fn html_report_styles_headings() {
    let lines = render(RenderConfig::html());
    assert_eq!(
        lines[0],
        r#"<b><span style="color:Navy">Project: Home</span></b>"#
    );
    let html = document("sample", &lines, OutputMode::Html);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>sample</title>"));
    assert!(html.contains(r#"<span style="color:DarkOrange">WiFi</span>"#));
}
