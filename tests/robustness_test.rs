use aeo_analyzer::feedback::UNABLE_TO_ANALYZE;
use aeo_analyzer::{analyze, analyze_bytes, analyze_with_options, try_analyze, Error, Options, PageType, Score};

fn assert_contract_holds(html: &str) {
    let result = analyze(html);
    assert!(!result.feedback.is_empty(), "empty feedback for {html:?}");
    match result.score {
        Score::Points(p) => assert!(p <= 100),
        Score::NotApplicable => assert_eq!(result.intent, PageType::ExamMcq),
    }
}

#[test]
fn analyze_does_not_panic_on_malformed_html() {
    for html in [
        "<p>text<div>more",
        "<p><div></p></div>",
        "<html><body><article><h2>Unclosed?",
        "<div class=\"test id=broken>",
        "&amp text &lt;",
        "<h2><h3>nested headings</h2></h3><p>after</p>",
        "<ul><li><ul><li><ol><li>deep",
    ] {
        assert_contract_holds(html);
    }
}

#[test]
fn analyze_handles_empty_and_minimal_input() {
    for html in ["", "   \n\t  ", "<html></html>", "<body></body>"] {
        let result = analyze(html);
        assert!(result.sections.is_empty());
        assert_eq!(result.score, Score::Points(0));
        assert_eq!(result.intent, PageType::Informational);
        assert!(!result.feedback.is_empty());
    }
}

#[test]
fn analyze_handles_deep_nesting() {
    let depth = 200;
    let html = format!(
        "<body>{}<h2>Deep?</h2><p>Deep text is here.</p>{}</body>",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );

    let result = analyze(&html);

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].heading, "Deep?");
}

#[test]
fn analyze_handles_many_sections() {
    let body: String = (0..500)
        .map(|i| format!("<h2>Why step {i}?</h2><p>Step {i} is short.</p>"))
        .collect();
    let html = format!("<body>{body}</body>");

    let result = analyze(&html);

    assert_eq!(result.sections.len(), 500);
    assert_eq!(result.intent, PageType::QuestionInformational);
    assert_contract_holds(&html);
}

#[test]
fn script_and_style_text_is_ignored() {
    let html = r#"<body>
        <script>document.write("<h2>Injected?</h2>");</script>
        <style>h2::before { content: "What is"; }</style>
        <noscript><h2>Enable JavaScript?</h2></noscript>
        <h2>Real heading</h2>
        <p>Real text.</p>
    </body>"#;

    let result = analyze(html);

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].heading, "Real heading");
}

#[test]
fn invalid_discard_selector_degrades_to_error_result() {
    let options = Options {
        discard_selectors: vec!["nav".to_string(), "div[[".to_string()],
        ..Options::default()
    };
    let html = "<body><h2>What is AEO?</h2><p>AEO is a practice.</p></body>";

    let result = analyze_with_options(html, &options);

    assert_eq!(result.intent, PageType::Error);
    assert_eq!(result.score, Score::Points(0));
    assert_eq!(result.feedback, [UNABLE_TO_ANALYZE]);
    assert!(result.sections.is_empty());

    assert_eq!(
        try_analyze(html, &options).unwrap_err(),
        Error::InvalidSelector("div[[".to_string())
    );
}

#[test]
fn missing_root_degrades_to_error_result() {
    let options = Options {
        root_selector: "main#content".to_string(),
        ..Options::default()
    };

    let result = analyze_with_options("<body><h2>Title</h2></body>", &options);

    assert!(result.is_error());
    assert_eq!(result.feedback, [UNABLE_TO_ANALYZE]);
}

#[test]
fn analyze_bytes_accepts_invalid_utf8() {
    let result = analyze_bytes(b"<body><h2>Broken \xFF\xFE bytes?</h2><p>Still fine.</p></body>");

    assert_eq!(result.sections.len(), 1);
    assert!(result.sections[0].heading.starts_with("Broken"));
    assert_eq!(result.intent, PageType::QuestionInformational);
}

#[test]
fn analyze_bytes_honours_declared_charset() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><h2>Qu'est-ce qu'un caf\xE9?</h2><p>Un caf\xE9 est une boisson.</p></body></html>";

    let result = analyze_bytes(html);

    assert_eq!(result.sections[0].heading, "Qu'est-ce qu'un café?");
}
