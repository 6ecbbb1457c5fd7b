use sitepack_prerender::{
    post_process, process_routes, DocumentStructureError, PostProcessor, RenderedRoute,
};

const RENDERED: &str = r#"<html style="x"><head><link href="/app.css"></head><body><div id="app">hi</div><script src="/app.js"></script></body></html>"#;

fn body(html: &str) -> &str {
    let start = html.find("<body>").expect("body open") + "<body>".len();
    let end = html.find("</body>").expect("body close");
    &html[start..end]
}

#[test]
fn end_to_end_rendered_route() {
    let output = post_process(RENDERED, "/static/").unwrap();

    assert_eq!(
        body(&output),
        r#"<div id="app">hi</div><script src="/static/app.js"></script>"#
    );
    assert!(output.contains(r#"<link href="/static/app.css">"#));
    assert!(!output.contains("style="));
}

#[test]
fn protocol_relative_script_is_byte_identical() {
    let html = r#"<html><head></head><body><div id="app"></div><script src="//cdn.example.com/lib.js"></script></body></html>"#;
    let output = post_process(html, "/static/").unwrap();
    assert!(output.contains(r#"<script src="//cdn.example.com/lib.js"></script>"#));
}

#[test]
fn applying_twice_prefixes_relative_urls_twice() {
    let once = post_process(RENDERED, "/static/").unwrap();
    let twice = post_process(&once, "/static/").unwrap();

    assert!(twice.contains(r#"<script src="/static/static/app.js"></script>"#));
    assert!(twice.contains(r#"<link href="/static/static/app.css">"#));
}

#[test]
fn applying_twice_leaves_absolute_urls_alone() {
    let html = r#"<html><body><div id="app"></div><script src="https://cdn.example.com/lib.js"></script></body></html>"#;
    let once = post_process(html, "/static/").unwrap();
    assert_eq!(post_process(&once, "/static/").unwrap(), once);
}

#[test]
fn missing_app_root_is_fatal() {
    let html = r#"<html><body><div id="main">hi</div></body></html>"#;
    let err = post_process(html, "/static/").unwrap_err();
    assert_eq!(
        err,
        DocumentStructureError::MissingAppRoot {
            id: "app".to_string()
        }
    );
}

#[test]
fn document_without_link_is_fine() {
    let html = r#"<html><head><title>t</title></head><body><div id="app">hi</div></body></html>"#;
    let output = post_process(html, "/static/").unwrap();
    assert!(output.contains("<head><title>t</title></head>"));
    assert_eq!(body(&output), r#"<div id="app">hi</div>"#);
}

#[test]
fn scripts_keep_relative_order() {
    let html = r#"<html><body><script src="/1.js"></script><div id="app"></div><script src="https://x.example/2.js"></script><script src="3.js"></script></body></html>"#;
    let output = post_process(html, "/p/").unwrap();
    assert_eq!(
        body(&output),
        r#"<div id="app"></div><script src="/p/1.js"></script><script src="https://x.example/2.js"></script><script src="/p/3.js"></script>"#
    );
}

#[test]
fn output_is_deterministic() {
    let html = r#"<html lang="en" data-x="1"><body><div class="a" id="app" data-b="2">x</div><script defer src="/a.js"></script></body></html>"#;
    let first = post_process(html, "/static/").unwrap();
    for _ in 0..8 {
        assert_eq!(post_process(html, "/static/").unwrap(), first);
    }
}

#[test]
fn doctype_is_preserved() {
    let html = format!("<!DOCTYPE html>{RENDERED}");
    let output = post_process(&html, "/static/").unwrap();
    assert!(output.starts_with("<!DOCTYPE html><html>"));
}

#[test]
fn batch_reports_route_and_keeps_order() {
    let hook = PostProcessor::new("/static/");
    let routes = vec![
        RenderedRoute::new("/", RENDERED),
        RenderedRoute::new("/detail", RENDERED),
    ];
    let processed = process_routes(&hook, routes).unwrap();
    assert_eq!(processed[0].route, "/");
    assert_eq!(processed[1].route, "/detail");
    assert!(processed.iter().all(|r| r.html.contains("/static/app.js")));

    let broken = vec![
        RenderedRoute::new("/", RENDERED),
        RenderedRoute::new("/detail2", "<html><body></body></html>"),
    ];
    let err = process_routes(&hook, broken).unwrap_err();
    assert_eq!(err.route, "/detail2");
}

#[test]
fn headless_render_output_matches_fixture() {
    let rendered = include_str!("fixtures/rendered_route.html");
    let expected = include_str!("fixtures/post_processed_route.html");

    let output = post_process(rendered, "/static/").unwrap();
    assert_eq!(output.trim_end(), expected.trim_end());
}

#[test]
fn inline_script_operators_survive() {
    let html = r#"<html><body><div id="app">hi</div><script>if (a < b && c > d) { x("</div>"); }</script><script src="/app.js"></script></body></html>"#;
    let output = post_process(html, "/s/").unwrap();
    assert_eq!(
        body(&output),
        r#"<div id="app">hi</div><script>if (a < b && c > d) { x("</div>"); }</script><script src="/s/app.js"></script>"#
    );
}

#[test]
fn every_body_script_follows_the_app_root() {
    let html = r#"<html><body><div id="app"><script src="/in.js"></script></div><script src="/app.js"></script></body></html>"#;
    let output = post_process(html, "/s/").unwrap();
    assert_eq!(
        body(&output),
        r#"<div id="app"><script src="/s/in.js"></script></div><script src="/s/in.js"></script><script src="/s/app.js"></script>"#
    );
}

#[test]
fn upper_case_attribute_names_are_recognized() {
    let html = r#"<html><body><DIV ID="app">x</DIV><script SRC="a.js"></script></body></html>"#;
    let output = post_process(html, "/s/").unwrap();
    assert_eq!(body(&output), r#"<div id="app">x</div><script src="/s/a.js"></script>"#);
}
