// Integration tests for comment extraction against realistic page markup
use comment_sentiment::extractor::{Extractor, MatcherConfig};
use comment_sentiment::page::{FilePage, StaticPage};
use comment_sentiment::SentimentError;
use tempfile::TempDir;

fn thread(author: &str, text: &str) -> String {
    format!(
        r#"
        <ytd-comment-thread-renderer class="style-scope ytd-item-section-renderer">
          <ytd-comment-renderer id="comment" class="style-scope ytd-comment-thread-renderer">
            <div id="header-author"><a id="author-text"><span>{author}</span></a></div>
            <ytd-expander id="expander">
              <div id="content">
                <yt-formatted-string id="content-text" class="style-scope ytd-comment-renderer">
                  {text}
                </yt-formatted-string>
              </div>
            </ytd-expander>
          </ytd-comment-renderer>
        </ytd-comment-thread-renderer>"#
    )
}

fn watch_page(threads: &[(&str, &str)]) -> String {
    let body: String = threads.iter().map(|(a, t)| thread(a, t)).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Some video - YouTube</title></head>
  <body>
    <ytd-app>
      <div id="description"><yt-formatted-string>Video description text</yt-formatted-string></div>
      <ytd-comments id="comments"><div id="contents">{body}</div></ytd-comments>
    </ytd-app>
  </body>
</html>"#
    )
}

#[test]
fn test_realistic_watch_page() {
    let extractor = Extractor::with_defaults().unwrap();
    let html = watch_page(&[
        ("@alice", "Great video!"),
        ("@bob", "Great video!"),
        ("@carol", "meh"),
        ("@dave", "Great video!"),
        ("@erin", "The part at 3:14 was <a href=\"#\">hilarious</a>, thanks"),
    ]);

    let comments = extractor.extract_html(&html);
    assert_eq!(
        comments.as_slice(),
        &[
            "Great video!",
            "The part at 3:14 was hilarious, thanks"
        ]
    );
}

#[test]
fn test_extracted_set_invariants() {
    let extractor = Extractor::with_defaults().unwrap();
    let threads: Vec<(String, String)> = (0..400)
        .map(|i| (format!("@user{i}"), format!("comment #{}", i % 260)))
        .collect();
    let refs: Vec<(&str, &str)> = threads
        .iter()
        .map(|(a, t)| (a.as_str(), t.as_str()))
        .collect();

    let comments = extractor.extract_html(&watch_page(&refs));

    assert_eq!(comments.len(), 200);
    let mut seen = std::collections::HashSet::new();
    for comment in &comments {
        assert!(comment.trim().chars().count() > 5);
        assert!(seen.insert(comment.clone()), "duplicate: {}", comment);
    }
}

#[test]
fn test_extract_from_sources() {
    let extractor = Extractor::with_defaults().unwrap();
    let html = watch_page(&[("@alice", "First comment here"), ("@bob", "Second comment here")]);

    let from_static = extractor.extract_from(&StaticPage::new(html.clone())).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("watch.html");
    std::fs::write(&path, &html).unwrap();
    let from_file = extractor.extract_from(&FilePage::new(&path)).unwrap();

    assert_eq!(from_static, from_file);
    assert_eq!(from_file.len(), 2);

    // Re-extracting an unchanged page gives the same set
    assert_eq!(extractor.extract_from(&FilePage::new(&path)).unwrap(), from_file);
}

#[test]
fn test_unreadable_page() {
    let extractor = Extractor::with_defaults().unwrap();
    let result = extractor.extract_from(&FilePage::new("/nonexistent/watch.html"));
    assert!(matches!(result, Err(SentimentError::Io { .. })));
}

#[test]
fn test_alternate_rendering_matcher() {
    // A page that renders comments without the usual element ids
    let html = r#"
        <div class="comment-list">
          <article class="comment"><p class="body">Works with other layouts too</p></article>
          <article class="comment"><p class="body">short</p></article>
        </div>"#;

    let extractor = Extractor::new(
        &[
            MatcherConfig::new("content_text", "#content-text"),
            MatcherConfig::new("article_body", "article.comment p.body"),
        ],
        5,
        200,
    )
    .unwrap();

    let comments = extractor.extract_html(html);
    assert_eq!(comments.as_slice(), &["Works with other layouts too"]);
}
