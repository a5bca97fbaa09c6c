use outline_core::{ELLIPSIS, MAX_ENTRY_CHARS};
use outline_engine::UserMessageExtractor;
use pretty_assertions::assert_eq;

#[test]
fn primary_candidates_become_entries_in_document_order() {
    let long = "x".repeat(60);
    let markup = format!(
        "<html><body>\
         <user-query>Hi</user-query>\
         <user-query>{long}</user-query>\
         <user-query>   </user-query>\
         </body></html>"
    );

    let snapshot = UserMessageExtractor::new().extract(&markup);

    let entries = snapshot.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "query-0");
    assert_eq!(entries[0].text, "Hi");
    assert_eq!(entries[1].id, "query-1");
    assert_eq!(entries[1].text, format!("{}{ELLIPSIS}", "x".repeat(50)));
}

#[test]
fn truncated_text_stays_within_the_bound() {
    let long = "word ".repeat(40);
    let markup = format!("<html><body><user-query>{long}</user-query></body></html>");

    let snapshot = UserMessageExtractor::new().extract(&markup);

    let text = &snapshot.entries()[0].text;
    assert!(text.ends_with(ELLIPSIS));
    assert_eq!(text.chars().count(), MAX_ENTRY_CHARS + ELLIPSIS.len());
}

#[test]
fn class_marked_elements_match_the_primary_query() {
    let markup = r#"<html><body><div class="user-query">Classy</div></body></html>"#;

    let snapshot = UserMessageExtractor::new().extract(markup);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].text, "Classy");
}

#[test]
fn fallback_keeps_only_user_authored_messages() {
    let markup = r#"<html><body>
        <div data-message-id="m1" data-is-user-message="true">Explain X</div>
        <div data-message-id="m2">Assistant reply</div>
        <div data-message-id="m3" data-is-user-message="false">Another reply</div>
    </body></html>"#;

    let snapshot = UserMessageExtractor::new().extract(markup);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].id, "query-0");
    assert_eq!(snapshot.entries()[0].text, "Explain X");
}

#[test]
fn fallback_is_ignored_while_primary_matches() {
    let markup = r#"<html><body>
        <user-query>From primary</user-query>
        <div data-message-id="m1" data-is-user-message="true">From fallback</div>
    </body></html>"#;

    let snapshot = UserMessageExtractor::new().extract(markup);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.entries()[0].text, "From primary");
}

#[test]
fn nested_markup_text_is_concatenated() {
    let markup = "<html><body><user-query><p>Hello</p> <p>world</p></user-query></body></html>";

    let snapshot = UserMessageExtractor::new().extract(markup);

    assert_eq!(snapshot.entries()[0].text, "Hello world");
}

#[test]
fn entries_follow_document_order_across_sections() {
    let markup = r#"<html><body>
        <section><user-query>First</user-query></section>
        <section>
            <div><user-query>Second</user-query></div>
            <user-query>Third</user-query>
        </section>
    </body></html>"#;

    let snapshot = UserMessageExtractor::new().extract(markup);

    let texts: Vec<_> = snapshot.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "Second", "Third"]);
    let ids: Vec<_> = snapshot.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["query-0", "query-1", "query-2"]);
}

#[test]
fn extraction_is_deterministic_for_equal_markup() {
    let markup = r#"<html><body>
        <user-query>One</user-query>
        <user-query>Two</user-query>
    </body></html>"#;
    let extractor = UserMessageExtractor::new();

    let first = extractor.extract(markup);
    let second = extractor.extract(markup);

    assert_eq!(first, second);
}

#[test]
fn no_candidates_yield_an_empty_snapshot() {
    let markup = "<html><body><p>plain prose, no messages</p></body></html>";

    let snapshot = UserMessageExtractor::new().extract(markup);

    assert!(snapshot.is_empty());
}
