#![no_main]
use html_query_selector::QuerySelector;
use libfuzzer_sys::fuzz_target;

const DOC: &str = r#"<div id="a"><span class="b">x</span></div>"#;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Split the input into a tag name, an attribute name and a value.
        let mut parts = input.splitn(3, '\0');
        let tag = parts.next().unwrap_or_default();
        let attr = parts.next().unwrap_or_default();
        let value = parts.next();

        // Building and evaluating should never panic on any name or value.
        if let Ok(mut selector) = QuerySelector::new(DOC) {
            let _ = selector
                .tag(tag)
                .attribute(attr, value)
                .or_has_attribute(attr)
                .length();
            let _ = selector.attribute(attr, value).to_query();
        }

        // Arbitrary markup must load.
        if let Ok(mut selector) = QuerySelector::new(input) {
            let _ = selector.tag("p").length();
        }
    }
});
