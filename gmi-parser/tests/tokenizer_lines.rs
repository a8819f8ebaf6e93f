//! Unit tests for normal-mode line classification
//!
//! One case per classification rule plus the priority edge cases: classification is
//! first-match-wins in the fixed order header, element, link, fence, paragraph.

use gmi_parser::gmi::lexing::{classify_line, LineClass};
use gmi_parser::gmi::Token;
use rstest::rstest;

fn header(level: usize, title: &str) -> LineClass {
    LineClass::Token(Token::Header {
        level,
        title: title.to_string(),
    })
}

fn element(content: &str) -> LineClass {
    LineClass::Token(Token::Element {
        content: content.to_string(),
    })
}

fn link(target: &str, title: &str) -> LineClass {
    LineClass::Token(Token::Link {
        target: target.to_string(),
        title: title.to_string(),
    })
}

fn paragraph(content: &str) -> LineClass {
    LineClass::Token(Token::Paragraph {
        content: content.to_string(),
    })
}

#[rstest]
#[case::h1("# Title", header(1, "Title"))]
#[case::h3("### Deep section", header(3, "Deep section"))]
#[case::header_keeps_inner_hashes("# a # b", header(1, "a # b"))]
#[case::list_item("* one", element("one"))]
#[case::list_item_extra_spaces("*   padded", element("padded"))]
#[case::link_with_title("=> /about About page", link("/about", "About page"))]
#[case::link_without_title("=> /about", link("/about", ""))]
#[case::link_no_space_before_target("=>/about", link("/about", ""))]
#[case::link_title_keeps_inner_spaces("=> gemini://x a b c", link("gemini://x", "a b c"))]
#[case::plain_text("Just text", paragraph("Just text"))]
#[case::empty_line("", paragraph(""))]
#[case::whitespace_only("   ", paragraph(""))]
#[case::hash_without_space("#nospace", paragraph("#nospace"))]
#[case::star_without_space("*nospace", paragraph("*nospace"))]
#[case::bare_arrow("=>", paragraph("=>"))]
#[case::line_is_trimmed("   padded text   ", paragraph("padded text"))]
fn classify(#[case] line: &str, #[case] expected: LineClass) {
    assert_eq!(classify_line(line), expected);
}

#[rstest]
#[case::bare("```")]
#[case::with_info("```python")]
#[case::indented("  ```")]
fn classify_fences(#[case] line: &str) {
    assert_eq!(classify_line(line), LineClass::Fence);
}
