//! Markdown rendering for the reader view

use pulldown_cmark::{html, Options, Parser};

/// Render post markdown to HTML.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
