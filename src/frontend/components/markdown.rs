use askama::Template;
use pulldown_cmark::{html, Event, Options, Parser, Tag};

/// What a blog's `content` field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Raw Markdown, rendered here.
    Markdown,
    /// HTML pre-rendered by the backend (`parsed=true`).
    Html,
}

impl ContentSource {
    pub fn from_backend_rendering(enabled: bool) -> Self {
        if enabled {
            Self::Html
        } else {
            Self::Markdown
        }
    }

    /// Value of the backend's `parsed` query flag.
    pub fn parsed(self) -> bool {
        self == Self::Html
    }
}

/// Classes attached to paragraphs and strong emphasis in rendered content.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownStyle {
    pub paragraph_class: &'static str,
    pub strong_class: &'static str,
}

pub const CONTENT_STYLE: MarkdownStyle = MarkdownStyle {
    paragraph_class: "content-text",
    strong_class: "content-strong",
};

/// Blog body. Braces are not escaped for the author: `\{` is the way to get
/// a literal `{` through.
#[derive(Template)]
#[template(path = "components/markdown.html")]
pub struct Markdown {
    pub html: String,
}

impl Markdown {
    pub fn new(content: &str, source: ContentSource) -> Self {
        let html = match source {
            ContentSource::Markdown => markdown_to_html(content, &CONTENT_STYLE),
            ContentSource::Html => content.to_string(),
        };
        Self { html }
    }
}

pub fn markdown_to_html(markdown: &str, style: &MarkdownStyle) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).map(|ev| match ev {
        Event::Start(Tag::Paragraph) => {
            Event::Html(format!("<p class=\"{}\">", style.paragraph_class).into())
        }
        Event::End(Tag::Paragraph) => Event::Html("</p>\n".into()),
        Event::Start(Tag::Strong) => {
            Event::Html(format!("<strong class=\"{}\">", style.strong_class).into())
        }
        Event::End(Tag::Strong) => Event::Html("</strong>".into()),
        ev => ev,
    });

    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, events);
    out
}
