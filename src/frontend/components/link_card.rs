use askama::Template;

/// A navigable card around already rendered markup.
#[derive(Template)]
#[template(path = "components/link_card.html")]
pub struct LinkCard {
    pub href: String,
    pub body: String,
}

impl LinkCard {
    pub fn new(href: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            body: body.into(),
        }
    }

    /// Renders `inner` and wraps the result.
    pub fn wrap<T: Template>(href: impl Into<String>, inner: &T) -> askama::Result<Self> {
        Ok(Self::new(href, inner.render()?))
    }
}
