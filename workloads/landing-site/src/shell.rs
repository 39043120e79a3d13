//! Document shell around the page sections.

use crate::sections::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            html_escape(href)
        ));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Document skeleton: everything before and after the sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, header, `<main>`).
    pub body_start: String,
    /// HTML after sections (footer, scripts, closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "es".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", self.lang));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Wrap rendered sections into a complete document.
    pub fn wrap(&self, sections: &[String]) -> String {
        let mut html = self.render_opening();
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str(&self.render_closing());
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_escapes_title() {
        let head = HeadContent::new("Ricoh & Canon").with_meta("description", "a \"b\"");
        let html = head.render();
        assert!(html.contains("<title>Ricoh &amp; Canon</title>"));
        assert!(html.contains(r#"content="a &quot;b&quot;""#));
    }

    #[test]
    fn test_wrap_orders_sections() {
        let shell = Shell::new(HeadContent::new("t"));
        let html = shell.wrap(&["<section>a</section>".into(), "<section>b</section>".into()]);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"es\">"));
        let a = html.find("a</section>").unwrap();
        let b = html.find("b</section>").unwrap();
        assert!(a < b);
        assert!(html.ends_with("</html>"));
    }
}
