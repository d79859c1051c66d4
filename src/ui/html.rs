//! HTML presenter.
//!
//! Produces the markup of the catalog page's result grid: one `tool-card`
//! per tool, or the `empty-state` block, plus the result count text and the
//! theme classes of the page body and toggle icon. All record-supplied text is
//! escaped before it is interpolated.

use crate::ui::renderer::Presenter;
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::{EmptyState, ToolCard};
use std::fmt::Write as _;

/// Presenter that keeps the last rendered grid and count as HTML strings.
#[derive(Debug, Clone, Default)]
pub struct HtmlPresenter {
    grid: String,
    count: String,
    theme: ThemeMode,
}

impl HtmlPresenter {
    /// Inner HTML of the tools grid.
    #[must_use]
    pub fn grid_html(&self) -> &str {
        &self.grid
    }

    /// Text content of the result count element.
    #[must_use]
    pub fn count_text(&self) -> &str {
        &self.count
    }

    /// Class on the page body: `dark` in dark mode, none in light mode.
    #[must_use]
    pub const fn body_class(&self) -> Option<&'static str> {
        self.theme.body_class()
    }

    /// Icon classes of the theme toggle button.
    #[must_use]
    pub const fn theme_icon_class(&self) -> &'static str {
        self.theme.indicator().css_class()
    }
}

impl Presenter for HtmlPresenter {
    fn render_cards(&mut self, cards: &[ToolCard]) {
        self.grid = cards.iter().map(card_html).collect();
    }

    fn render_empty(&mut self, empty: &EmptyState) {
        self.grid = empty_html(empty);
    }

    fn render_count(&mut self, count: &str) {
        self.count = count.to_string();
    }

    fn render_theme(&mut self, mode: ThemeMode) {
        self.theme = mode;
    }
}

/// Markup for one tool card.
///
/// The logo image hides itself on load failure and reveals the sibling
/// fallback glyph.
#[must_use]
pub fn card_html(card: &ToolCard) -> String {
    let name = escape(&card.name);
    let mut html = String::new();

    html.push_str("<div class=\"tool-card\">");
    html.push_str("<div class=\"tool-header\"><div class=\"tool-logo\">");
    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{name} logo\" \
         onerror=\"this.style.display='none'; this.nextElementSibling.style.display='flex'\">",
        escape(&card.logo)
    );
    let _ = write!(
        html,
        "<div class=\"tool-logo-fallback\" style=\"display:none\">{}</div>",
        escape(&card.fallback_glyph)
    );
    html.push_str("</div>");
    let _ = write!(
        html,
        "<div class=\"tool-info\"><h3>{name}</h3><span class=\"tool-category\">{}</span></div>",
        escape(&card.category_label)
    );
    html.push_str("</div>");
    let _ = write!(html, "<p class=\"tool-description\">{}</p>", escape(&card.description));
    let _ = write!(
        html,
        "<div class=\"tool-footer\"><span class=\"tool-pricing\">{}</span>\
         <a href=\"{}\" target=\"{}\" rel=\"{}\" class=\"tool-link\">Visit Site</a></div>",
        escape(&card.pricing_label),
        escape(&card.link.href),
        card.link.target,
        card.link.rel
    );
    html.push_str("</div>");
    html
}

/// Markup for the empty-state placeholder.
#[must_use]
pub fn empty_html(empty: &EmptyState) -> String {
    format!(
        "<div class=\"empty-state\"><i class=\"fas fa-{}\"></i><h3>{}</h3><p>{}</p></div>",
        escape(&empty.icon),
        escape(&empty.heading),
        escape(&empty.hint)
    )
}

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolRecord;
    use crate::ui::renderer::{present, render};

    #[test]
    fn test_card_markup() {
        let tool = ToolRecord::new("Coder", "Writes <code>", "development", "paid")
            .with_website("https://coder.example")
            .with_logo("coder.png");
        let mut presenter = HtmlPresenter::default();
        present(&render(&[&tool], 3, ""), &mut presenter);

        let html = presenter.grid_html();
        assert_eq!(html.matches("class=\"tool-card\"").count(), 1);
        assert!(html.contains("<h3>Coder</h3>"));
        assert!(html.contains("<span class=\"tool-category\">Development</span>"));
        assert!(html.contains("<span class=\"tool-pricing\">Paid</span>"));
        assert!(html.contains("Writes &lt;code&gt;"));
        assert!(html.contains("href=\"https://coder.example\" target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(html.contains(">C</div>"));
        assert_eq!(presenter.count_text(), "1 of 3 tools found");
    }

    #[test]
    fn test_empty_markup_replaces_cards() {
        let tool = ToolRecord::new("Coder", "", "development", "paid");
        let mut presenter = HtmlPresenter::default();
        present(&render(&[&tool], 1, ""), &mut presenter);
        present(&render(&[], 1, "zzz"), &mut presenter);

        let html = presenter.grid_html();
        assert!(html.contains("class=\"empty-state\""));
        assert!(html.contains("<h3>No tools found</h3>"));
        assert!(html.contains("fa-search"));
        assert!(!html.contains("tool-card"));
        assert_eq!(presenter.count_text(), "0 of 1 tools found");
    }

    #[test]
    fn test_theme_classes_follow_mode() {
        let mut presenter = HtmlPresenter::default();
        assert_eq!(presenter.body_class(), None);
        assert_eq!(presenter.theme_icon_class(), "fas fa-moon");

        presenter.render_theme(ThemeMode::Dark);
        assert_eq!(presenter.body_class(), Some("dark"));
        assert_eq!(presenter.theme_icon_class(), "fas fa-sun");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
