//! Card markup for one project record.

use super::Fragment;
use crate::model::project::ProjectRecord;
use std::borrow::Cow;

/// Class list on every card wrapper; `fade-in` is the scroll-animation hook.
pub const CARD_CLASS: &str = "project-card fade-in";

const LINK_ATTRS: &str = r#"class="project-link" target="_blank" rel="noopener noreferrer""#;
const REPO_ICON_CLASS: &str = "fab fa-github";
const REPO_LABEL: &str = "View Code";
const LIVE_ICON_CLASS: &str = "fas fa-external-link-alt";
const LIVE_LABEL: &str = "Live Demo";

/// Renders one project card.
///
/// All record text is HTML-escaped, so titles or URLs containing markup
/// cannot break out of the card.
pub fn render_card(project: &ProjectRecord) -> Fragment {
    let tags: String = project
        .technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(tech)))
        .collect();

    let mut links = link(&project.repo_link, REPO_ICON_CLASS, REPO_LABEL);
    if let Some(live_link) = project.live_link.as_deref() {
        links.push_str(&link(live_link, LIVE_ICON_CLASS, LIVE_LABEL));
    }

    Fragment::new(format!(
        concat!(
            r#"<div class="{card_class}">"#,
            r#"<div class="project-image">{icon}</div>"#,
            r#"<div class="project-content">"#,
            r#"<h3 class="project-title">{title}</h3>"#,
            r#"<p class="project-description">{description}</p>"#,
            r#"<div class="project-tech">{tags}</div>"#,
            r#"<div class="project-links">{links}</div>"#,
            "</div></div>",
        ),
        card_class = CARD_CLASS,
        icon = escape_html(&project.icon),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        tags = tags,
        links = links,
    ))
}

fn link(href: &str, icon_class: &str, label: &str) -> String {
    format!(
        r#"<a href="{href}" {LINK_ATTRS}><i class="{icon_class}"></i> {label}</a>"#,
        href = escape_html(href),
    )
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
