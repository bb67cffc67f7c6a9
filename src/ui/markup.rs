//! HTML for the favorites dropdown.
//!
//! Every stored string goes through [`escape_html`] before it is placed in
//! markup, so names cannot inject elements or break out of attributes.

use crate::services::share::coord_str;
use crate::types::favorite::Bookmark;

use super::messages;

/// Escapes `& < > " '` for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Renders the panel header with its clear-all action.
pub fn render_header() -> String {
    format!(
        "<header><div class=\"fav-header-wrapper\"><div>{}</div>\
         <button type=\"button\" data-act=\"clear_all\">{}</button></div></header>",
        messages::PANEL_TITLE,
        messages::CLEAR_ALL_LABEL
    )
}

/// Renders one list row. Buttons carry the entry id, not its position.
pub fn render_row(bookmark: &Bookmark) -> String {
    let id = escape_html(bookmark.id().as_str());
    let mut html = String::with_capacity(256 + bookmark.name.len() * 2);
    html.push_str("<li class=\"fav-item\"><div class=\"fav-name\">");
    html.push_str(&escape_html(&bookmark.name));
    html.push_str("<div class=\"fav-meta\">");
    html.push_str(&coord_str(bookmark.lat, bookmark.lon));
    html.push_str("</div></div><div class=\"fav-actions\">");
    for (act, label) in [
        ("navigate", messages::NAVIGATE_LABEL),
        ("share", messages::SHARE_LABEL),
        ("delete", messages::DELETE_LABEL),
    ] {
        html.push_str(&format!(
            "<button type=\"button\" data-act=\"{}\" data-id=\"{}\">{}</button>",
            act, id, label
        ));
    }
    html.push_str("</div></li>");
    html
}

/// Renders the `<ul>` body; an empty list shows a placeholder row.
pub fn render_list(list: &[Bookmark]) -> String {
    let mut html = String::from("<ul class=\"fav-list\">");
    if list.is_empty() {
        html.push_str(&format!(
            "<li class=\"fav-item\"><div class=\"fav-name\">{}</div></li>",
            messages::EMPTY_PLACEHOLDER
        ));
    } else {
        for bookmark in list {
            html.push_str(&render_row(bookmark));
        }
    }
    html.push_str("</ul>");
    html
}

/// Renders the whole panel: header followed by the list.
pub fn render_panel(list: &[Bookmark]) -> String {
    let mut html = render_header();
    html.push_str(&render_list(list));
    html
}
