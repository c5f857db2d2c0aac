//! Current-page detection for navigation links.
//!
//! Matching works on file names only: `/shop/pricing.html` and
//! `./pricing.html?ref=nav` both reduce to `pricing.html`.

use crate::classes::{ClassEdit, ClassSet};

/// Page identifier for a location path: its last segment, or `default_page`
/// when the path ends in `/`.
pub fn page_id<'a>(path: &'a str, default_page: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => default_page,
    }
}

/// Reduces an `href` to the file name it points at, without query or fragment.
pub fn normalize_href(href: &str) -> &str {
    let file = href.rsplit('/').next().unwrap_or_default();
    let file = file.split('?').next().unwrap_or_default();
    file.split('#').next().unwrap_or_default()
}

/// Whether a link with `href` points at `page`, treating the root link and
/// the default page as the same document.
pub fn is_match(page: &str, href: &str, default_page: &str) -> bool {
    let target = normalize_href(href);
    target == page
        || (page == default_page && target.is_empty())
        || ((page.is_empty() || page == "/") && target == default_page)
}

/// Which navigation area a link lives in; they are styled differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRegion {
    Desktop,
    Mobile,
}

impl LinkRegion {
    pub fn classify(in_mobile_menu: bool) -> Self {
        if in_mobile_menu {
            LinkRegion::Mobile
        } else {
            LinkRegion::Desktop
        }
    }
}

/// The parts of an anchor that decide whether it takes part in matching.
#[derive(Debug, Clone, Default)]
pub struct LinkCandidate {
    pub href: Option<String>,
    pub has_image: bool,
}

impl LinkCandidate {
    /// The `href` to match against, or `None` for anchors that are not page
    /// links: missing or empty `href`, in-page fragments, and image links
    /// such as the logo.
    pub fn target(&self) -> Option<&str> {
        let href = self.href.as_deref()?;
        if href.is_empty() || href.starts_with('#') || self.has_image {
            return None;
        }
        Some(href)
    }

    pub fn matches(&self, page: &str, default_page: &str) -> bool {
        self.target()
            .map(|href| is_match(page, href, default_page))
            .unwrap_or(false)
    }
}

/// Class edits applied to the active link in each region.
pub struct ActiveLinkStyle;

impl ActiveLinkStyle {
    /// Button-styled links in the desktop bar keep their own look.
    pub const DESKTOP_CTA: &'static [&'static str] = &["bg-blue-600", "px-5"];
    pub const DESKTOP: ClassEdit = ClassEdit::new(&["text-gray-400"], &["text-white", "font-bold"]);
    /// Plain text links get an underline on top of the colour change.
    pub const DESKTOP_UNDERLINE_ON: &'static [&'static str] = &["transition", "whitespace-nowrap"];
    pub const DESKTOP_UNDERLINE: ClassEdit =
        ClassEdit::new(&[], &["border-b-2", "border-blue-500", "pb-1"]);

    pub const MOBILE: [ClassEdit; 2] = [
        ClassEdit::new(&[], &["bg-blue-600/5", "border-blue-500/40"]),
        ClassEdit::new(&["text-gray-400", "text-gray-300"], &["text-white", "font-bold"]),
    ];
    /// Selector for the label inside a mobile link; badges are rounded-full.
    pub const MOBILE_LABEL_SELECTOR: &'static str = "span:not(.rounded-full)";
    pub const MOBILE_LABEL: ClassEdit =
        ClassEdit::new(&["text-gray-400", "text-gray-300"], &["text-blue-400", "font-bold"]);
    pub const MOBILE_ICON_SELECTOR: &'static str = "div";
    pub const MOBILE_ICON_MARKER: &'static str = "rounded-xl";
    pub const MOBILE_ICON: ClassEdit =
        ClassEdit::new(&[], &["ring-2", "ring-blue-500/30", "bg-blue-500/20"]);

    /// Edits for an active desktop link, given its current classes.
    pub fn desktop_edits(link: &ClassSet) -> Vec<ClassEdit> {
        if link.contains_any(Self::DESKTOP_CTA) {
            return Vec::new();
        }
        let mut edits = vec![Self::DESKTOP];
        if link.contains_any(Self::DESKTOP_UNDERLINE_ON) {
            edits.push(Self::DESKTOP_UNDERLINE);
        }
        edits
    }

    pub fn mobile_edits() -> &'static [ClassEdit] {
        &Self::MOBILE
    }

    pub fn icon_edit(icon: &ClassSet) -> Option<ClassEdit> {
        icon.contains(Self::MOBILE_ICON_MARKER).then_some(Self::MOBILE_ICON)
    }
}
