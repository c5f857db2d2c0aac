use cosmo_nav_shared::{page_id, ActiveLinkStyle, LinkCandidate, LinkRegion};
use web_sys::{Element, Node};

use crate::utils::{apply_edit, class_set, DomError, JsResultExt};

/// Marks the navigation links that point at the current page.
///
/// `links` are the candidate anchors from the desktop bar and the mobile
/// menu; `mobile_menu` decides which styling each one gets. Returns the
/// number of links marked. Safe to run more than once.
pub fn mark_active_links(
    links: &[Element],
    path: &str,
    default_page: &str,
    mobile_menu: Option<&Element>,
) -> Result<usize, DomError> {
    let page = page_id(path, default_page);
    let mut marked = 0;

    for link in links {
        let candidate = LinkCandidate {
            href: link.get_attribute("href"),
            has_image: link.query_selector("img").dom("querySelector")?.is_some(),
        };
        if !candidate.matches(page, default_page) {
            continue;
        }

        link.set_attribute("aria-current", "page")
            .dom("setAttribute")?;
        marked += 1;

        let node: &Node = link;
        let in_mobile_menu = mobile_menu
            .map(|menu| menu.contains(Some(node)))
            .unwrap_or(false);

        match LinkRegion::classify(in_mobile_menu) {
            LinkRegion::Desktop => style_desktop_link(link)?,
            LinkRegion::Mobile => style_mobile_link(link)?,
        }
    }

    Ok(marked)
}

fn style_desktop_link(link: &Element) -> Result<(), DomError> {
    for edit in ActiveLinkStyle::desktop_edits(&class_set(link)) {
        apply_edit(link, &edit)?;
    }
    Ok(())
}

fn style_mobile_link(link: &Element) -> Result<(), DomError> {
    for edit in ActiveLinkStyle::mobile_edits() {
        apply_edit(link, edit)?;
    }

    if let Some(label) = link
        .query_selector(ActiveLinkStyle::MOBILE_LABEL_SELECTOR)
        .dom("querySelector")?
    {
        apply_edit(&label, &ActiveLinkStyle::MOBILE_LABEL)?;
    }

    if let Some(icon) = link
        .query_selector(ActiveLinkStyle::MOBILE_ICON_SELECTOR)
        .dom("querySelector")?
    {
        if let Some(edit) = ActiveLinkStyle::icon_edit(&class_set(&icon)) {
            apply_edit(&icon, &edit)?;
        }
    }

    Ok(())
}
