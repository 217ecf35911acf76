/// Element id targeted by an in-page link, if `href` is one.
///
/// Only hrefs of the form `#id` qualify. A bare `#` or any href that leaves
/// the page yields `None`, and the browser handles the click normally.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
