/// Background applied to the top nav depending on how far the page scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarBackground {
    Default,
    Scrolled,
}

impl NavbarBackground {
    /// Pick the background for a vertical offset. Strictly greater than the
    /// threshold counts as scrolled.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavbarBackground::Scrolled
        } else {
            NavbarBackground::Default
        }
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            NavbarBackground::Default => "rgba(10, 10, 10, 0.8)",
            NavbarBackground::Scrolled => "rgba(10, 10, 10, 0.95)",
        }
    }
}
