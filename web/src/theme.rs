use clap::ValueEnum;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Writes the scheme onto `<html>`, or clears it so the stylesheet follows the browser.
    pub(crate) fn apply(theme: Option<Self>) {
        use gloo::utils::document;

        let Some(html) = document().document_element() else {
            log::error!("no html element to theme");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to set theme: {:?}", err);
            }
        }
    }
}
