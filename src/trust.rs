//! Trusted markup.
//!
//! Markup injected through `inner_html` is never sanitized, so anything that
//! does not come from the registry has to be explicitly granted trust first.
//! [`trust_markup`] is the only way to do that; grep for it to audit every
//! place raw SVG enters the view tree.

use std::fmt;

/// SVG markup that a caller has vouched for as safe to inject verbatim.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrustedMarkup {
    html: String,
}

impl TrustedMarkup {
    /// Grant trust to `markup`. Same as [`trust_markup`].
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            html: markup.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_inner(self) -> String {
        self.html
    }
}

impl fmt::Debug for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrustedMarkup")
            .field(&format_args!("{} bytes", self.html.len()))
            .finish()
    }
}

/// Mark `markup` as trusted so it can be passed as an icon `src`.
pub fn trust_markup(markup: impl Into<String>) -> TrustedMarkup {
    TrustedMarkup::new(markup)
}

/// Value of an icon's `src` prop.
///
/// Plain strings convert into [`SvgSource::Raw`], which resolution rejects.
/// Only a [`TrustedMarkup`] converts into [`SvgSource::Trusted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgSource {
    Trusted(TrustedMarkup),
    Raw(String),
}

impl SvgSource {
    pub fn trusted(&self) -> Option<&TrustedMarkup> {
        match self {
            SvgSource::Trusted(markup) => Some(markup),
            SvgSource::Raw(_) => None,
        }
    }
}

impl From<TrustedMarkup> for SvgSource {
    fn from(markup: TrustedMarkup) -> Self {
        SvgSource::Trusted(markup)
    }
}

impl From<String> for SvgSource {
    fn from(markup: String) -> Self {
        SvgSource::Raw(markup)
    }
}

impl From<&str> for SvgSource {
    fn from(markup: &str) -> Self {
        SvgSource::Raw(markup.to_string())
    }
}
