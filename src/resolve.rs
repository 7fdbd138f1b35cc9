use crate::error::IconError;
use crate::registry::IconRegistry;
use crate::trust::{SvgSource, TrustedMarkup};

/// A validated icon source: either a registered name or markup that has been
/// granted trust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupSource {
    Registered(String),
    Trusted(TrustedMarkup),
}

/// An icon request as it arrives from component props: any combination of a
/// name and a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRequest {
    pub name: Option<String>,
    pub src: Option<SvgSource>,
}

impl IconRequest {
    pub fn new(name: Option<String>, src: Option<SvgSource>) -> Self {
        Self { name, src }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            src: None,
        }
    }

    pub fn from_src(src: impl Into<SvgSource>) -> Self {
        Self {
            name: None,
            src: Some(src.into()),
        }
    }

    /// Validate the request. A name takes precedence over `src` when both are given;
    /// an empty name counts as no name.
    pub fn into_source(self) -> Result<MarkupSource, IconError> {
        match (self.name, self.src) {
            (Some(name), _) if !name.is_empty() => Ok(MarkupSource::Registered(name)),
            (_, Some(SvgSource::Trusted(markup))) => Ok(MarkupSource::Trusted(markup)),
            (_, Some(SvgSource::Raw(_))) => Err(IconError::UntrustedMarkup),
            (_, None) => Err(IconError::MissingSource),
        }
    }
}

impl From<MarkupSource> for IconRequest {
    fn from(source: MarkupSource) -> Self {
        match source {
            MarkupSource::Registered(name) => IconRequest::named(name),
            MarkupSource::Trusted(markup) => IconRequest::from_src(markup),
        }
    }
}

impl IconRegistry {
    /// Resolve a validated source to the markup to inject.
    pub fn resolve(&self, source: &MarkupSource) -> Result<String, IconError> {
        match source {
            MarkupSource::Registered(name) => {
                self.get(name)
                    .map(str::to_string)
                    .ok_or_else(|| IconError::Unregistered { name: name.clone() })
            }
            MarkupSource::Trusted(markup) => Ok(markup.as_str().to_string()),
        }
    }

    /// Validate and resolve a props-shaped request.
    pub fn resolve_request(&self, request: &IconRequest) -> Result<String, IconError> {
        let source = request.clone().into_source()?;
        self.resolve(&source)
    }
}
