use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("Either `name` or `src` must be supplied")]
    MissingSource,

    #[error("Icon name \"{name}\" is not registered")]
    Unregistered { name: String },

    #[error("Un-trusted markup passed as icon source. If this is a valid SVG, wrap it with `trust_markup`")]
    UntrustedMarkup,

    #[error("Icon manifest error: {0}")]
    Manifest(String),
}

impl From<IconError> for String {
    fn from(err: IconError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_message_names_the_icon() {
        let err = IconError::Unregistered {
            name: "heart".into(),
        };
        assert_eq!(err.to_string(), "Icon name \"heart\" is not registered");
    }

    #[test]
    fn test_error_converts_to_string() {
        let msg: String = IconError::MissingSource.into();
        assert!(msg.contains("`name`"));
        assert!(msg.contains("`src`"));
    }
}
