/// Errors raised while a response-example annotation is validated.
///
/// Both variants surface at annotation-declaration time, before any document
/// generation runs; an annotation that fails validation is never recorded or
/// applied.
#[derive(Debug)]
pub enum AnnotationError {
    /// The declared provider does not satisfy the example-provider
    /// capability: no factory is registered under that name.
    InvalidProviderType {
        provider: String,
        expected: &'static str,
    },
    /// The annotation targets neither a status code nor a response type, so
    /// it could never have an observable effect on the document.
    MissingTarget { provider: String },
}

impl std::fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationError::InvalidProviderType { provider, expected } => {
                write!(f, "provider '{provider}' does not implement {expected}")
            }
            AnnotationError::MissingTarget { provider } => {
                write!(
                    f,
                    "example annotation for '{provider}' targets neither a status code nor a response type"
                )
            }
        }
    }
}

impl std::error::Error for AnnotationError {}
