use oasx_core::annotations::ResponseExample;
use oasx_core::error::AnnotationError;
use oasx_core::serialize::{FieldNamingResolver, ValueConverter};

use crate::provider::{ExamplesProvider, ProviderFactory, ProviderRegistry};
use crate::serializer::CamelCaseResolver;

/// Capability name reported by `InvalidProviderType`.
const EXPECTED_CAPABILITY: &str = "ExamplesProvider";

/// A response-example annotation that passed validation.
///
/// Constructed once per declared annotation and reused across document
/// builds. The resolver and converter instances are built here, so per-build
/// serialization never pays construction cost again. Immutable.
pub struct ValidatedExample {
    status_code: u16,
    provider_name: String,
    provider: ProviderFactory,
    response_type: Option<String>,
    resolver: Box<dyn FieldNamingResolver>,
    converter: Option<Box<dyn ValueConverter>>,
}

impl std::fmt::Debug for ValidatedExample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedExample")
            .field("status_code", &self.status_code)
            .field("provider_name", &self.provider_name)
            .field("response_type", &self.response_type)
            .field("has_converter", &self.converter.is_some())
            .finish()
    }
}

impl ValidatedExample {
    /// Validate a raw annotation against the provider registry.
    ///
    /// Fails with [`AnnotationError::InvalidProviderType`] when the provider
    /// name does not resolve to a registered example provider, and with
    /// [`AnnotationError::MissingTarget`] when neither a status code nor a
    /// response type is set. The provider itself is not instantiated here —
    /// that happens at merge time, once per document build.
    pub fn from_raw(
        raw: &ResponseExample,
        providers: &ProviderRegistry,
    ) -> Result<Self, AnnotationError> {
        let provider =
            providers
                .resolve(&raw.provider)
                .ok_or_else(|| AnnotationError::InvalidProviderType {
                    provider: raw.provider.clone(),
                    expected: EXPECTED_CAPABILITY,
                })?;

        if raw.status_code == 0 && raw.response_type.is_none() {
            return Err(AnnotationError::MissingTarget {
                provider: raw.provider.clone(),
            });
        }

        let resolver: Box<dyn FieldNamingResolver> = match raw.resolver {
            Some(factory) => factory(),
            None => Box::new(CamelCaseResolver),
        };

        Ok(Self {
            status_code: raw.status_code,
            provider_name: raw.provider.clone(),
            provider,
            response_type: raw.response_type.clone(),
            resolver,
            converter: raw.converter.map(|factory| factory()),
        })
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn response_type(&self) -> Option<&str> {
        self.response_type.as_deref()
    }

    /// The resolved field-naming configuration for this annotation.
    pub fn resolver(&self) -> &dyn FieldNamingResolver {
        self.resolver.as_ref()
    }

    /// The converter instance, when one was declared.
    pub fn converter(&self) -> Option<&dyn ValueConverter> {
        self.converter.as_deref()
    }

    /// Instantiate a fresh provider for one document build.
    pub(crate) fn instantiate(&self) -> Box<dyn ExamplesProvider> {
        (self.provider)()
    }
}
