use std::collections::HashMap;

use oasx_core::annotations::{ActionRegistry, ResponseExample};
use oasx_core::error::AnnotationError;
use oasx_core::meta::OperationSpec;

use crate::merge::apply_examples;
use crate::provider::ProviderRegistry;
use crate::upload::apply_file_upload;
use crate::validate::ValidatedExample;

/// The configured filter set for one application.
///
/// Owns the provider registry, the per-action declarations, and the cache of
/// validated annotations. Annotations are validated when declared — so
/// malformed usage surfaces at declaration time, not during document
/// generation — and the validated records are reused across every
/// subsequent build.
///
/// # Example
///
/// ```ignore
/// use oasx_filters::{DocumentFilters, ProviderRegistry};
/// use oasx_core::ResponseExample;
///
/// let mut providers = ProviderRegistry::new();
/// providers.register("UserExamples", || UserExamples);
///
/// let mut filters = DocumentFilters::with_providers(providers);
/// filters.annotate("get_user", ResponseExample::new(200, "UserExamples"))?;
/// filters.mark_file_upload("upload_avatar");
///
/// for op in operations.iter_mut() {
///     filters.apply(op);
/// }
/// ```
pub struct DocumentFilters {
    providers: ProviderRegistry,
    actions: ActionRegistry,
    validated: HashMap<String, Vec<ValidatedExample>>,
}

impl DocumentFilters {
    /// Create a filter set with an empty provider registry.
    pub fn new() -> Self {
        Self::with_providers(ProviderRegistry::new())
    }

    /// Create a filter set backed by an existing provider registry.
    pub fn with_providers(providers: ProviderRegistry) -> Self {
        Self {
            providers,
            actions: ActionRegistry::new(),
            validated: HashMap::new(),
        }
    }

    /// The provider registry backing validation.
    pub fn providers_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.providers
    }

    /// Declare a response-example annotation on an action.
    ///
    /// Validation runs immediately; a rejected annotation is recorded
    /// nowhere and the error propagates to the declaring caller.
    pub fn annotate(
        &mut self,
        action: &str,
        example: ResponseExample,
    ) -> Result<(), AnnotationError> {
        let validated = ValidatedExample::from_raw(&example, &self.providers)?;

        self.actions.add_example(action, example);
        self.validated
            .entry(action.to_string())
            .or_default()
            .push(validated);
        Ok(())
    }

    /// Declare the file-upload marker on an action.
    pub fn mark_file_upload(&mut self, action: &str) {
        self.actions.mark_file_upload(action);
    }

    /// Run the filters over one operation descriptor.
    ///
    /// Looks up the declarations for `op.operation_id`; operations without
    /// declarations pass through untouched. Infallible: everything that can
    /// fail already failed at declaration time.
    pub fn apply(&self, op: &mut OperationSpec) {
        let annotations = self.actions.read(&op.operation_id);
        apply_file_upload(op, annotations.has_file_upload);

        if let Some(validated) = self.validated.get(&op.operation_id) {
            apply_examples(op, validated);
        }
    }
}

impl Default for DocumentFilters {
    fn default() -> Self {
        Self::new()
    }
}
