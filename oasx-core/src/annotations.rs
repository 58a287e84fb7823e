use std::collections::HashMap;

use crate::serialize::{ConverterFactory, ResolverFactory};

/// One annotation declared on a request-handling action.
///
/// Whatever declaration mechanism the application offers (attribute macros,
/// plain registration calls) ultimately pushes these records into an
/// [`ActionRegistry`], in declaration order.
#[derive(Debug, Clone)]
pub enum ActionAnnotation {
    /// Marker: the action accepts exactly one uploaded file and nothing else.
    /// Presence is the only signal; there is no payload.
    FileUpload,
    /// Attach an example payload to a response status code and/or a
    /// definitions entry.
    ResponseExample(ResponseExample),
}

/// Raw response-example annotation, as declared.
///
/// Validated into a `ValidatedExample` (see `oasx-filters`) before any
/// document generation runs.
#[derive(Debug, Clone)]
pub struct ResponseExample {
    /// Target status code. `0` disables the responses-section write; the
    /// example then only lands in `definitions`, which requires
    /// `response_type` to be set.
    pub status_code: u16,
    /// Name under which the example provider is registered.
    pub provider: String,
    /// Definitions entry to attach the example to, if any.
    pub response_type: Option<String>,
    /// Field-naming resolver constructor. Camel case when unset.
    pub resolver: Option<ResolverFactory>,
    /// Value converter constructor, if any.
    pub converter: Option<ConverterFactory>,
}

impl ResponseExample {
    /// Annotation targeting the responses section under `status_code`.
    pub fn new(status_code: u16, provider: &str) -> Self {
        Self {
            status_code,
            provider: provider.to_string(),
            response_type: None,
            resolver: None,
            converter: None,
        }
    }

    /// Annotation targeting only the definitions entry for `response_type`.
    pub fn for_type(provider: &str, response_type: &str) -> Self {
        Self {
            status_code: 0,
            provider: provider.to_string(),
            response_type: Some(response_type.to_string()),
            resolver: None,
            converter: None,
        }
    }

    pub fn with_response_type(mut self, response_type: &str) -> Self {
        self.response_type = Some(response_type.to_string());
        self
    }

    pub fn with_resolver(mut self, resolver: ResolverFactory) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_converter(mut self, converter: ConverterFactory) -> Self {
        self.converter = Some(converter);
        self
    }
}

/// Ordered annotation declarations, keyed by action identifier.
///
/// The declaration mechanism pushes records in; the filters project them
/// back out with [`ActionRegistry::read`]. Ordering is declaration order,
/// and duplicate example annotations (e.g. across several status codes) are
/// allowed and independent.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    inner: HashMap<String, Vec<ActionAnnotation>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one annotation to an action's declaration list.
    pub fn annotate(&mut self, action: &str, annotation: ActionAnnotation) {
        self.inner
            .entry(action.to_string())
            .or_default()
            .push(annotation);
    }

    /// Declare the file-upload marker on an action.
    pub fn mark_file_upload(&mut self, action: &str) {
        self.annotate(action, ActionAnnotation::FileUpload);
    }

    /// Declare a response-example annotation on an action.
    pub fn add_example(&mut self, action: &str, example: ResponseExample) {
        self.annotate(action, ActionAnnotation::ResponseExample(example));
    }

    /// All annotations declared on an action, or an empty slice.
    pub fn get(&self, action: &str) -> &[ActionAnnotation] {
        self.inner.get(action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Project an action's declarations into the shape the filters consume:
    /// marker presence plus the ordered example annotations.
    ///
    /// Pure projection over the declaration list — no validation, no side
    /// effects. Unknown actions yield the empty projection.
    pub fn read(&self, action: &str) -> ActionAnnotations<'_> {
        let mut has_file_upload = false;
        let mut examples = Vec::new();

        for annotation in self.get(action) {
            match annotation {
                ActionAnnotation::FileUpload => has_file_upload = true,
                ActionAnnotation::ResponseExample(example) => examples.push(example),
            }
        }

        ActionAnnotations {
            has_file_upload,
            examples,
        }
    }
}

/// Projection of one action's declared annotations.
#[derive(Debug)]
pub struct ActionAnnotations<'a> {
    pub has_file_upload: bool,
    pub examples: Vec<&'a ResponseExample>,
}
