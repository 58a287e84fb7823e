use serde_json::Value;

/// Governs how object field names are rendered when an example value is
/// serialized into the document.
///
/// The merge engine applies the resolver to every object key of an example,
/// recursively. The default is camel case; see the `oasx-filters` crate for
/// the built-in resolvers.
pub trait FieldNamingResolver: Send + Sync {
    /// Render one field name.
    fn rename(&self, field: &str) -> String;
}

/// Optional conversion applied to the scalar leaves of a serialized example,
/// e.g. rendering enum-like values as strings.
pub trait ValueConverter: Send + Sync {
    fn convert(&self, value: Value) -> Value;
}

/// Constructor reference for a field-naming resolver.
///
/// Carried by a raw annotation and invoked exactly once, during validation,
/// so per-build serialization never pays construction cost again.
pub type ResolverFactory = fn() -> Box<dyn FieldNamingResolver>;

/// Constructor reference for a value converter, invoked exactly once during
/// validation.
pub type ConverterFactory = fn() -> Box<dyn ValueConverter>;
