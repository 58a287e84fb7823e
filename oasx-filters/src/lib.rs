mod merge;
mod pipeline;
mod provider;
pub mod serializer;
mod upload;
mod validate;

pub use merge::apply_examples;
pub use pipeline::DocumentFilters;
pub use provider::{ExamplesProvider, ProviderFactory, ProviderRegistry};
pub use serializer::{serialize_example, CamelCaseResolver, VerbatimResolver};
pub use upload::{apply_file_upload, MULTIPART_FORM_DATA};
pub use validate::ValidatedExample;
