pub mod annotations;
pub mod error;
pub mod meta;
pub mod serialize;

pub use annotations::{ActionAnnotation, ActionAnnotations, ActionRegistry, ResponseExample};
pub use error::AnnotationError;
pub use meta::{OperationSpec, ParamLocation, ParamSpec};
pub use serialize::{ConverterFactory, FieldNamingResolver, ResolverFactory, ValueConverter};
