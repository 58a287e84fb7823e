use oasx_core::meta::OperationSpec;
use serde_json::{json, Map, Value};

use crate::serializer::serialize_example;
use crate::validate::ValidatedExample;

/// Merge validated response-example annotations into an operation
/// descriptor.
///
/// Annotations are processed in declaration order; when several target the
/// same status code or response type, the last one wins. Existing response
/// and definition entries only ever have their `example` key replaced —
/// description, headers, schema and any other fields are left untouched.
pub fn apply_examples(op: &mut OperationSpec, annotations: &[ValidatedExample]) {
    for annotation in annotations {
        let provider = annotation.instantiate();
        let example = serialize_example(
            &provider.example(),
            annotation.resolver(),
            annotation.converter(),
        );

        if annotation.status_code() > 0 {
            set_example(
                &mut op.responses,
                &annotation.status_code().to_string(),
                example.clone(),
            );
        }

        if let Some(response_type) = annotation.response_type() {
            set_example(&mut op.definitions, response_type, example);
        }

        tracing::debug!(
            operation = %op.operation_id,
            provider = annotation.provider_name(),
            "merged example annotation"
        );
    }
}

/// Set the `example` key of the entry under `key`, creating a minimal
/// placeholder object when the entry does not exist yet. All other fields of
/// an existing entry are preserved.
fn set_example(entries: &mut Map<String, Value>, key: &str, example: Value) {
    let entry = entries.entry(key.to_string()).or_insert_with(|| json!({}));

    if let Some(obj) = entry.as_object_mut() {
        obj.insert("example".into(), example);
    }
}
