use oasx_core::meta::{OperationSpec, ParamLocation, ParamSpec};

/// Media type added to operations carrying the file-upload marker.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Rewrite an operation that carries the file-upload marker.
///
/// Marked operations accept exactly one uploaded file and nothing else, so
/// the existing parameter list is discarded wholesale — a partial list would
/// leave the document ambiguous. Without the marker the operation is left
/// untouched.
pub fn apply_file_upload(op: &mut OperationSpec, has_marker: bool) {
    if !has_marker {
        return;
    }

    op.add_consumes(MULTIPART_FORM_DATA);

    op.parameters.clear();
    op.parameters.push(ParamSpec {
        name: "file".to_string(),
        required: true,
        location: ParamLocation::FormData,
        param_type: "file".to_string(),
        description: Some("A file to upload".to_string()),
    });

    tracing::debug!(
        operation = %op.operation_id,
        "rewrote operation as single file upload"
    );
}
