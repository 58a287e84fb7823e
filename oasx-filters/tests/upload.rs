use oasx_core::meta::{OperationSpec, ParamLocation, ParamSpec};
use oasx_filters::{apply_file_upload, MULTIPART_FORM_DATA};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn query_param(name: &str) -> ParamSpec {
    ParamSpec {
        name: name.to_string(),
        required: false,
        location: ParamLocation::Query,
        param_type: "string".to_string(),
        description: None,
    }
}

fn file_param() -> ParamSpec {
    ParamSpec {
        name: "file".to_string(),
        required: true,
        location: ParamLocation::FormData,
        param_type: "file".to_string(),
        description: Some("A file to upload".to_string()),
    }
}

// ── Marker absent ───────────────────────────────────────────────────────────

#[test]
fn no_marker_is_a_no_op() {
    let mut op = OperationSpec::new("update_user");
    op.add_consumes("application/json");
    op.parameters.push(query_param("verbose"));
    let before = op.clone();

    apply_file_upload(&mut op, false);

    assert_eq!(op.consumes, before.consumes);
    assert_eq!(op.parameters, before.parameters);
}

// ── Marker present ──────────────────────────────────────────────────────────

#[test]
fn marker_replaces_parameters() {
    let mut op = OperationSpec::new("upload_avatar");
    op.parameters.push(query_param("verbose"));
    op.parameters.push(query_param("tag"));

    apply_file_upload(&mut op, true);

    assert_eq!(op.parameters, vec![file_param()]);
}

#[test]
fn marker_adds_multipart_media_type() {
    let mut op = OperationSpec::new("upload_avatar");

    apply_file_upload(&mut op, true);

    assert!(op.consumes.iter().any(|m| m == MULTIPART_FORM_DATA));
}

#[test]
fn existing_media_types_survive() {
    let mut op = OperationSpec::new("upload_avatar");
    op.add_consumes("application/json");

    apply_file_upload(&mut op, true);

    assert_eq!(op.consumes, vec!["application/json", MULTIPART_FORM_DATA]);
}

#[test]
fn multipart_not_duplicated() {
    let mut op = OperationSpec::new("upload_avatar");
    op.add_consumes(MULTIPART_FORM_DATA);

    apply_file_upload(&mut op, true);

    assert_eq!(op.consumes, vec![MULTIPART_FORM_DATA]);
}

#[test]
fn applying_twice_is_idempotent() {
    let mut op = OperationSpec::new("upload_avatar");
    op.parameters.push(query_param("verbose"));

    apply_file_upload(&mut op, true);
    let once = op.clone();
    apply_file_upload(&mut op, true);

    assert_eq!(op.consumes, once.consumes);
    assert_eq!(op.parameters, once.parameters);
}

#[test]
fn responses_untouched_by_upload_rewrite() {
    let mut op = OperationSpec::new("upload_avatar");
    op.responses
        .insert("201".to_string(), serde_json::json!({ "description": "Created" }));

    apply_file_upload(&mut op, true);

    assert_eq!(op.responses["201"]["description"], "Created");
}
