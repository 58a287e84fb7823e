use oasx_core::annotations::ResponseExample;
use oasx_core::error::AnnotationError;
use oasx_core::meta::{OperationSpec, ParamLocation, ParamSpec};
use oasx_filters::{DocumentFilters, ExamplesProvider, ProviderRegistry, MULTIPART_FORM_DATA};
use serde_json::{json, Value};

// ── Helpers ─────────────────────────────────────────────────────────────────

struct UserExamples;

impl ExamplesProvider for UserExamples {
    fn example(&self) -> Value {
        json!({ "user_name": "ada" })
    }
}

fn filters() -> DocumentFilters {
    let mut providers = ProviderRegistry::new();
    providers.register("UserExamples", || UserExamples);
    DocumentFilters::with_providers(providers)
}

// ── Declaration-time validation ─────────────────────────────────────────────

#[test]
fn annotate_validates_eagerly() {
    let mut filters = filters();
    let err = filters
        .annotate("get_user", ResponseExample::new(200, "Unknown"))
        .unwrap_err();

    assert!(matches!(err, AnnotationError::InvalidProviderType { .. }));

    // The rejected annotation left no trace: the operation passes through
    // untouched.
    let mut op = OperationSpec::new("get_user");
    filters.apply(&mut op);
    assert!(op.responses.is_empty());
}

#[test]
fn providers_registered_after_construction() {
    let mut filters = DocumentFilters::new();
    filters.providers_mut().register("UserExamples", || UserExamples);

    filters
        .annotate("get_user", ResponseExample::new(200, "UserExamples"))
        .unwrap();
}

// ── Full filter chain ───────────────────────────────────────────────────────

#[test]
fn apply_runs_upload_and_examples() {
    let mut filters = filters();
    filters.mark_file_upload("upload_avatar");
    filters
        .annotate("upload_avatar", ResponseExample::new(201, "UserExamples"))
        .unwrap();

    let mut op = OperationSpec::new("upload_avatar");
    op.parameters.push(ParamSpec {
        name: "tag".to_string(),
        required: false,
        location: ParamLocation::Query,
        param_type: "string".to_string(),
        description: None,
    });

    filters.apply(&mut op);

    assert!(op.consumes.iter().any(|m| m == MULTIPART_FORM_DATA));
    assert_eq!(op.parameters.len(), 1);
    assert_eq!(op.parameters[0].name, "file");
    assert_eq!(op.responses["201"]["example"], json!({ "userName": "ada" }));
}

#[test]
fn undeclared_operation_passes_through() {
    let filters = filters();
    let mut op = OperationSpec::new("health_check");
    op.add_consumes("application/json");

    filters.apply(&mut op);

    assert_eq!(op.consumes, vec!["application/json"]);
    assert!(op.parameters.is_empty());
    assert!(op.responses.is_empty());
}

#[test]
fn apply_twice_reaches_same_state() {
    let mut filters = filters();
    filters.mark_file_upload("upload_avatar");
    filters
        .annotate("upload_avatar", ResponseExample::new(201, "UserExamples"))
        .unwrap();

    let mut op = OperationSpec::new("upload_avatar");
    filters.apply(&mut op);
    let once = op.clone();
    filters.apply(&mut op);

    assert_eq!(op.consumes, once.consumes);
    assert_eq!(op.parameters, once.parameters);
    assert_eq!(op.responses, once.responses);
    assert_eq!(op.definitions, once.definitions);
}

#[test]
fn annotations_reused_across_builds() {
    let mut filters = filters();
    filters
        .annotate("get_user", ResponseExample::new(200, "UserExamples"))
        .unwrap();

    // Two independent "builds" of the same operation see the same result.
    let mut first = OperationSpec::new("get_user");
    let mut second = OperationSpec::new("get_user");
    filters.apply(&mut first);
    filters.apply(&mut second);

    assert_eq!(first.responses, second.responses);
}

#[test]
fn declaration_order_preserved_through_pipeline() {
    struct AltExamples;

    impl ExamplesProvider for AltExamples {
        fn example(&self) -> Value {
            json!({ "user_name": "grace" })
        }
    }

    let mut filters = filters();
    filters.providers_mut().register("AltExamples", || AltExamples);
    filters
        .annotate("get_user", ResponseExample::new(200, "UserExamples"))
        .unwrap();
    filters
        .annotate("get_user", ResponseExample::new(200, "AltExamples"))
        .unwrap();

    let mut op = OperationSpec::new("get_user");
    filters.apply(&mut op);

    assert_eq!(op.responses["200"]["example"], json!({ "userName": "grace" }));
}
