use oasx_core::serialize::{FieldNamingResolver, ValueConverter};
use serde_json::{Map, Value};

/// Default resolver: renders field names in camel case.
///
/// Handles both `snake_case` (the serde default for Rust structs) and
/// `PascalCase` input: `first_name` and `FirstName` both render as
/// `firstName`. A leading uppercase run is lowercased as a unit, so `URL`
/// becomes `url` and `URLValue` becomes `urlValue`.
pub struct CamelCaseResolver;

impl FieldNamingResolver for CamelCaseResolver {
    fn rename(&self, field: &str) -> String {
        camel_case(field)
    }
}

/// Pass-through resolver: field names are rendered exactly as declared.
pub struct VerbatimResolver;

impl FieldNamingResolver for VerbatimResolver {
    fn rename(&self, field: &str) -> String {
        field.to_string()
    }
}

/// Serialize a provider's example value into its canonical document
/// representation: object keys renamed per the resolver, scalar leaves
/// passed through the converter when one is configured.
pub fn serialize_example(
    value: &Value,
    resolver: &dyn FieldNamingResolver,
    converter: Option<&dyn ValueConverter>,
) -> Value {
    match value {
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, v) in obj {
                out.insert(
                    resolver.rename(key),
                    serialize_example(v, resolver, converter),
                );
            }
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|v| serialize_example(v, resolver, converter))
                .collect(),
        ),
        leaf => match converter {
            Some(c) => c.convert(leaf.clone()),
            None => leaf.clone(),
        },
    }
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (i, segment) in name.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            lower_leading_run(segment, &mut out);
        } else if let Some(first) = segment.chars().next() {
            out.extend(first.to_uppercase());
            out.push_str(&segment[first.len_utf8()..]);
        }
    }

    out
}

/// Lowercase the leading uppercase run of `segment` into `out`. The last
/// capital of the run is kept when it starts the next word, so `URLValue`
/// renders as `urlValue` rather than `urlvalue`.
fn lower_leading_run(segment: &str, out: &mut String) {
    let chars: Vec<char> = segment.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len && chars[i].is_uppercase() {
        if i > 0 && i + 1 < len && chars[i + 1].is_lowercase() {
            break;
        }
        out.extend(chars[i].to_lowercase());
        i += 1;
    }

    out.extend(chars[i..].iter());
}
