//! JSON Schema preparation for the structured-output gateway.
//!
//! Gemini's structured output accepts an `OpenAPI`-flavoured subset of JSON
//! Schema: no references, no `additionalProperties`, nullability expressed
//! with `nullable` rather than a `null` member in `type`.

use serde_json::{Map, Value};

/// String formats the gateway accepts.
const SUPPORTED_FORMATS: &[&str] = &["date-time", "enum"];

/// Keywords dropped from every schema node.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "$schema",
    "$id",
    "title",
    "additionalProperties",
    "default",
    "examples",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "minLength",
    "maxLength",
    "pattern",
    "uniqueItems",
];

/// Maximum `$ref` expansion depth; deeper references are cut off.
const MAX_REF_DEPTH: usize = 8;

/// Rewrites a `schemars` schema into the form the gateway accepts.
///
/// - Inlines internal `$ref` targets from `$defs` / `definitions`.
/// - Drops keywords listed in [`UNSUPPORTED_KEYWORDS`] and unknown formats.
/// - Turns `"type": ["T", "null"]` and `anyOf: [T, {"type": "null"}]`
///   into `T` with `"nullable": true`.
pub fn prepare_gateway_schema(mut schema: Value) -> Value {
    let defs = collect_definitions(&mut schema);
    rewrite(schema, &defs, 0)
}

fn collect_definitions(schema: &mut Value) -> Map<String, Value> {
    let mut defs = Map::new();
    if let Value::Object(obj) = schema {
        for key in ["$defs", "definitions"] {
            if let Some(Value::Object(found)) = obj.remove(key) {
                defs.extend(found);
            }
        }
    }
    defs
}

fn rewrite(schema: Value, defs: &Map<String, Value>, depth: usize) -> Value {
    match schema {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite(item, defs, depth))
                .collect(),
        ),
        Value::Object(obj) => rewrite_object(obj, defs, depth),
        other => other,
    }
}

fn rewrite_object(mut obj: Map<String, Value>, defs: &Map<String, Value>, depth: usize) -> Value {
    if let Some(Value::String(reference)) = obj.remove("$ref") {
        return resolve_reference(&reference, obj, defs, depth);
    }

    for keyword in UNSUPPORTED_KEYWORDS {
        obj.remove(*keyword);
    }

    if let Some(format) = obj.get("format").and_then(Value::as_str) {
        if !SUPPORTED_FORMATS.contains(&format) {
            tracing::debug!(format, "dropping unsupported string format from gateway schema");
            obj.remove("format");
        }
    }

    collapse_nullable_type(&mut obj);
    collapse_nullable_any_of(&mut obj, defs, depth);

    if let Some(Value::Object(props)) = obj.remove("properties") {
        let props = props
            .into_iter()
            .map(|(name, value)| (name, rewrite(value, defs, depth)))
            .collect();
        obj.insert("properties".to_string(), Value::Object(props));
    }

    if let Some(items) = obj.remove("items") {
        obj.insert("items".to_string(), rewrite(items, defs, depth));
    }

    for key in ["anyOf", "oneOf", "allOf"] {
        if let Some(variants) = obj.remove(key) {
            obj.insert(key.to_string(), rewrite(variants, defs, depth));
        }
    }

    Value::Object(obj)
}

fn resolve_reference(
    reference: &str,
    siblings: Map<String, Value>,
    defs: &Map<String, Value>,
    depth: usize,
) -> Value {
    let name = reference
        .strip_prefix("#/$defs/")
        .or_else(|| reference.strip_prefix("#/definitions/"));

    let target = match name.and_then(|name| defs.get(name)) {
        Some(target) if depth < MAX_REF_DEPTH => target.clone(),
        Some(_) => {
            tracing::warn!(reference, "reference nesting too deep, replacing with empty object");
            serde_json::json!({ "type": "object" })
        }
        None => {
            tracing::warn!(reference, "unresolvable $ref in gateway schema, replacing with empty object");
            serde_json::json!({ "type": "object" })
        }
    };

    let mut merged = match rewrite(target, defs, depth + 1) {
        Value::Object(obj) => obj,
        other => return other,
    };

    // Sibling keywords such as `description` override the referenced schema.
    for (key, value) in siblings {
        merged.insert(key, value);
    }
    rewrite_object(merged, defs, depth + 1)
}

fn collapse_nullable_type(obj: &mut Map<String, Value>) {
    let Some(Value::Array(types)) = obj.get("type") else {
        return;
    };

    let non_null: Vec<Value> = types
        .iter()
        .filter(|t| t.as_str() != Some("null"))
        .cloned()
        .collect();
    let nullable = non_null.len() < types.len();

    if let [single] = non_null.as_slice() {
        obj.insert("type".to_string(), single.clone());
    }
    if nullable {
        obj.insert("nullable".to_string(), Value::Bool(true));
    }
}

fn collapse_nullable_any_of(obj: &mut Map<String, Value>, defs: &Map<String, Value>, depth: usize) {
    let Some(Value::Array(variants)) = obj.get("anyOf") else {
        return;
    };

    let is_null = |v: &Value| v.get("type").and_then(Value::as_str) == Some("null");
    if variants.len() != 2 || !variants.iter().any(is_null) {
        return;
    }

    let Some(inner) = variants.iter().find(|v| !is_null(v)).cloned() else {
        return;
    };
    obj.remove("anyOf");

    if let Value::Object(inner) = rewrite(inner, defs, depth) {
        for (key, value) in inner {
            obj.entry(key).or_insert(value);
        }
    }
    obj.insert("nullable".to_string(), Value::Bool(true));
}
