//! Pure transform applied to the frontend's `tsconfig.json`.

use serde_json::{Map, Value};

use super::DomainError;

pub const COMPILER_TARGET: &str = "ES2017";

/// Force `compilerOptions.target` and
/// `compilerOptions.forceConsistentCasingInFileNames`, keeping every other
/// key and its order. A missing `compilerOptions` object is created.
pub fn apply_compiler_overrides(mut config: Value) -> Result<Value, DomainError> {
    let root = config
        .as_object_mut()
        .ok_or_else(|| DomainError::InvalidCompilerConfig {
            reason: "top-level value is not an object".into(),
        })?;

    let options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| DomainError::InvalidCompilerConfig {
            reason: "compilerOptions is not an object".into(),
        })?;

    options.insert("target".into(), Value::String(COMPILER_TARGET.into()));
    options.insert("forceConsistentCasingInFileNames".into(), Value::Bool(true));

    Ok(config)
}

/// Parse, patch and re-serialize with two-space indentation.
pub fn patch_compiler_config(source: &str) -> Result<String, DomainError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| DomainError::InvalidCompilerConfig {
            reason: format!("not valid JSON: {}", e),
        })?;

    let patched = apply_compiler_overrides(value)?;

    serde_json::to_string_pretty(&patched).map_err(|e| DomainError::InvalidCompilerConfig {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overrides_target_and_casing() {
        let input = json!({
            "compilerOptions": { "target": "ES5", "strict": true },
            "include": ["src"]
        });

        let out = apply_compiler_overrides(input).unwrap();

        assert_eq!(out["compilerOptions"]["target"], "ES2017");
        assert_eq!(out["compilerOptions"]["forceConsistentCasingInFileNames"], true);
        assert_eq!(out["compilerOptions"]["strict"], true);
        assert_eq!(out["include"], json!(["src"]));
    }

    #[test]
    fn creates_missing_compiler_options() {
        let out = apply_compiler_overrides(json!({ "include": [] })).unwrap();
        assert_eq!(out["compilerOptions"]["target"], "ES2017");
    }

    #[test]
    fn rejects_non_object_shapes() {
        assert!(apply_compiler_overrides(json!([1, 2])).is_err());
        assert!(apply_compiler_overrides(json!({ "compilerOptions": "x" })).is_err());
    }

    #[test]
    fn preserves_key_order_and_indents_two_spaces() {
        let source = r#"{"compilerOptions":{"lib":["dom"],"target":"es5"},"exclude":["node_modules"]}"#;
        let out = patch_compiler_config(source).unwrap();

        let lib = out.find("\"lib\"").unwrap();
        let target = out.find("\"target\"").unwrap();
        let exclude = out.find("\"exclude\"").unwrap();
        assert!(lib < target && target < exclude);
        assert!(out.contains("\n  \"compilerOptions\": {\n    \"lib\""));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = patch_compiler_config("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCompilerConfig { .. }));
    }
}
