//! Catalog file persistence
//!
//! Reads the catalog document fully before anything is written, and writes
//! it back in place as four-space indented JSON with non-ASCII text kept
//! literal.

use crate::catalog::{errors::CatalogError, types::CatalogDocument};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

pub fn load_catalog(path: &Path) -> Result<CatalogDocument, CatalogError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // A regular file standing in for a parent directory also means no catalog
        Err(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ) =>
        {
            tracing::error!(
                event = "core.catalog.load_not_found",
                path = %path.display()
            );
            return Err(CatalogError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(CatalogError::IoError { source: e }),
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.catalog.load_invalid_json",
            path = %path.display(),
            error = %e
        );
        CatalogError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let Value::Object(entries) = value else {
        return Err(CatalogError::NotAnObject {
            path: path.display().to_string(),
        });
    };

    tracing::info!(
        event = "core.catalog.load_completed",
        path = %path.display(),
        entry_count = entries.len()
    );

    Ok(CatalogDocument::new(entries))
}

/// Render the document the way it is stored on disk.
pub fn to_pretty_json(doc: &CatalogDocument) -> Result<String, CatalogError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    doc.as_map()
        .serialize(&mut serializer)
        .map_err(|e| CatalogError::SerializeFailed {
            message: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| CatalogError::SerializeFailed {
        message: e.to_string(),
    })
}

pub fn save_catalog(doc: &CatalogDocument, path: &Path) -> Result<(), CatalogError> {
    let json = to_pretty_json(doc).inspect_err(|e| {
        tracing::error!(
            event = "core.catalog.serialization_failed",
            path = %path.display(),
            error = %e
        );
    })?;

    fs::write(path, json).map_err(|e| {
        tracing::error!(
            event = "core.catalog.save_failed",
            path = %path.display(),
            error = %e
        );
        CatalogError::IoError { source: e }
    })?;

    tracing::info!(event = "core.catalog.save_completed", path = %path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
    "bedrock": {
        "doc": "https://docs.aws.amazon.com/bedrock/latest/userguide/models-supported.html",
        "note": "亞太區可用"
    },
    "gcp": {
        "doc": "https://cloud.google.com/vertex-ai/generative-ai/docs/models",
        "tags": [
            "gemini",
            "imagen"
        ],
        "tier": 2
    },
    "last_update": "2024-01-01 00:00:00"
}"#;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_under_file_parent_returns_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let parent = temp_dir.path().join("data");
        fs::write(&parent, "not a directory").unwrap();
        let path = parent.join("models.json");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_invalid_json_returns_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ParseFailed { .. }));
    }

    #[test]
    fn test_load_non_object_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        fs::write(&path, r#"["bedrock", "gcp"]"#).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject { .. }));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = load_catalog(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::IoError { .. }));
    }

    #[test]
    fn test_round_trip_is_byte_stable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        fs::write(&path, SAMPLE).unwrap();

        let doc = load_catalog(&path).unwrap();
        save_catalog(&doc, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn test_round_trip_keeps_large_integers_exact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        fs::write(
            &path,
            r#"{"gcp":{"doc":"https://x","build_id":123456789012345678901234567890,"ratio":0.10000000000000000555}}"#,
        )
        .unwrap();

        let doc = load_catalog(&path).unwrap();
        save_catalog(&doc, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(
            written.contains("\"build_id\": 123456789012345678901234567890"),
            "got: {written}"
        );
        assert!(written.contains("\"ratio\": 0.10000000000000000555"), "got: {written}");
    }

    #[test]
    fn test_save_keeps_non_ascii_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        let value = json!({ "gcp": { "doc": "https://example.com", "名稱": "模型目錄" } });
        let doc = CatalogDocument::new(value.as_object().unwrap().clone());

        save_catalog(&doc, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"名稱\": \"模型目錄\""));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let value = json!({ "gcp": { "doc": "https://example.com" } });
        let doc = CatalogDocument::new(value.as_object().unwrap().clone());

        let json = to_pretty_json(&doc).unwrap();
        assert_eq!(
            json,
            "{\n    \"gcp\": {\n        \"doc\": \"https://example.com\"\n    }\n}"
        );
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models.json");
        fs::write(&path, SAMPLE).unwrap();

        let mut doc = load_catalog(&path).unwrap();
        doc.set_last_update("2030-12-31 23:59:59");
        save_catalog(&doc, &path).unwrap();

        let reloaded = load_catalog(&path).unwrap();
        assert_eq!(reloaded.last_update(), Some("2030-12-31 23:59:59"));
        assert_eq!(reloaded.as_map()["gcp"]["tier"], json!(2));
    }
}
