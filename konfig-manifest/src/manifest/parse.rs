//! Manifest parsing from files and strings.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
    str::FromStr,
};

use konfig_core::TypeTag;

use super::{ConfigEntry, Language, Manifest, validate::ParseContext};
use crate::{Error, NameProblem, Result, SourceContext};

/// Default manifest filename
pub(crate) const MANIFEST_FILENAME: &str = "konfig.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILENAME)
    }
}

impl Manifest {
    /// Parse a konfig.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    tracing::debug!(
        file = filename,
        configs = manifest.config.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    if manifest.config.is_empty() {
        return Err(source.validation_error("no [[config]] entries declared", None));
    }

    let mut seen = HashSet::new();
    for entry in &manifest.config {
        let name = entry.effective_name();
        if !seen.insert(name) {
            return Err(ctx.error_at(name, format!("config '{}' is declared more than once", name)));
        }
        validate_entry(entry, &ctx.nested(name))?;
    }
    Ok(())
}

fn validate_entry(entry: &ConfigEntry, ctx: &ParseContext<'_>) -> Result<()> {
    if let Some(name) = &entry.name {
        // Config names become directory names, never identifiers in generated code
        if let Some(reason) = super::validate::validate_identifier(name) {
            return Err(ctx.source().name_error(
                name,
                "config",
                NameProblem::Shape(reason),
                ctx.find_span(name),
            ));
        }
    }

    if let Some(package) = entry.package.as_deref().filter(|p| !p.is_empty()) {
        for segment in package.split('.') {
            ctx.validate_name(segment, "package segment", entry.language)?;
        }
    }

    if let Some(object) = &entry.object {
        ctx.validate_name(object, "object", entry.language)?;
    }

    validate_properties(entry.properties.iter(), ctx, entry.language)
}

fn validate_properties<'a>(
    properties: impl IntoIterator<Item = (&'a String, &'a toml::Value)>,
    ctx: &ParseContext<'a>,
    language: Language,
) -> Result<()> {
    // (is_object, emitted identifier) -> declared name, per scope
    let mut emitted: HashMap<(bool, String), &str> = HashMap::new();
    let mut claim = |name: &'a str, is_object: bool| {
        let identifier = language.emitted_name(name, is_object);
        match emitted.insert((is_object, identifier.clone()), name) {
            Some(previous) => Err(ctx.error_at(
                name,
                format!(
                    "'{}' and '{}' both become the {} identifier '{}'",
                    previous,
                    name,
                    language.display_name(),
                    identifier
                ),
            )),
            None => Ok(()),
        }
    };

    for (name, value) in properties {
        match value {
            toml::Value::String(_)
            | toml::Value::Integer(_)
            | toml::Value::Float(_)
            | toml::Value::Boolean(_) => {
                ctx.validate_name(name, "property", language)?;
                claim(name.as_str(), false)?;
            }
            toml::Value::Table(table) => match table.get("type") {
                Some(toml::Value::String(ty)) => {
                    ctx.validate_name(name, "property", language)?;
                    claim(name.as_str(), false)?;
                    validate_tagged(name, ty, table, ctx)?;
                }
                _ => {
                    ctx.validate_name(name, "object", language)?;
                    claim(name.as_str(), true)?;
                    validate_properties(table.iter(), &ctx.nested(name), language)?;
                }
            },
            other => {
                return Err(ctx.error_at(
                    name,
                    format!(
                        "property '{}' has an unsupported {} value",
                        name,
                        other.type_str()
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Validate an inline `{ type = "...", value = ... }` declaration.
fn validate_tagged(
    name: &str,
    ty: &str,
    table: &toml::Table,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    if TypeTag::parse(ty).value_type().is_none() {
        return Err(ctx.invalid_type_error(name, ty));
    }

    if let Some(key) = table.keys().find(|key| !matches!(key.as_str(), "type" | "value")) {
        return Err(ctx.error_at(
            name,
            format!("property '{}' has unexpected key '{}'", name, key),
        ));
    }

    match table.get("value") {
        None
        | Some(toml::Value::String(_))
        | Some(toml::Value::Integer(_))
        | Some(toml::Value::Float(_))
        | Some(toml::Value::Boolean(_)) => Ok(()),
        Some(other) => Err(ctx.error_at(
            name,
            format!(
                "property '{}' has an unsupported {} value",
                name,
                other.type_str()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest: Manifest = r#"
            [[config]]
            package = "com.example"
            object = "AppConfig"
            destination = "build"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.config.len(), 1);
        let entry = &manifest.config[0];
        assert_eq!(entry.effective_name(), "unnamed");
        assert_eq!(entry.language, Language::Kotlin);
        assert!(entry.properties.is_empty());
    }

    #[test]
    fn test_properties_keep_document_order() {
        let manifest: Manifest = r#"
            [[config]]
            [config.properties]
            zeta = 1
            alpha = "a"
            mid = true
        "#
        .parse()
        .unwrap();

        let keys: Vec<&str> = manifest.config[0]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_manifest("[[config]\n", "konfig.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_manifest("[[config]]\nobjekt = \"A\"\n", "konfig.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_manifest_is_rejected() {
        let err = parse_manifest("", "konfig.toml").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_duplicate_config_names() {
        let err = parse_manifest(
            "[[config]]\nname = \"main\"\n\n[[config]]\nname = \"main\"\n",
            "konfig.toml",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "config 'main' is declared more than once");
    }

    #[test]
    fn test_invalid_property_name() {
        let err = parse_manifest(
            "[[config]]\n[config.properties]\n\"api-url\" = \"x\"\n",
            "konfig.toml",
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::InvalidName { ref name, problem: NameProblem::Shape(_), .. } if name == "api-url"
        ));
    }

    #[test]
    fn test_keyword_depends_on_language() {
        let kotlin = "[[config]]\n[config.properties]\ntype = 1\n";
        assert!(parse_manifest(kotlin, "konfig.toml").is_ok());

        let rust = "[[config]]\nlanguage = \"rust\"\n[config.properties]\ntype = 1\n";
        let err = parse_manifest(rust, "konfig.toml").unwrap_err();
        assert!(matches!(
            *err,
            Error::InvalidName {
                ref name,
                problem: NameProblem::Keyword(Language::Rust),
                ..
            } if name == "type"
        ));
    }

    #[test]
    fn test_unsupported_type_points_at_type() {
        let src = "[[config]]\n[config.properties]\nstarted = { type = \"date\" }\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();

        match *err {
            Error::InvalidType { span, ref ty, .. } => {
                assert_eq!(ty, "date");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "date");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_tagged_key() {
        let src = "[[config]]\n[config.properties]\nport = { type = \"int\", default = 1 }\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();
        assert_eq!(err.to_string(), "property 'port' has unexpected key 'default'");
    }

    #[test]
    fn test_arrays_are_rejected() {
        let src = "[[config]]\n[config.properties]\nhosts = [\"a\", \"b\"]\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();
        assert_eq!(err.to_string(), "property 'hosts' has an unsupported array value");
    }

    #[test]
    fn test_nested_object_names_are_validated() {
        let src = "[[config]]\n[config.properties.server]\n\"1port\" = 80\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();
        match *err {
            Error::InvalidName { ref context, .. } => {
                assert_eq!(context, "property in 'unnamed.server'")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rust_renamed_constants_must_stay_distinct() {
        let src = "[[config]]\nlanguage = \"rust\"\n[config.properties]\n\
                   apiUrl = \"a\"\napi_url = \"b\"\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();

        assert_eq!(
            err.to_string(),
            "'apiUrl' and 'api_url' both become the Rust identifier 'API_URL'"
        );
        match *err {
            Error::Validation { span, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "api_url");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rust_renamed_modules_must_stay_distinct() {
        let src = "[[config]]\nlanguage = \"rust\"\n\
                   [config.properties.Server]\nport = 1\n\
                   [config.properties.server]\nport = 2\n";
        let err = parse_manifest(src, "konfig.toml").unwrap_err();

        assert_eq!(
            err.to_string(),
            "'Server' and 'server' both become the Rust identifier 'server'"
        );
    }

    #[test]
    fn test_renamed_names_are_scoped_and_per_language() {
        let kotlin = "[[config]]\n[config.properties]\napiUrl = \"a\"\napi_url = \"b\"\n";
        assert!(parse_manifest(kotlin, "konfig.toml").is_ok());

        // A constant and a module never share a namespace, and nested scopes are separate.
        let rust = "[[config]]\nlanguage = \"rust\"\n[config.properties]\nserver = \"x\"\n\
                    [config.properties.Server]\nserver = \"y\"\n";
        assert!(parse_manifest(rust, "konfig.toml").is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("does/not/exist/konfig.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
