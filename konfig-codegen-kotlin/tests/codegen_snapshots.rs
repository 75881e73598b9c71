//! Snapshot tests for Kotlin code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

#![allow(deprecated)]

use konfig_codegen_kotlin::{Generator, LanguageCodegen};
use konfig_core::{Config, ConfigBuilder, NumberKind, TypeTag};

fn config(build: impl FnOnce(&mut konfig_core::Properties) -> konfig_core::Result<()>) -> Config {
    let mut builder = ConfigBuilder::new(Some("main".to_string()));
    builder
        .package("com.example.app")
        .object_name("AppConfig")
        .destination("build/generated");
    builder.properties(build).expect("properties should register");
    builder.build().expect("config should build")
}

/// Generate code for a config and return the single generated file.
fn generate(config: &Config) -> (String, String) {
    let files = Generator::new(config).preview();
    assert_eq!(files.len(), 1);
    let file = files.into_iter().next().unwrap();
    (file.path, file.content)
}

#[test]
fn test_full_config_object() {
    let config = config(|scope| {
        scope
            .string("apiUrl", "https://example.com")?
            .bool("enabled", true)?
            .int("timeout", 30)?
            .long("timeoutLong", 30)?
            .float("ratio", 0.5)?
            .double("scale", 2.0)?
            .nullable_string("proxy", None)?
            .object("server", |server| {
                server.string("host", "localhost")?.int("port", 8080)?;
                Ok(())
            })?;
        let retries = scope.property("retries", TypeTag::Number(NumberKind::Long));
        scope.set(retries, 3_i64)?;
        Ok(())
    });

    let (path, content) = generate(&config);

    assert_eq!(path, "com/example/app/AppConfig.kt");
    insta::assert_snapshot!(content, @r#"
    // Generated by konfig. Do not edit.

    package com.example.app

    object AppConfig {
        const val apiUrl: String = "https://example.com"
        const val enabled: Boolean = true
        const val timeout: Int = 30
        const val timeoutLong: Long = 30L
        const val ratio: Float = 0.5f
        const val scale: Double = 2.0
        val proxy: String? = null

        object server {
            const val host: String = "localhost"
            const val port: Int = 8080
        }

        const val retries: Long = 3
    }
    "#);
}

#[test]
fn test_nullable_numbers_and_booleans() {
    let config = config(|scope| {
        scope
            .nullable_int("limit", None)?
            .nullable_long("budget", Some(10))?
            .nullable_boolean("beta", None)?;
        Ok(())
    });

    let (_, content) = generate(&config);

    insta::assert_snapshot!(content, @r#"
    // Generated by konfig. Do not edit.

    package com.example.app

    object AppConfig {
        val limit: Int? = null
        const val budget: Long = 10L
        val beta: Boolean? = null
    }
    "#);
}

#[test]
fn test_deeply_nested_objects() {
    let config = config(|scope| {
        scope.object("database", |db| {
            db.string("driver", "postgres")?.object("pool", |pool| {
                pool.int("min", 1)?.int("max", 10)?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    });

    let (_, content) = generate(&config);

    insta::assert_snapshot!(content, @r#"
    // Generated by konfig. Do not edit.

    package com.example.app

    object AppConfig {
        object database {
            const val driver: String = "postgres"

            object pool {
                const val min: Int = 1
                const val max: Int = 10
            }
        }
    }
    "#);
}

#[test]
fn test_escaped_strings_and_keywords() {
    let config = config(|scope| {
        scope
            .string("greeting", "Hello, \"$user\"\n")?
            .bool("object", false)?;
        Ok(())
    });

    let (_, content) = generate(&config);

    assert!(content.contains(r#"const val greeting: String = "Hello, \"\$user\"\n""#));
    assert!(content.contains("const val `object`: Boolean = false"));
}

#[test]
fn test_generation_is_deterministic() {
    let build = |scope: &mut konfig_core::Properties| -> konfig_core::Result<()> {
        scope.double("pi", std::f64::consts::PI)?.float("ratio", 0.25)?;
        Ok(())
    };

    let first = generate(&config(build));
    let second = generate(&config(build));

    assert_eq!(first, second);
}

#[test]
fn test_generate_writes_file() {
    let config = config(|scope| {
        scope.string("apiUrl", "https://example.com")?;
        Ok(())
    });
    let temp = tempfile::TempDir::new().unwrap();

    let result = Generator::new(&config).generate(temp.path()).unwrap();

    let expected = temp.path().join("com/example/app/AppConfig.kt");
    assert_eq!(result.written, vec![expected.clone()]);
    let written = std::fs::read_to_string(expected).unwrap();
    assert!(written.starts_with("// Generated by konfig. Do not edit.\n\npackage com.example.app\n"));
}
