//! Config aggregate and its builder.

use std::path::{Path, PathBuf};

use crate::{Error, Properties, Property, Result};

/// Name used when a config is declared without one.
pub const DEFAULT_CONFIG_NAME: &str = "unnamed";

/// Lifecycle of a [`ConfigBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing registered yet.
    Empty,
    /// At least one properties block has been applied.
    Accumulating,
    /// [`ConfigBuilder::build`] succeeded; the builder accepts no further changes.
    Built,
}

/// A fully assembled config, ready to hand to an emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    name: String,
    package: String,
    object_name: String,
    destination: PathBuf,
    properties: Vec<Property>,
}

impl Config {
    /// Human name of the config (`"unnamed"` when not supplied).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package (or module path) the generated code lives in.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Name of the generated top-level object.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Output directory: the configured destination joined with the config name.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Top-level properties in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// Collects metadata and properties for one [`Config`].
///
/// # Example
///
/// ```
/// use konfig_core::ConfigBuilder;
///
/// let mut builder = ConfigBuilder::new(Some("main".to_string()));
/// builder
///     .package("com.example")
///     .object_name("AppConfig")
///     .destination("build/generated");
/// builder.properties(|scope| {
///     scope.string("api_url", "https://example.com")?;
///     Ok(())
/// })?;
///
/// let config = builder.build()?;
/// assert_eq!(config.destination(), std::path::Path::new("build/generated/main"));
/// # Ok::<(), konfig_core::Error>(())
/// ```
#[derive(Debug)]
pub struct ConfigBuilder {
    name: Option<String>,
    package: Option<String>,
    object_name: Option<String>,
    destination: Option<PathBuf>,
    properties: Properties,
    state: BuilderState,
}

impl ConfigBuilder {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            package: None,
            object_name: None,
            destination: None,
            properties: Properties::new(),
            state: BuilderState::Empty,
        }
    }

    pub fn package(&mut self, package: impl Into<String>) -> &mut Self {
        self.package = Some(package.into());
        self
    }

    pub fn object_name(&mut self, object_name: impl Into<String>) -> &mut Self {
        self.object_name = Some(object_name.into());
        self
    }

    pub fn destination(&mut self, destination: impl Into<PathBuf>) -> &mut Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Declare properties in a new top-level scope.
    ///
    /// The block's properties are appended in order once it returns successfully.
    /// Names must not collide with properties from earlier blocks.
    pub fn properties<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Properties) -> Result<()>,
    {
        self.ensure_open()?;
        let collected = Properties::collect(build)?;
        if let Some(duplicate) = collected.iter().find(|p| self.properties.contains(p.name())) {
            return Err(Error::DuplicateName {
                name: duplicate.name().to_string(),
            });
        }
        for property in collected {
            self.properties.append(property)?;
        }
        self.state = BuilderState::Accumulating;
        Ok(self)
    }

    /// Assemble the config.
    ///
    /// Fails with [`Error::MissingField`] if the package, object name or destination is
    /// unset, leaving the builder untouched so the caller can fix it. After a successful
    /// build every further call fails with [`Error::AlreadyBuilt`].
    pub fn build(&mut self) -> Result<Config> {
        self.ensure_open()?;

        let package = self
            .package
            .clone()
            .ok_or(Error::MissingField { field: "package" })?;
        let object_name = self
            .object_name
            .clone()
            .ok_or(Error::MissingField {
                field: "object_name",
            })?;
        let destination = self
            .destination
            .as_ref()
            .ok_or(Error::MissingField {
                field: "destination",
            })?;

        let name = self
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_NAME.to_string());
        let destination = destination.join(&name);
        let properties = std::mem::take(&mut self.properties).into_inner();

        tracing::debug!(
            config = %name,
            properties = properties.len(),
            destination = %destination.display(),
            "built config"
        );
        self.state = BuilderState::Built;

        Ok(Config {
            name,
            package,
            object_name,
            destination,
            properties,
        })
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == BuilderState::Built {
            return Err(Error::AlreadyBuilt);
        }
        Ok(())
    }
}
