//! Fixture loading and the per-store fixture cache.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use saucedemo_core::{DataError, DataResult, Fixture, Product, UserExpectation};

/// Fixture file loaded when a store is opened.
pub const PRIMARY_FIXTURE: &str = "products.json";

/// Loads fixture files from a data directory and answers queries against the
/// primary fixture.
///
/// Each store owns its cache: a fixture is read and parsed at most once per
/// filename, and the parsed value is handed out as `Arc<Fixture>`. There is
/// no invalidation; fixture data is read-only for the life of the store.
#[derive(Debug)]
pub struct FixtureStore {
    data_dir: PathBuf,
    cache: HashMap<String, Arc<Fixture>>,
    primary: Arc<Fixture>,
}

impl FixtureStore {
    /// Open a store over `data_dir`, loading [`PRIMARY_FIXTURE`] eagerly.
    ///
    /// Fails fast: a missing or unparsable primary fixture is an error here,
    /// never a degraded store.
    pub fn open(data_dir: impl Into<PathBuf>) -> DataResult<Self> {
        let data_dir = data_dir.into();
        let primary = load_file(&data_dir, PRIMARY_FIXTURE)?;
        tracing::info!("loaded fixture {PRIMARY_FIXTURE} from {}", data_dir.display());

        let mut cache = HashMap::new();
        cache.insert(PRIMARY_FIXTURE.to_string(), Arc::clone(&primary));

        Ok(Self {
            data_dir,
            cache,
            primary,
        })
    }

    /// Open a store over the workspace `data` directory.
    pub fn open_default() -> DataResult<Self> {
        Self::open(default_data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load a fixture file by name.
    ///
    /// The first call reads, parses, and validates the file; later calls for
    /// the same filename return the cached value without touching the
    /// filesystem.
    pub fn load(&mut self, filename: &str) -> DataResult<Arc<Fixture>> {
        if let Some(fixture) = self.cache.get(filename) {
            return Ok(Arc::clone(fixture));
        }

        let fixture = load_file(&self.data_dir, filename)?;
        tracing::info!("loaded fixture {filename} from {}", self.data_dir.display());
        self.cache.insert(filename.to_string(), Arc::clone(&fixture));
        Ok(fixture)
    }

    /// The primary fixture every query below runs against.
    pub fn fixture(&self) -> &Fixture {
        &self.primary
    }

    /// Product with the given id, or `None` (logged, non-fatal).
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        let found = self.primary.product_by_id(id);
        if found.is_none() {
            tracing::warn!("product not found with id: {id}");
        }
        found
    }

    /// Product with the given name, or `None` (logged, non-fatal).
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        let found = self.primary.product_by_name(name);
        if found.is_none() {
            tracing::warn!("product not found with name: {name}");
        }
        found
    }

    /// All products in declaration order.
    pub fn all_products(&self) -> &[Product] {
        self.primary.products()
    }

    pub fn products_by_department(&self, department: &str) -> Vec<&Product> {
        self.primary.products_by_department(department)
    }

    pub fn products_by_tag(&self, tag: &str) -> Vec<&Product> {
        self.primary.products_by_tag(tag)
    }

    /// Expected product-name ordering for a sort scenario; empty when the
    /// scenario is not declared.
    pub fn expected_sort_order(&self, scenario: &str) -> &[String] {
        self.primary.expected_sort_order(scenario)
    }

    /// Expectation record for a user type, if one is declared.
    pub fn user_expectation(&self, user_type: &str) -> Option<&UserExpectation> {
        self.primary.user_expectation(user_type)
    }

    pub fn schema_version(&self) -> &str {
        self.primary.schema_version()
    }

    pub fn last_updated(&self) -> &str {
        self.primary.last_updated()
    }
}

/// Workspace `data` directory, a sibling of the `crates` tree.
fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn load_file(data_dir: &Path, filename: &str) -> DataResult<Arc<Fixture>> {
    let path = data_dir.join(filename);

    let raw = std::fs::read_to_string(&path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DataError::not_found(path.display().to_string()),
        _ => DataError::io(format!("{}: {err}", path.display())),
    })?;

    let fixture: Fixture = serde_json::from_str(&raw)
        .map_err(|err| DataError::parse(format!("{}: {err}", path.display())))?;

    fixture.validate()?;
    Ok(Arc::new(fixture))
}
