//! Catalog fixture model and its query surface.
//!
//! Pure data, no IO: file loading and caching live in `saucedemo-fixtures`.
//! All lookups are case-sensitive exact matches over small in-memory lists.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Metadata value reported when the fixture omits a field.
pub const UNKNOWN: &str = "unknown";

/// A single catalog product as declared in the fixture file.
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    department: String,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default)]
    description: String,
}

impl Product {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Expected behavior for one user type (checkout eligibility plus any known
/// UI quirks).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExpectation {
    #[serde(default)]
    pub can_checkout: bool,
    #[serde(default)]
    pub known_issues: Vec<String>,
}

/// Root of the fixture file.
///
/// Every field is defaulted so a sparse fixture still parses; the metadata
/// accessors substitute [`UNKNOWN`] for absent fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    schema_version: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    test_scenarios: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    user_expectations: BTreeMap<String, UserExpectation>,
}

impl Fixture {
    /// First product with the given id, scanning in declaration order.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First product with the given name, scanning in declaration order.
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// All products, in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose department equals `department`.
    pub fn products_by_department(&self, department: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.department == department)
            .collect()
    }

    /// Products whose tag set contains `tag`.
    pub fn products_by_tag(&self, tag: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Expected product-name ordering for a sort scenario.
    ///
    /// An unknown scenario yields an empty slice, not an error.
    pub fn expected_sort_order(&self, scenario: &str) -> &[String] {
        self.test_scenarios
            .get(scenario)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Expectation record for a user type, if one is declared.
    pub fn user_expectation(&self, user_type: &str) -> Option<&UserExpectation> {
        self.user_expectations.get(user_type)
    }

    pub fn schema_version(&self) -> &str {
        self.schema_version.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn last_updated(&self) -> &str {
        self.last_updated.as_deref().unwrap_or(UNKNOWN)
    }

    /// Reject fixtures that declare the same product id or name twice.
    ///
    /// Every lookup assumes at most one match; a duplicate is an authoring
    /// error caught at load rather than resolved by scan order.
    pub fn validate(&self) -> DataResult<()> {
        let mut ids = BTreeSet::new();
        let mut names = BTreeSet::new();
        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(DataError::duplicate(format!(
                    "product id '{}'",
                    product.id
                )));
            }
            if !names.insert(product.name.as_str()) {
                return Err(DataError::duplicate(format!(
                    "product name '{}'",
                    product.name
                )));
            }
        }
        Ok(())
    }
}
