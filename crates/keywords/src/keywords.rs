//! Keyword-shaped operations over the fixture store.
//!
//! One instance is built per test run and owns one [`FixtureStore`]; every
//! operation is a thin delegation. Soft misses stay `None`/empty so scripts
//! can branch on absence; the `*_should_*` checks escalate misses into
//! [`CheckError`] failures the harness reports as pass/fail.

use saucedemo_core::{DataResult, Product, UserExpectation};
use saucedemo_fixtures::FixtureStore;

use crate::check::{CheckError, CheckResult};

#[derive(Debug)]
pub struct TestDataKeywords {
    store: FixtureStore,
}

impl TestDataKeywords {
    /// Build over the default data directory.
    pub fn new() -> DataResult<Self> {
        Ok(Self {
            store: FixtureStore::open_default()?,
        })
    }

    /// Build over an already-opened store.
    pub fn with_store(store: FixtureStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    /// Product id for a product name, or `None` when unknown.
    pub fn product_id_by_name(&self, name: &str) -> Option<String> {
        self.store.product_by_name(name).map(|p| p.id().to_string())
    }

    /// Price for a product given either its id or its name.
    ///
    /// Id lookup is tried first, then name; id and name resolution agree on
    /// the same product by construction.
    pub fn product_price(&self, identifier: &str) -> Option<f64> {
        let product = self
            .store
            .product_by_id(identifier)
            .or_else(|| self.store.product_by_name(identifier));
        if product.is_none() {
            tracing::warn!("no product matches identifier: {identifier}");
        }
        product.map(Product::price)
    }

    /// Expected product-name ordering for a sort scenario.
    pub fn expected_sort_order(&self, sort_type: &str) -> Vec<String> {
        self.store.expected_sort_order(sort_type).to_vec()
    }

    /// Pass when the named product exists and sits in `department`.
    pub fn product_should_be_in_department(&self, name: &str, department: &str) -> CheckResult {
        let product = self
            .store
            .product_by_name(name)
            .ok_or_else(|| CheckError::ProductMissing(name.to_string()))?;

        if product.department() != department {
            return Err(CheckError::DepartmentMismatch {
                name: name.to_string(),
                actual: product.department().to_string(),
                expected: department.to_string(),
            });
        }
        Ok(())
    }

    /// Names of the products carrying `tag`.
    pub fn products_with_tag(&self, tag: &str) -> Vec<String> {
        self.store
            .products_by_tag(tag)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Expectation record for a user type, or `None` when none is declared.
    pub fn user_expectations(&self, user_type: &str) -> Option<UserExpectation> {
        self.store.user_expectation(user_type).cloned()
    }

    /// Pass when an expectation record exists and allows checkout.
    pub fn user_should_be_able_to_checkout(&self, user_type: &str) -> CheckResult {
        let expectations = self
            .store
            .user_expectation(user_type)
            .ok_or_else(|| CheckError::ExpectationsMissing(user_type.to_string()))?;

        if !expectations.can_checkout {
            return Err(CheckError::CheckoutNotAllowed(user_type.to_string()));
        }
        Ok(())
    }

    /// Names of every product, in declaration order.
    pub fn all_product_names(&self) -> Vec<String> {
        self.store
            .all_products()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// The whole product record for a name, or `None` (logged) when unknown.
    pub fn product(&self, name: &str) -> Option<Product> {
        self.store.product_by_name(name).cloned()
    }

    /// One field of a product record, projected as JSON.
    ///
    /// `None` (logged) when the product or the field does not exist.
    pub fn product_field(&self, name: &str, field: &str) -> Option<serde_json::Value> {
        let product = self.store.product_by_name(name)?;
        let record = serde_json::to_value(product).ok()?;
        let value = record.get(field).cloned();
        if value.is_none() {
            tracing::warn!("product '{name}' has no field '{field}'");
        }
        value
    }
}
