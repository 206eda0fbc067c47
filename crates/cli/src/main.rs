//! `fixture-report` — print a summary of the shipped fixture.
//!
//! A quick smoke check that the data layer and the fixture file agree.
//! Takes an optional data-directory argument; defaults to the workspace
//! `data` directory.

use anyhow::Context;
use saucedemo_fixtures::FixtureStore;

fn main() -> anyhow::Result<()> {
    saucedemo_observability::init();

    let store = match std::env::args().nth(1) {
        Some(dir) => FixtureStore::open(dir),
        None => FixtureStore::open_default(),
    }
    .context("failed to open fixture store")?;

    println!("schema version: {}", store.schema_version());
    println!("last updated:   {}", store.last_updated());
    println!("products:       {}", store.all_products().len());

    if let Some(backpack) = store.product_by_id("sauce-labs-backpack") {
        println!("backpack price: ${}", backpack.price());
    }

    let order = store.expected_sort_order("sort_by_price_asc");
    println!("price ascending: {}", order.join(", "));

    if let Some(expectation) = store.user_expectation("problem_user") {
        println!("problem user issues: {}", expectation.known_issues.join("; "));
    }

    Ok(())
}
