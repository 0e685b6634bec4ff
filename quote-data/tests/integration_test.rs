//! Integration tests running the fixture files through the loaders, the
//! estimator and the in-memory catalog together.

use pretty_assertions::assert_eq;
use quote_core::calculations::material_cost;
use quote_core::{AddOnKind, CatalogRepository, Estimator, InMemoryCatalog, QuoteRequest};
use quote_data::{WoodProfileLoader, config_from_str, estimate_batch, quote_loader};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const QUOTES_CSV: &str = include_str!("../test-data/quotes.csv");
const PROFILES_CSV: &str = include_str!("../test-data/wood_profiles.csv");
const RATES_TOML: &str = include_str!("../test-data/rates.toml");

async fn setup_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    let records =
        WoodProfileLoader::parse(PROFILES_CSV.as_bytes()).expect("Failed to parse profiles");
    WoodProfileLoader::load(&catalog, &records)
        .await
        .expect("Failed to load profiles");
    catalog
}

fn totals(
    estimator: &Estimator,
    request: &QuoteRequest,
) -> (Decimal, Decimal) {
    let result = estimator.estimate(request).expect("estimate");
    (result.totals.min, result.totals.max)
}

#[test]
fn test_batch_fixture_prices_every_valid_row() {
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");
    assert_eq!(requests.len(), 7);

    let rows = estimate_batch(&Estimator::default(), &requests);

    let summary: Vec<_> = rows
        .iter()
        .map(|r| r.quote.as_ref().map(|q| (q.totals.min, q.totals.max)))
        .collect();
    assert_eq!(
        summary,
        vec![
            Some((dec!(3500), dec!(5500))),
            Some((dec!(4200), dec!(6600))),
            Some((dec!(4400), dec!(7900))),
            None,
            Some((dec!(17275), dec!(37975))),
            None,
            Some((dec!(2375), dec!(5850))),
        ]
    );
}

#[test]
fn test_batch_fixture_reports_row_errors() {
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");

    let rows = estimate_batch(&Estimator::default(), &requests);

    let errors: Vec<_> = rows
        .iter()
        .filter_map(|r| r.error.as_deref().map(|e| (r.row, e)))
        .collect();
    assert_eq!(
        errors,
        vec![
            (4, "projectType required"),
            (6, "squareFeet must be positive"),
        ]
    );
}

#[test]
fn test_batch_fixture_stairs_and_small_job() {
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");

    let result = Estimator::default().estimate(&requests[2]).expect("row 3");

    assert_eq!(result.base.min, dec!(3600));
    assert_eq!(result.base.max, dec!(6600));
    let stairs = result.add_on(AddOnKind::Stairs).expect("stairs add-on");
    assert_eq!((stairs.min, stairs.max), (dec!(800), dec!(1300)));
    // Per-foot figures use the real 500 sq ft, not the 600 sq ft floor.
    assert_eq!(result.price_per_sq_ft.min, dec!(8.8));
    assert_eq!(result.price_per_sq_ft.max, dec!(15.8));
}

#[test]
fn test_kitchen_fixture_row_includes_scope() {
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");

    let result = Estimator::default().estimate(&requests[4]).expect("row 5");

    let kitchen = result.add_on(AddOnKind::KitchenScope).expect("kitchen scope");
    assert_eq!((kitchen.min, kitchen.max), (dec!(13500), dec!(31500)));
    assert_eq!(result.subtotal.min, dec!(17280));
    assert_eq!(result.subtotal.max, dec!(37980));
}

#[test]
fn test_rate_card_override_changes_totals() {
    let config = config_from_str(RATES_TOML).expect("Failed to parse rates");
    let estimator = Estimator::new(config);
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");

    // High location at 1.3: base [4550, 7150], each a midpoint of $100.
    assert_eq!(totals(&estimator, &requests[1]), (dec!(4600), dec!(7200)));
    // Medium location is untouched and already a multiple of 100.
    assert_eq!(totals(&estimator, &requests[0]), (dec!(3500), dec!(5500)));
}

#[test]
fn test_overridden_totals_are_multiples_of_step() {
    let config = config_from_str(RATES_TOML).expect("Failed to parse rates");
    let estimator = Estimator::new(config);
    let requests = quote_loader::load_from_str(QUOTES_CSV).expect("Failed to parse quotes");

    for row in estimate_batch(&estimator, &requests) {
        if let Some(quote) = row.quote {
            assert_eq!(quote.totals.min % dec!(100), Decimal::ZERO, "row {}", row.row);
            assert_eq!(quote.totals.max % dec!(100), Decimal::ZERO, "row {}", row.row);
        }
    }
}

#[test]
fn test_quote_json_contract() {
    let request = QuoteRequest {
        project_type: Some("refinish".to_string()),
        square_feet: Some(dec!(1000)),
        ..QuoteRequest::default()
    };
    let result = Estimator::default().estimate(&request).expect("estimate");

    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["projectType"], "refinish");
    assert_eq!(json["totals"]["display"], "$3,500 \u{2013} $5,500");
    assert!(json["pricePerSqFt"].is_object());
    assert!(json["addOns"].as_array().is_some_and(|a| a.is_empty()));
    assert_eq!(json["totals"]["min"], 3500.0);
    assert_eq!(json["totals"]["max"], 5500.0);
    assert_eq!(json["meta"]["smallJobMinimumSqFt"], 600.0);
}

#[tokio::test]
async fn test_load_profile_fixture() {
    let catalog = setup_catalog().await;

    let skus: Vec<_> = catalog
        .list_profiles()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.sku)
        .collect();

    assert_eq!(skus, vec!["HK-SMK-7", "WAL-SEL-5", "WO-NAT-5"]);
}

#[tokio::test]
async fn test_material_cost_from_fixture() {
    let catalog = setup_catalog().await;

    let oak = catalog.get_by_sku("WO-NAT-5").await.unwrap();
    let hickory = catalog.get_by_sku("HK-SMK-7").await.unwrap();

    assert_eq!(material_cost(dec!(250.5), &oak), Some(dec!(1876.25)));
    assert_eq!(material_cost(dec!(250.5), &hickory), None);
    assert_eq!(
        oak.poster_url.as_deref(),
        Some("https://cdn.example.com/posters/wo-nat-5.jpg")
    );
}

#[tokio::test]
async fn test_reloading_profiles_is_idempotent() {
    let catalog = setup_catalog().await;
    let records = WoodProfileLoader::parse(PROFILES_CSV.as_bytes()).unwrap();

    let stored = WoodProfileLoader::load(&catalog, &records).await.unwrap();

    assert_eq!(stored, 3);
    assert_eq!(catalog.list_profiles().await.unwrap().len(), 3);
}
