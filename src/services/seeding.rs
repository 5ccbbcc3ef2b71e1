//! Onboarding seeding: starter categories and sample products per industry.
//!
//! Every category and product is looked up before it is inserted, so a run
//! can be repeated without creating duplicates. Failures are collected per
//! item and never abort sibling work; nothing is rolled back.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::models::category::NewCategory;
use crate::models::product::{NewProduct, ProductStatus};
use crate::models::stock_transaction::{StockTransaction, TransactionType, AUTO_GENERATED_REFERENCE};
use crate::services::taxonomy::{suggested_categories, CategorySuggestion, IndustryKey};
use crate::store::{record_id, to_record, DataStore, Filter, Record, StoreError, Table};

const INITIAL_STOCK_NOTE: &str = "Initial stock from auto-generated categories";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Error processing category {name}: {source}")]
    CategoryLookup { name: String, source: StoreError },

    #[error("Failed to create category {name}: {source}")]
    CategoryInsert { name: String, source: StoreError },

    #[error("Failed to create category {name}: No data returned")]
    CategoryMissingId { name: String },

    #[error("Error creating product {name}: {source}")]
    ProductLookup { name: String, source: StoreError },

    #[error("Failed to create product {name}: {source}")]
    ProductInsert { name: String, source: StoreError },

    #[error("Failed to record initial stock for {name}: {source}")]
    StockMovement { name: String, source: StoreError },

    #[error("fatal error: {0}")]
    Fatal(StoreError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedResult {
    pub success: bool,
    pub categories_created: u32,
    pub products_created: u32,
    pub errors: Vec<String>,
}

impl SeedResult {
    fn fatal(err: SeedError) -> Self {
        Self {
            success: false,
            categories_created: 0,
            products_created: 0,
            errors: vec![err.to_string()],
        }
    }
}

/// Counters accumulated while a run is in progress.
#[derive(Debug, Default)]
struct Tally {
    categories_created: u32,
    products_created: u32,
    errors: Vec<SeedError>,
}

impl Tally {
    fn record(&mut self, err: SeedError) {
        warn!(error = %err, "Seeding step failed");
        self.errors.push(err);
    }

    // Partial progress still counts as success once any category was created.
    fn finish(self) -> SeedResult {
        SeedResult {
            success: self.errors.is_empty() || self.categories_created > 0,
            categories_created: self.categories_created,
            products_created: self.products_created,
            errors: self.errors.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompanyType<'a> {
    user_id: Uuid,
    #[serde(rename = "type")]
    industry: IndustryKey,
    custom_type: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub owner: Uuid,
    pub location: Uuid,
    /// `None` for an unrecognised industry: no suggestions, and the saved
    /// company type is left alone.
    pub industry: Option<IndustryKey>,
    /// Restricts the industry suggestions to these category names.
    pub selected: Option<Vec<String>>,
    /// Free-text categories created without sample products.
    pub custom: Vec<String>,
    /// Free-text description of the business when the industry is `Other`.
    pub custom_industry: Option<String>,
}

impl SeedPlan {
    pub fn new(owner: Uuid, location: Uuid, industry: IndustryKey) -> Self {
        Self {
            owner,
            location,
            industry: Some(industry),
            selected: None,
            custom: Vec::new(),
            custom_industry: None,
        }
    }

    fn suggestions(&self) -> impl Iterator<Item = &'static CategorySuggestion> + '_ {
        let all = self.industry.map_or(&[][..], suggested_categories);
        all.iter().filter(move |s| {
            self.selected
                .as_ref()
                .map_or(true, |names| names.iter().any(|n| n == s.name))
        })
    }
}

/// Randomised opening stock for a sample product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStock {
    pub quantity_in_stock: i32,
    pub minimum_stock_level: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
}

impl SampleStock {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let quantity_in_stock = rng.gen_range(10..60);
        let purchase_price = round2(rng.gen_range(5.0..55.0));
        let markup = rng.gen_range(1.3..1.7);
        Self {
            quantity_in_stock,
            minimum_stock_level: (f64::from(quantity_in_stock) * 0.2).floor() as i32,
            purchase_price,
            sale_price: round2(purchase_price * markup),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

enum CategoryOutcome {
    Existing(Uuid),
    Created(Uuid),
}

pub struct Seeder<'a> {
    store: &'a dyn DataStore,
    rng: StdRng,
}

impl<'a> Seeder<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: &'a dyn DataStore, rng: StdRng) -> Self {
        Self { store, rng }
    }

    /// Seeds every suggested category of `industry` with its sample products.
    pub async fn seed(&mut self, owner: Uuid, location: Uuid, industry: IndustryKey) -> SeedResult {
        self.run(&SeedPlan::new(owner, location, industry)).await
    }

    #[instrument(skip(self, plan), fields(owner = %plan.owner, industry = ?plan.industry))]
    pub async fn run(&mut self, plan: &SeedPlan) -> SeedResult {
        let mut tally = Tally::default();
        if let Some(industry) = plan.industry {
            if let Err(fatal) = self.save_industry(plan, industry).await {
                warn!(error = %fatal, "Seeding aborted");
                return SeedResult::fatal(fatal);
            }
        }

        for suggestion in plan.suggestions() {
            self.seed_category(plan, suggestion, &mut tally).await;
        }
        self.create_custom(plan.owner, &plan.custom, &mut tally).await;

        info!(
            categories = tally.categories_created,
            products = tally.products_created,
            errors = tally.errors.len(),
            "Seeding finished"
        );
        tally.finish()
    }

    /// Lookup-or-create for free-text category names; no products are added.
    #[instrument(skip(self, names), fields(count = names.len()))]
    pub async fn seed_custom_categories(&mut self, owner: Uuid, names: &[String]) -> SeedResult {
        let mut tally = Tally::default();
        self.create_custom(owner, names, &mut tally).await;
        tally.finish()
    }

    async fn save_industry(&self, plan: &SeedPlan, industry: IndustryKey) -> Result<(), SeedError> {
        let row = CompanyType {
            user_id: plan.owner,
            industry,
            custom_type: match industry {
                IndustryKey::Other => plan.custom_industry.as_deref(),
                _ => None,
            },
        };
        let record = to_record(Table::CompanyTypes, &row).map_err(SeedError::Fatal)?;
        self.store
            .upsert(Table::CompanyTypes, record, "user_id")
            .await
            .map(|_| ())
            .map_err(SeedError::Fatal)
    }

    async fn insert_row<T: Serialize + Sync>(&self, table: Table, row: &T) -> Result<Record, StoreError> {
        let record = to_record(table, row)?;
        self.store.insert(table, record).await
    }

    async fn seed_category(&mut self, plan: &SeedPlan, suggestion: &CategorySuggestion, tally: &mut Tally) {
        let category_id = match self
            .ensure_category(plan.owner, suggestion.name, suggestion.description)
            .await
        {
            Ok(CategoryOutcome::Existing(id)) => id,
            Ok(CategoryOutcome::Created(id)) => {
                tally.categories_created += 1;
                id
            }
            Err(err) => {
                tally.record(err);
                return;
            }
        };

        for product_name in suggestion.sample_products {
            self.seed_product(plan, suggestion.name, category_id, product_name, tally)
                .await;
        }
    }

    async fn ensure_category(
        &self,
        owner: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<CategoryOutcome, SeedError> {
        let existing = self
            .store
            .find(
                Table::Categories,
                &Filter::new().eq("name", name).eq("user_id", owner.to_string()),
            )
            .await
            .map_err(|source| SeedError::CategoryLookup { name: name.to_string(), source })?;
        if let Some(id) = existing.as_ref().and_then(record_id) {
            return Ok(CategoryOutcome::Existing(id));
        }

        let row = NewCategory { name, description, user_id: owner };
        let inserted = self
            .insert_row(Table::Categories, &row)
            .await
            .map_err(|source| SeedError::CategoryInsert { name: name.to_string(), source })?;

        record_id(&inserted)
            .map(CategoryOutcome::Created)
            .ok_or_else(|| SeedError::CategoryMissingId { name: name.to_string() })
    }

    async fn seed_product(
        &mut self,
        plan: &SeedPlan,
        category_name: &str,
        category_id: Uuid,
        product_name: &str,
        tally: &mut Tally,
    ) {
        let lookup = self
            .store
            .find(
                Table::Products,
                &Filter::new()
                    .eq("name", product_name)
                    .eq("user_id", plan.owner.to_string())
                    .eq("branch_id", plan.location.to_string()),
            )
            .await;
        match lookup {
            Ok(Some(_)) => return,
            Ok(None) => {}
            Err(source) => {
                tally.record(SeedError::ProductLookup { name: product_name.to_string(), source });
                return;
            }
        }

        let stock = SampleStock::draw(&mut self.rng);
        let row = NewProduct {
            name: product_name.to_string(),
            description: format!("Sample {product_name} for {category_name}"),
            category_id,
            branch_id: plan.location,
            user_id: plan.owner,
            quantity_in_stock: stock.quantity_in_stock,
            minimum_stock_level: stock.minimum_stock_level,
            purchase_price: stock.purchase_price,
            sale_price: stock.sale_price,
            unit_price: stock.sale_price,
            status: ProductStatus::Active,
        };
        let product = match self.insert_row(Table::Products, &row).await {
            Ok(product) => product,
            Err(source) => {
                tally.record(SeedError::ProductInsert { name: product_name.to_string(), source });
                return;
            }
        };
        tally.products_created += 1;

        let movement = StockTransaction {
            product_id: record_id(&product),
            product_name: product_name.to_string(),
            transaction_type: TransactionType::Incoming,
            quantity: stock.quantity_in_stock,
            unit_price: stock.purchase_price,
            total_value: round2(stock.purchase_price * f64::from(stock.quantity_in_stock)),
            reference_number: AUTO_GENERATED_REFERENCE.to_string(),
            notes: Some(INITIAL_STOCK_NOTE.to_string()),
            user_id: plan.owner,
            created_by: plan.owner,
            branch_id: plan.location,
        };
        if let Err(source) = self.insert_row(Table::StockTransactions, &movement).await {
            tally.record(SeedError::StockMovement { name: product_name.to_string(), source });
        }
    }

    async fn create_custom(&self, owner: Uuid, names: &[String], tally: &mut Tally) {
        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            match self.ensure_category(owner, name, None).await {
                Ok(CategoryOutcome::Existing(_)) => {}
                Ok(CategoryOutcome::Created(_)) => tally.categories_created += 1,
                Err(err) => tally.record(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stock_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let s = SampleStock::draw(&mut rng);
            assert!((10..60).contains(&s.quantity_in_stock));
            assert!(s.purchase_price >= 5.0 && s.purchase_price <= 55.0);
            assert_eq!(s.minimum_stock_level, s.quantity_in_stock / 5);

            let ratio = s.sale_price / s.purchase_price;
            assert!(ratio >= 1.3 - 0.002 && ratio < 1.7 + 0.002, "ratio {ratio}");
            assert_eq!(s.purchase_price, round2(s.purchase_price));
            assert_eq!(s.sale_price, round2(s.sale_price));
        }
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(7.004), 7.0);
    }

    #[test]
    fn tally_success_is_lenient() {
        let mut tally = Tally::default();
        assert!(tally.finish().success);

        tally = Tally::default();
        tally.errors.push(SeedError::CategoryMissingId { name: "Tools".into() });
        let result = tally.finish();
        assert!(!result.success);
        assert_eq!(result.errors, ["Failed to create category Tools: No data returned"]);

        tally = Tally::default();
        tally.categories_created = 1;
        tally.errors.push(SeedError::CategoryMissingId { name: "Tools".into() });
        assert!(tally.finish().success);
    }

    #[test]
    fn plan_selection_filters_suggestions() {
        let mut plan = SeedPlan::new(Uuid::new_v4(), Uuid::new_v4(), IndustryKey::Hardware);
        assert_eq!(plan.suggestions().count(), 9);

        plan.selected = Some(vec!["Tools".into(), "Plumbing".into(), "Not A Category".into()]);
        let names: Vec<_> = plan.suggestions().map(|s| s.name).collect();
        assert_eq!(names, ["Tools", "Plumbing"]);
    }

    #[test]
    fn unrecognised_industry_has_no_suggestions() {
        let mut plan = SeedPlan::new(Uuid::new_v4(), Uuid::new_v4(), IndustryKey::Retail);
        plan.industry = None;
        assert_eq!(plan.suggestions().count(), 0);
    }
}
