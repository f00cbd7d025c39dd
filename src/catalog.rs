//! Product catalog and the currency exchange map derived from it.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::{Currency, CurrencyRole, Product, ProductId};

/// Products listed by the exchange, indexed for pair lookups.
///
/// The exchange map records, for every currency, the currencies it can be
/// traded against and the role the key currency plays in that product.
/// Listing `BTC-USD` yields `BTC -> {USD: Base}` and `USD -> {BTC: Quote}`.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
    exchange: BTreeMap<Currency, BTreeMap<Currency, CurrencyRole>>,
}

impl ProductCatalog {
    /// Build the catalog from the exchange's product list.
    ///
    /// A product id listed twice keeps its last definition.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            catalog.insert(product);
        }
        debug!(
            products = catalog.products.len(),
            currencies = catalog.exchange.len(),
            "product catalog built"
        );
        catalog
    }

    fn insert(&mut self, product: Product) {
        let base = product.base_currency.clone();
        let quote = product.quote_currency.clone();

        self.exchange
            .entry(base.clone())
            .or_default()
            .insert(quote.clone(), CurrencyRole::Base);
        self.exchange
            .entry(quote)
            .or_default()
            .insert(base, CurrencyRole::Quote);

        if let Some(previous) = self.products.insert(product.id.clone(), product) {
            warn!(product = %previous.id, "duplicate product in catalog, keeping the last");
        }
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog lists no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, ordered by id.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// All currencies appearing in any product, sorted.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.exchange.keys()
    }

    /// Currencies tradeable against `currency`, sorted. Empty if unknown.
    #[must_use]
    pub fn counter_currencies(&self, currency: &Currency) -> Vec<Currency> {
        self.exchange
            .get(currency)
            .map(|counters| counters.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Role `currency` plays in the product it shares with `counter`.
    #[must_use]
    pub fn role_against(&self, currency: &Currency, counter: &Currency) -> Option<CurrencyRole> {
        self.exchange.get(currency)?.get(counter).copied()
    }

    /// Name of the product trading `a` against `b`, in either order.
    ///
    /// `A-B` is preferred when both orientations are listed.
    #[must_use]
    pub fn product_name(&self, a: &Currency, b: &Currency) -> Option<ProductId> {
        let forward = ProductId::from_pair(a, b);
        if self.products.contains_key(&forward) {
            return Some(forward);
        }
        let reverse = ProductId::from_pair(b, a);
        self.products.contains_key(&reverse).then_some(reverse)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Role of the output leg when converting from `from` through `product`.
    ///
    /// Spending the product's base currency produces a quote-currency
    /// figure, so the output role is `Quote`; spending the quote currency
    /// produces `Base`. Returns `None` for unknown products or currencies.
    #[must_use]
    pub fn output_role(&self, product: &ProductId, from: &Currency) -> Option<CurrencyRole> {
        match self.product(product)?.role_of(from)? {
            CurrencyRole::Base => Some(CurrencyRole::Quote),
            CurrencyRole::Quote => Some(CurrencyRole::Base),
        }
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter)
    }
}
