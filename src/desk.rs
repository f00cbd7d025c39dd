//! Quote desk: resolves a currency pair against the catalog, prices the
//! request on a caller-supplied book and validates the result.
//!
//! Fetching books is the caller's concern; the desk only needs the snapshot
//! for the product named by [`QuoteDesk::plan`].

use thiserror::Error;
use tracing::{debug, info};

use crate::amount::{parse_amount, AmountError};
use crate::catalog::ProductCatalog;
use crate::config::QuoteSettings;
use crate::domain::{
    Action, Currency, CurrencyRole, DomainError, OrderBook, ProductId, ProductLimits, Quote,
    TradeSide, ValidationResult, Volume, MAX_PLACES,
};
use crate::engine::{generate_quote, validate, EngineError};

/// Reasons a desk-level quote could not be produced or was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("currency exchange product {from}-{to} does not exist")]
    UnknownPair { from: Currency, to: Currency },

    #[error("product {0} is not listed")]
    UnknownProduct(ProductId),

    #[error("product {product} has invalid limits: {source}")]
    InvalidProduct {
        product: ProductId,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("{places} decimal places requested, at most {max} supported", max = MAX_PLACES)]
    InvalidPlaces { places: u32 },

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The validator refused the order; the message is user-facing.
    #[error("{0}")]
    Rejected(ValidationResult),
}

/// A request to convert `amount` of `from` into `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub from: Currency,
    pub to: Currency,
    pub action: Action,
    /// Amount in the `from` currency.
    pub amount: Volume,
    /// Overrides the product's precision when set.
    pub places: Option<u32>,
}

impl QuoteRequest {
    /// Build a request from user-entered amount text.
    pub fn parse(
        from: Currency,
        to: Currency,
        action: Action,
        amount: &str,
    ) -> Result<Self, QuoteError> {
        Ok(Self {
            from,
            to,
            action,
            amount: parse_amount(amount)?,
            places: None,
        })
    }

    #[must_use]
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = Some(places);
        self
    }
}

/// How a currency pair maps onto a listed product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePlan {
    pub product: ProductId,
    /// Leg the quote is denominated in.
    pub role: CurrencyRole,
    pub limits: ProductLimits,
    /// Decimal places the quote is rounded to.
    pub places: u32,
}

impl QuotePlan {
    /// Side of the book walked for `action`.
    #[must_use]
    pub const fn side(&self, action: Action) -> TradeSide {
        TradeSide::for_trade(action, self.role)
    }
}

/// Everything the desk worked out for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub plan: QuotePlan,
    pub quote: Quote,
    pub validation: ValidationResult,
}

/// Prices and validates requests against a product catalog.
#[derive(Debug, Clone)]
pub struct QuoteDesk {
    catalog: ProductCatalog,
    settings: QuoteSettings,
}

impl QuoteDesk {
    #[must_use]
    pub const fn new(catalog: ProductCatalog, settings: QuoteSettings) -> Self {
        Self { catalog, settings }
    }

    #[must_use]
    pub const fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Resolve the product, output role, limits and precision for a pair.
    pub fn plan(&self, from: &Currency, to: &Currency) -> Result<QuotePlan, QuoteError> {
        let unknown_pair = || QuoteError::UnknownPair {
            from: from.clone(),
            to: to.clone(),
        };
        let id = self.catalog.product_name(from, to).ok_or_else(unknown_pair)?;
        let product = self
            .catalog
            .product(&id)
            .ok_or_else(|| QuoteError::UnknownProduct(id.clone()))?;
        let role = self
            .catalog
            .output_role(&id, from)
            .ok_or_else(unknown_pair)?;
        let limits = product
            .limits()
            .map_err(|source| QuoteError::InvalidProduct {
                product: id.clone(),
                source,
            })?;
        let places = product.quote_places(
            role,
            self.settings.default_places,
            self.settings.fallback_places,
        );

        debug!(product = %id, %role, places, "quote planned");
        Ok(QuotePlan {
            product: id,
            role,
            limits,
            places,
        })
    }

    /// Price and validate `request` without treating a rejection as an error.
    pub fn assess(&self, request: &QuoteRequest, book: &OrderBook) -> Result<Assessment, QuoteError> {
        let mut plan = self.plan(&request.from, &request.to)?;
        if let Some(places) = request.places {
            if places > MAX_PLACES {
                return Err(QuoteError::InvalidPlaces { places });
            }
            plan.places = places;
        }

        let quote = generate_quote(book, plan.role, request.action, request.amount, plan.places)?;
        let validation = validate(&quote, plan.role, &plan.limits, request.amount);

        info!(
            product = %plan.product,
            action = %request.action,
            amount = %request.amount,
            fillable = quote.fillable,
            price = %quote.quote_price,
            total = %quote.total,
            valid = validation.is_valid,
            "quote assessed"
        );
        Ok(Assessment {
            plan,
            quote,
            validation,
        })
    }

    /// Price and validate `request`, returning the quote only when accepted.
    pub fn quote(&self, request: &QuoteRequest, book: &OrderBook) -> Result<Quote, QuoteError> {
        let assessment = self.assess(request, book)?;
        if assessment.validation.is_valid {
            Ok(assessment.quote)
        } else {
            Err(QuoteError::Rejected(assessment.validation))
        }
    }
}
