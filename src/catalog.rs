//! Price catalog and holdings state.
//!
//! The catalog maps symbols to unit prices and preserves insertion order so
//! that summaries and exports list symbols in the order they were first seen
//! (seed set first, user registrations after). Holdings track the accumulated
//! quantity per symbol. A `Session` owns both and is passed explicitly to the
//! input loop, summary engine, and exporter.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::TallyError;

/// Symbols every session starts with, and their unit prices.
const SEED_CATALOG: &[(&str, i64)] = &[
    ("AAPL", 180),
    ("TSLA", 250),
    ("MSFT", 310),
    ("GOOGL", 140),
    ("AMZN", 135),
];

/// Normalize raw user input into a symbol: trim whitespace, strip surrounding
/// quotes, uppercase.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_uppercase()
}

/// Symbol → unit price, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    order: Vec<String>,
    prices: HashMap<String, Decimal>,
}

impl PriceCatalog {
    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }

    pub fn price(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(symbol).copied()
    }

    /// Insert or overwrite a price. A symbol keeps its original position in
    /// the ordering when its price is overwritten.
    pub fn insert(&mut self, symbol: String, price: Decimal) {
        if self.prices.insert(symbol.clone(), price).is_none() {
            self.order.push(symbol);
        }
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Symbol → accumulated quantity. Entries are created at zero and only ever
/// incremented.
#[derive(Debug, Clone, Default)]
pub struct Holdings {
    quantities: HashMap<String, u64>,
}

impl Holdings {
    pub fn quantity(&self, symbol: &str) -> u64 {
        self.quantities.get(symbol).copied().unwrap_or(0)
    }

    /// Make sure a zero entry exists without touching an existing quantity.
    pub fn ensure(&mut self, symbol: &str) {
        self.quantities.entry(symbol.to_string()).or_insert(0);
    }

    fn add(&mut self, symbol: &str, quantity: u64) {
        *self.quantities.entry(symbol.to_string()).or_insert(0) += quantity;
    }
}

/// Per-run state: one catalog, one set of holdings. Nothing survives past
/// process exit except optionally-exported report files.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub catalog: PriceCatalog,
    pub holdings: Holdings,
}

impl Session {
    /// Empty session with no catalog entries. Used by tests that build their
    /// own catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with the seed catalog and zero holdings for every
    /// seed symbol.
    pub fn with_seed_catalog() -> Self {
        let mut session = Self::new();
        for (symbol, price) in SEED_CATALOG {
            session.register(symbol.to_string(), Decimal::from(*price));
        }
        session
    }

    /// Register a symbol with a price and make sure a holdings entry exists.
    /// Registering an already-known symbol overwrites its price but leaves
    /// its quantity and ordering position alone.
    pub fn register(&mut self, symbol: String, price: Decimal) {
        self.holdings.ensure(&symbol);
        self.catalog.insert(symbol, price);
    }

    /// Add quantity to an existing symbol. The symbol must already be in the
    /// catalog; positive holdings without a price would make the summary
    /// unrepresentable.
    pub fn add_quantity(&mut self, symbol: &str, quantity: u64) -> Result<(), TallyError> {
        if !self.catalog.contains(symbol) {
            return Err(TallyError::ValidationError(format!(
                "cannot hold {}: not in the price catalog",
                symbol
            )));
        }
        self.holdings.add(symbol, quantity);
        Ok(())
    }
}
