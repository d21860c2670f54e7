use std::fmt;

use serde::Deserialize;

pub type ItemKey = u64;

/// A row in a server-backed listing.
///
/// The controller only relies on a stable key; everything else is for display.
pub trait ListingItem: Clone + fmt::Debug + PartialEq {
    fn key(&self) -> ItemKey;
}

/// One match from the stock search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockInfo {
    pub id: ItemKey,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub mic_code: String,
}

impl ListingItem for StockInfo {
    fn key(&self) -> ItemKey {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeKind {
    Buy,
    Sell,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeKind::Buy => write!(f, "BUY"),
            TradeKind::Sell => write!(f, "SELL"),
        }
    }
}

/// One position in the user's portfolio.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: ItemKey,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub quantity: u32,
    pub purchase_price: f64,
    pub total_gain_or_loss: f64,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    #[serde(default)]
    pub duration: String,
}

impl Holding {
    /// Market value of the position at the current price.
    pub fn cash_value(&self) -> f64 {
        f64::from(self.quantity) * self.current_price
    }
}

impl ListingItem for Holding {
    fn key(&self) -> ItemKey {
        self.id
    }
}

/// Portfolio-wide totals shown above the holdings listing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_value: f64,
    pub total_gain_or_loss: f64,
}
