//! Immutable option positions.

use std::fmt;

use desk_models::analytical::{BlackScholes, OptionMetrics};
use desk_models::instruments::OptionContract;

use super::error::BookError;
use super::ids::PositionId;
use super::market::MarketView;

/// Side of a trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Long the option (pays the premium).
    Buy,
    /// Short the option (receives the premium).
    Sell,
}

impl Side {
    /// Position sign: +1 for buy, -1 for sell.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Market terms observed when the trade was booked.
///
/// The spot here is the level at execution, used as the reference for
/// the entry premium; it is not the live spot used for revaluation.
///
/// # Examples
/// ```
/// use desk_risk::book::EntryQuote;
///
/// let entry = EntryQuote::new(100.0, 0.2, 0.05, 10.45).unwrap();
/// assert_eq!(entry.premium(), 10.45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryQuote {
    spot: f64,
    volatility: f64,
    rate: f64,
    premium: f64,
}

impl EntryQuote {
    /// Creates entry terms with validation.
    ///
    /// # Errors
    /// - `BookError::InvalidEntrySpot` if `spot <= 0`
    /// - `BookError::InvalidEntryVolatility` if `volatility < 0`
    pub fn new(spot: f64, volatility: f64, rate: f64, premium: f64) -> Result<Self, BookError> {
        if spot <= 0.0 {
            return Err(BookError::InvalidEntrySpot { spot });
        }
        if volatility < 0.0 {
            return Err(BookError::InvalidEntryVolatility { volatility });
        }
        Ok(Self {
            spot,
            volatility,
            rate,
            premium,
        })
    }

    /// Spot observed at execution.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Volatility used at booking.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Risk-free rate used at booking.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Premium paid/received per contract.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }
}

/// One option trade, immutable once booked.
///
/// A position is a value snapshot: it owns its contract terms and entry
/// quote but no live market data. Revaluation happens on request with a
/// caller-supplied [`MarketView`]. The expiry is fixed at entry — there
/// is no wall-clock decay between refreshes (known simplification).
///
/// # Examples
/// ```
/// use desk_models::instruments::{OptionContract, PayoffType};
/// use desk_risk::book::{EntryQuote, Position, PositionId, Side};
///
/// let contract = OptionContract::new(PayoffType::Call, 100.0, 1.0).unwrap();
/// let entry = EntryQuote::new(100.0, 0.2, 0.05, 10.45).unwrap();
/// let position = Position::new(PositionId::new(0), contract, Side::Buy, 2, entry).unwrap();
///
/// // P&L at a live price of 11.0: (11.0 - 10.45) * 2
/// assert!((position.unrealized_pnl(11.0) - 1.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    id: PositionId,
    contract: OptionContract<f64>,
    side: Side,
    quantity: u32,
    entry: EntryQuote,
}

impl Position {
    /// Books a new position.
    ///
    /// # Errors
    /// - `BookError::InvalidQuantity` if `quantity == 0`
    ///
    /// Contract terms and entry quote are validated at their own
    /// construction; this constructor only rejects a zero quantity.
    pub fn new(
        id: PositionId,
        contract: OptionContract<f64>,
        side: Side,
        quantity: u32,
        entry: EntryQuote,
    ) -> Result<Self, BookError> {
        if quantity == 0 {
            return Err(BookError::InvalidQuantity {
                quantity: quantity as i64,
            });
        }
        Ok(Self {
            id,
            contract,
            side,
            quantity,
            entry,
        })
    }

    /// Returns the position identifier.
    #[inline]
    pub fn id(&self) -> PositionId {
        self.id
    }

    /// Returns the contract terms.
    #[inline]
    pub fn contract(&self) -> &OptionContract<f64> {
        &self.contract
    }

    /// Returns the trade side.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the number of contracts.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the entry quote.
    #[inline]
    pub fn entry(&self) -> &EntryQuote {
        &self.entry
    }

    /// Per-contract price and Greeks at the supplied live market.
    ///
    /// Delegates to the pricing model with this position's fixed strike,
    /// expiry, and payoff type plus the live spot/vol/rate. Unsigned and
    /// unscaled; callers apply side and quantity.
    pub fn metrics(&self, market: &MarketView) -> Result<OptionMetrics, BookError> {
        let model = BlackScholes::new(market.spot(), market.rate(), market.volatility())?;
        Ok(model.price_and_greeks(&self.contract))
    }

    /// Per-contract price and Greeks at the entry volatility and rate
    /// for an arbitrary spot. Used for spot-grid curves.
    pub fn metrics_at_spot(&self, spot: f64) -> Result<OptionMetrics, BookError> {
        let model = BlackScholes::new(spot, self.entry.rate(), self.entry.volatility())?;
        Ok(model.price_and_greeks(&self.contract))
    }

    /// Signed exposure: quantity with the side sign applied.
    #[inline]
    pub fn signed_quantity(&self) -> f64 {
        self.side.sign() * self.quantity as f64
    }

    /// Unrealized P&L at a live per-contract price.
    ///
    /// `(live_price - entry_premium) * quantity * sign(side)`.
    #[inline]
    pub fn unrealized_pnl(&self, live_price: f64) -> f64 {
        (live_price - self.entry.premium()) * self.signed_quantity()
    }

    /// Initial cash flow at execution: negative for a buy (premium
    /// paid), positive for a sell (premium received).
    #[inline]
    pub fn entry_cash_flow(&self) -> f64 {
        -self.signed_quantity() * self.entry.premium()
    }
}
