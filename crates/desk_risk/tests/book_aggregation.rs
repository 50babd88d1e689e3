//! End-to-end book aggregation tests, including property-based
//! additivity over arbitrary books.

use approx::assert_relative_eq;
use desk_models::instruments::{OptionContract, PayoffType};
use desk_risk::book::{
    EntryQuote, MarketView, Portfolio, Position, PositionIdSource, Side,
};
use proptest::prelude::*;

fn build_position(
    ids: &mut PositionIdSource,
    payoff: PayoffType,
    side: Side,
    strike: f64,
    expiry: f64,
    qty: u32,
    premium: f64,
) -> Position {
    let contract = OptionContract::new(payoff, strike, expiry).unwrap();
    let entry = EntryQuote::new(100.0, 0.2, 0.05, premium).unwrap();
    Position::new(ids.next_id(), contract, side, qty, entry).unwrap()
}

#[test]
fn straddle_book_snapshot() {
    let mut ids = PositionIdSource::new();
    let mut book = Portfolio::new();
    book.add(build_position(
        &mut ids,
        PayoffType::Call,
        Side::Buy,
        100.0,
        1.0,
        1,
        10.45,
    ))
    .unwrap();
    book.add(build_position(
        &mut ids,
        PayoffType::Put,
        Side::Buy,
        100.0,
        1.0,
        1,
        5.57,
    ))
    .unwrap();

    let market = MarketView::new(100.0, 0.2, 0.05).unwrap();
    let snapshot = book.aggregate(&market).unwrap();

    assert_eq!(snapshot.rows.len(), 2);
    // Long straddle: put delta offsets most of the call delta
    assert_relative_eq!(
        snapshot.totals.delta,
        snapshot.rows[0].greeks.delta + snapshot.rows[1].greeks.delta,
        epsilon = 1e-12
    );
    assert!(snapshot.totals.delta.abs() < 0.5);
    // Both legs are long, so gamma and vega stack up
    assert!(snapshot.totals.gamma > snapshot.rows[0].greeks.gamma);
    assert!(snapshot.totals.vega > snapshot.rows[0].greeks.vega);
}

#[test]
fn reference_scenario_through_the_book() {
    // S=100, K=100, T=1, r=0.05, σ=0.2, CALL, BUY, qty=1, premium=10.45
    let mut ids = PositionIdSource::new();
    let mut book = Portfolio::new();
    book.add(build_position(
        &mut ids,
        PayoffType::Call,
        Side::Buy,
        100.0,
        1.0,
        1,
        10.45,
    ))
    .unwrap();

    let market = MarketView::new(100.0, 0.2, 0.05).unwrap();
    let snapshot = book.aggregate(&market).unwrap();

    assert_eq!(snapshot.rows.len(), 1);
    assert_relative_eq!(snapshot.rows[0].price, 10.4506, epsilon = 1e-3);
    assert_relative_eq!(snapshot.rows[0].greeks.delta, 0.6368, epsilon = 1e-3);
    assert_relative_eq!(snapshot.totals.pnl, 0.0006, epsilon = 1e-3);
}

#[test]
fn degenerate_positions_aggregate_without_nan() {
    let mut ids = PositionIdSource::new();
    let mut book = Portfolio::new();
    // Expired contract and zero-vol market leg both hit the intrinsic
    // boundary of the model
    book.add(build_position(
        &mut ids,
        PayoffType::Call,
        Side::Buy,
        90.0,
        0.0,
        2,
        10.0,
    ))
    .unwrap();
    book.add(build_position(
        &mut ids,
        PayoffType::Put,
        Side::Sell,
        110.0,
        1.0,
        1,
        9.0,
    ))
    .unwrap();

    let market = MarketView::new(100.0, 0.0, 0.05).unwrap();
    let snapshot = book.aggregate(&market).unwrap();

    assert!(snapshot.totals.pnl.is_finite());
    // Expired ITM call is worth intrinsic 10, zero-vol put intrinsic 10
    assert_relative_eq!(snapshot.rows[0].price, 10.0, epsilon = 1e-12);
    assert_relative_eq!(snapshot.rows[1].price, 10.0, epsilon = 1e-12);
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn arb_payoff() -> impl Strategy<Value = PayoffType> {
    prop_oneof![Just(PayoffType::Call), Just(PayoffType::Put)]
}

prop_compose! {
    fn arb_trade()(
        payoff in arb_payoff(),
        side in arb_side(),
        strike in 50.0..150.0_f64,
        expiry in 0.05..3.0_f64,
        qty in 1u32..20,
        premium in 0.0..30.0_f64,
    ) -> (PayoffType, Side, f64, f64, u32, f64) {
        (payoff, side, strike, expiry, qty, premium)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn totals_equal_row_sums_for_any_book(
        trades in prop::collection::vec(arb_trade(), 0..12),
        spot in 50.0..150.0_f64,
        vol in 0.05..0.8_f64,
        rate in -0.02..0.1_f64,
    ) {
        let mut ids = PositionIdSource::new();
        let mut book = Portfolio::new();
        for (payoff, side, strike, expiry, qty, premium) in trades {
            book.add(build_position(&mut ids, payoff, side, strike, expiry, qty, premium))
                .unwrap();
        }

        let market = MarketView::new(spot, vol, rate).unwrap();
        let snapshot = book.aggregate(&market).unwrap();

        prop_assert_eq!(snapshot.rows.len(), book.len());

        let sums = snapshot.rows.iter().fold([0.0_f64; 6], |mut acc, row| {
            acc[0] += row.pnl;
            acc[1] += row.greeks.delta;
            acc[2] += row.greeks.gamma;
            acc[3] += row.greeks.vega;
            acc[4] += row.greeks.theta;
            acc[5] += row.greeks.rho;
            acc
        });
        prop_assert!((snapshot.totals.pnl - sums[0]).abs() < 1e-8);
        prop_assert!((snapshot.totals.delta - sums[1]).abs() < 1e-8);
        prop_assert!((snapshot.totals.gamma - sums[2]).abs() < 1e-8);
        prop_assert!((snapshot.totals.vega - sums[3]).abs() < 1e-8);
        prop_assert!((snapshot.totals.theta - sums[4]).abs() < 1e-8);
        prop_assert!((snapshot.totals.rho - sums[5]).abs() < 1e-8);
    }

    #[test]
    fn flatten_always_yields_zero_snapshot(
        trades in prop::collection::vec(arb_trade(), 0..8),
    ) {
        let mut ids = PositionIdSource::new();
        let mut book = Portfolio::new();
        for (payoff, side, strike, expiry, qty, premium) in trades {
            book.add(build_position(&mut ids, payoff, side, strike, expiry, qty, premium))
                .unwrap();
        }

        book.flatten();
        book.flatten(); // idempotent

        let market = MarketView::new(100.0, 0.2, 0.05).unwrap();
        let snapshot = book.aggregate(&market).unwrap();
        prop_assert!(snapshot.rows.is_empty());
        prop_assert_eq!(snapshot.totals.pnl, 0.0);
        prop_assert_eq!(snapshot.totals.delta, 0.0);
    }
}
