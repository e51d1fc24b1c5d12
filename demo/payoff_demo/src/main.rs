//! Payoff Demo CLI
//!
//! Builds a sample European call and put, then reports terminal payoffs,
//! Black-Scholes prices, and analytic Greeks. Illustrative only; the
//! library contract lives in `vanilla_models`.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vanilla_core::market_data::MarketSnapshot;
use vanilla_models::analytical::{black_scholes_greeks, black_scholes_price};
use vanilla_models::instruments::VanillaOption;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("payoff_demo=info".parse()?))
        .init();

    let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
    let call = VanillaOption::european_call(100.0, 1.0);
    let put = VanillaOption::european_put(100.0, 1.0);

    let terminal_spot = 120.0;
    tracing::info!(
        "Call payoff at S_T = {}: {:.4}",
        terminal_spot,
        call.payoff(terminal_spot)?
    );
    tracing::info!(
        "Put payoff at S_T = {}: {:.4}",
        terminal_spot,
        put.payoff(terminal_spot)?
    );

    let call_price = black_scholes_price(&market, &call)?;
    let put_price = black_scholes_price(&market, &put)?;
    tracing::info!("Call price: {:.4}", call_price);
    tracing::info!("Put price: {:.4}", put_price);

    let greeks = black_scholes_greeks(&market, &call)?;
    tracing::info!(
        "Call Greeks: delta {:.4}, gamma {:.4}, vega {:.4}, theta {:.4}, rho {:.4}",
        greeks.delta,
        greeks.gamma,
        greeks.vega,
        greeks.theta,
        greeks.rho
    );

    Ok(())
}
