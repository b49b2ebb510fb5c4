use anyhow::Context;

use mediashop_checkout::CheckoutConfig;

fn main() -> anyhow::Result<()> {
    mediashop_observability::init();

    let config = CheckoutConfig::from_env_and_args(std::env::args().skip(1))?;
    let outcome = mediashop_checkout::run(&config)?;

    let json = serde_json::to_string_pretty(&outcome).context("failed to render outcome")?;
    println!("{json}");
    Ok(())
}
