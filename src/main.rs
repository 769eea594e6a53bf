mod app;

use anyhow::Context;
use app::config::{EnvOverrides, RedeemConfig};
use app::program_options::LaunchArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let launch_args: LaunchArgs = argh::from_env();
    let config = RedeemConfig::resolve(&launch_args, &EnvOverrides::from_env())?;

    let table = app::run(&config, &launch_args.code)
        .await
        .context("cdkey redemption aborted")?;

    println!(
        "{}",
        app::report::render(&table, config.policy, launch_args.json.unwrap_or(false))?
    );
    Ok(())
}
