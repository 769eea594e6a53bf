pub mod config;
pub mod driver;
pub mod env;
pub mod program_options;
pub mod report;

use std::time::Duration;

use hoyo_api::clients::{account, cdkey, session::Session};
use log::debug;

use config::RedeemConfig;
use driver::{model::ResultTable, Driver};

fn create_session(config: &RedeemConfig) -> anyhow::Result<Session> {
    let client = Session::default_client_builder()
        .use_rustls_tls()
        .gzip(true)
        .brotli(true)
        .connect_timeout(config.timeout.min(Duration::from_secs(8)))
        .timeout(config.timeout)
        .build()?;

    Ok(Session::new(client, Some(config.cookie.clone())))
}

pub async fn run(config: &RedeemConfig, code: &str) -> anyhow::Result<ResultTable> {
    debug!("{config:?}");
    let session = create_session(config)?;
    let driver = Driver::new(
        account::Client::new(
            &config.account_api_url,
            session.clone(),
            config.params.clone(),
        )?,
        cdkey::Client::new(&config.cdkey_api_url, session, config.params.clone())?,
        config.regions.clone(),
        config.policy,
    );

    driver.run(code).await
}
