use async_trait::async_trait;
use reqwest::Url;

use crate::{
    consts::cdkey::api,
    models::{
        api_account::AccountRef,
        api_cdkey::{ExchangeCdkeyResponse, RedemptionResult},
    },
};

use super::{
    common::{try_response_json, ApiResult, RequestParams},
    session::Session,
    RedemptionCheck,
};

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    params: RequestParams,
    session: Session,
}

impl Client {
    pub fn new(base_url: &str, session: Session, params: RequestParams) -> ApiResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            params,
            session,
        })
    }

    /// 兑换请求会被服务端记录，同一兑换码重复兑换将得到 [`RedemptionResult::AlreadyUsed`]
    pub async fn exchange_cdkey(
        &self,
        account: &AccountRef,
        code: &str,
        region: &str,
    ) -> ApiResult<RedemptionResult> {
        let uid = account.account_id.to_string();
        let resp = self
            .session
            .get(self.base_url.join(api::WEB_EXCHANGE_CDKEY)?)?
            .query(&[
                ("uid", uid.as_str()),
                ("region", region),
                ("lang", self.params.lang.as_str()),
                ("cdkey", code),
                ("game_biz", account.game_business_id.as_str()),
                ("sLangKey", self.params.lang_key.as_str()),
            ])
            .send()
            .await?;

        let json: ExchangeCdkeyResponse = try_response_json(resp).await?;
        log::debug!(
            "exchange cdkey for {uid} in {region}: retcode {} ({})",
            json.retcode,
            json.message.as_deref().unwrap_or("")
        );

        Ok(json.result())
    }
}

#[async_trait]
impl RedemptionCheck for Client {
    async fn check_redemption(
        &self,
        account: &AccountRef,
        code: &str,
        region: &str,
    ) -> ApiResult<RedemptionResult> {
        self.exchange_cdkey(account, code, region).await
    }
}
