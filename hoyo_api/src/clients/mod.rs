pub mod account;
pub mod cdkey;
pub mod common;
pub mod session;

#[cfg(test)]
pub(crate) mod test_server;

use async_trait::async_trait;

use crate::models::{api_account::AccountRef, api_cdkey::RedemptionResult};
use common::ApiResult;

/// 按区服查询当前登录用户的游戏账号
#[async_trait]
pub trait RoleLookup: Send + Sync {
    async fn lookup_roles(&self, region: &str) -> ApiResult<Vec<AccountRef>>;
}

/// 为指定游戏账号兑换兑换码
#[async_trait]
pub trait RedemptionCheck: Send + Sync {
    async fn check_redemption(
        &self,
        account: &AccountRef,
        code: &str,
        region: &str,
    ) -> ApiResult<RedemptionResult>;
}
