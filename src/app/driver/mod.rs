pub mod model;

use anyhow::Context;
use hoyo_api::clients::{RedemptionCheck, RoleLookup};
use log::info;

use super::config::RedeemPolicy;
use model::ResultTable;

pub struct Driver<L, R> {
    roles: L,
    redeemer: R,
    regions: Vec<String>,
    policy: RedeemPolicy,
}

impl<L, R> Driver<L, R>
where
    L: RoleLookup,
    R: RedemptionCheck,
{
    pub fn new(roles: L, redeemer: R, regions: Vec<String>, policy: RedeemPolicy) -> Self {
        Self {
            roles,
            redeemer,
            regions,
            policy,
        }
    }

    /// 按区服顺序依次查询角色并兑换，任一请求失败即中止
    pub async fn run(&self, code: &str) -> anyhow::Result<ResultTable> {
        let mut table = ResultTable::default();

        'regions: for region in &self.regions {
            let accounts = self
                .roles
                .lookup_roles(region)
                .await
                .with_context(|| format!("failed to list game roles in region {region}"))?;
            if accounts.is_empty() {
                info!("no game roles in region {region}");
                continue;
            }

            for account in &accounts {
                if table.contains(region, account.account_id) {
                    continue;
                }
                info!(
                    "redeeming code for {} in region {region}",
                    account.account_id
                );
                let result = self
                    .redeemer
                    .check_redemption(account, code, region)
                    .await
                    .with_context(|| {
                        format!(
                            "failed to redeem code for {} in region {region}",
                            account.account_id
                        )
                    })?;
                info!("{} in region {region}: {result}", account.account_id);
                table.insert(region, account.account_id, result);

                if self.policy == RedeemPolicy::FirstResult {
                    break 'regions;
                }
            }
        }

        info!("redemption finished, {} result(s)", table.len());
        Ok(table)
    }
}
