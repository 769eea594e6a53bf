use std::{fmt, str::FromStr, time::Duration};

use hoyo_api::{clients::common::RequestParams, consts};
use thiserror::Error;

use super::{env, program_options::LaunchArgs};

/// 兑换策略
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedeemPolicy {
    /// 兑换第一个非空区服的第一个角色后立即返回
    FirstResult,
    /// 遍历全部区服与角色
    #[default]
    Exhaustive,
}

impl FromStr for RedeemPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::FirstResult),
            "all" | "exhaustive" => Ok(Self::Exhaustive),
            other => Err(format!("unknown policy `{other}`, expected `first` or `all`")),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("未提供Cookie，请使用 --cookie 或设置环境变量 {}", env::consts::COOKIE)]
    MissingCookie,
    #[error("区服列表为空")]
    EmptyRegions,
    #[error("超时时间必须大于0")]
    ZeroTimeout,
}

/// 从环境变量读取的配置项
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub cookie: Option<String>,
    pub account_api_url: Option<String>,
    pub cdkey_api_url: Option<String>,
    pub regions: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            cookie: env::cookie().map(String::from),
            account_api_url: env::override_account_api().map(String::from),
            cdkey_api_url: env::override_cdkey_api().map(String::from),
            regions: env::regions().map(String::from),
        }
    }
}

#[derive(Clone)]
pub struct RedeemConfig {
    pub account_api_url: String,
    pub cdkey_api_url: String,
    pub regions: Vec<String>,
    pub timeout: Duration,
    pub cookie: String,
    pub policy: RedeemPolicy,
    pub params: RequestParams,
}

impl fmt::Debug for RedeemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedeemConfig")
            .field("account_api_url", &self.account_api_url)
            .field("cdkey_api_url", &self.cdkey_api_url)
            .field("regions", &self.regions)
            .field("timeout", &self.timeout)
            .field("cookie", &"<redacted>")
            .field("policy", &self.policy)
            .field("params", &self.params)
            .finish()
    }
}

impl RedeemConfig {
    /// 启动参数优先于环境变量，均未提供时使用默认值
    pub fn resolve(args: &LaunchArgs, env: &EnvOverrides) -> Result<Self, ConfigError> {
        let cookie = [args.cookie.as_deref(), env.cookie.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|x| !x.is_empty())
            .ok_or(ConfigError::MissingCookie)?
            .to_string();

        let regions: Vec<String> = if !args.region.is_empty() {
            args.region.clone()
        } else if let Some(regions) = &env.regions {
            regions
                .split(',')
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .map(String::from)
                .collect()
        } else {
            consts::region::DEFAULT_REGIONS
                .iter()
                .map(|x| x.to_string())
                .collect()
        };
        if regions.is_empty() {
            return Err(ConfigError::EmptyRegions);
        }

        let timeout_ms = args.timeout_ms.unwrap_or(consts::DEFAULT_TIMEOUT_MILLIS);
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let mut params = RequestParams::default();
        if let Some(game_biz) = &args.game_biz {
            params.game_biz = game_biz.clone();
        }

        Ok(Self {
            account_api_url: env
                .account_api_url
                .clone()
                .unwrap_or_else(|| consts::account::API_BASE_URL.into()),
            cdkey_api_url: env
                .cdkey_api_url
                .clone()
                .unwrap_or_else(|| consts::cdkey::API_BASE_URL.into()),
            regions,
            timeout: Duration::from_millis(timeout_ms),
            cookie,
            policy: args.policy.unwrap_or_default(),
            params,
        })
    }
}
