use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::cdkey::retcode;

/// 兑换码兑换结果
///
/// 只能由接口返回的 retcode 经 [`RedemptionResult::from_retcode`] 得到，
/// 未列出的 retcode 一律视为 [`RedemptionResult::Unknown`]
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedemptionResult {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "invalid")]
    Invalid,
    #[serde(rename = "already in use")]
    AlreadyUsed,
    #[serde(rename = "unknown")]
    Unknown,
}

impl RedemptionResult {
    pub fn from_retcode(code: i32) -> Self {
        match code {
            retcode::SUCCESS => Self::Success,
            retcode::EXPIRED => Self::Expired,
            retcode::INVALID => Self::Invalid,
            retcode::ALREADY_USED => Self::AlreadyUsed,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Expired => "expired",
            Self::Invalid => "invalid",
            Self::AlreadyUsed => "already in use",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RedemptionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Default, Deserialize, Clone, Debug)]
pub struct ExchangeCdkeyResponse {
    pub retcode: i32,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExchangeCdkeyResponse {
    pub fn result(&self) -> RedemptionResult {
        RedemptionResult::from_retcode(self.retcode)
    }
}
