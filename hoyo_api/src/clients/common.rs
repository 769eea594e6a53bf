use crate::models::common::{ResponseData, ResponseWrapper};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json;
use std::fmt::Debug;
use thiserror::Error;

pub type ApiResult<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum UnauthorizedError {
    #[error("未提供Cookie")]
    MissingCookie,
}

#[derive(Error, Debug)]
#[error("请求错误\n- 状态码: {status_code}{}{}{}{}{}",
    .internal_status_code.as_ref().map_or("".into(), |x| format!("\n- 内部代码: {x}")),
    .internal_message.as_ref().map_or("".into(), |x| format!("\n- 信息: {x}")),
    .raw_data.as_ref().map_or("".into(), |x| format!("\n- 原始数据:\n{x}")),
    .raw_response.as_ref().map_or("".into(), |x| format!("\n- 原始数据:\n{x:?}")),
    .source_error.as_ref().map_or("".into(), |x| format!("\n- 错误源\n{:?}", *x))
    )]
pub struct ResponseError<TRes>
where
    TRes: Debug,
{
    pub status_code: u16,
    pub raw_data: Option<String>,
    pub raw_response: Option<TRes>,
    pub internal_status_code: Option<i32>,
    pub internal_message: Option<String>,
    pub source_error: Option<anyhow::Error>,
}

pub async fn try_response_json<T>(response: reqwest::Response) -> anyhow::Result<T>
where
    T: 'static + Send + Sync + Debug + for<'de> Deserialize<'de>,
{
    let status_code = response.status();
    let json_str = response.text().await?;
    match serde_json::de::from_str::<T>(&json_str) {
        Ok(data) => Ok(data),
        Err(serde_err) => Err(ResponseError::<T> {
            status_code: status_code.as_u16(),
            internal_status_code: None,
            internal_message: None,
            raw_response: None,
            raw_data: Some(json_str),
            source_error: Some(serde_err.into()),
        }
        .into()),
    }
}

/// 读取响应数据；`data` 为空时返回 `None` 而非错误，非零retcode记录警告
pub fn try_response_data_or_empty<T>(
    status_code: StatusCode,
    resp: impl ResponseWrapper<T>,
) -> Result<Option<T>, ResponseError<ResponseData<T>>>
where
    T: Clone + Debug,
{
    let data = resp.to_response_data();
    match data {
        ResponseData {
            data: Some(data), ..
        } => Ok(Some(data)),
        ResponseData {
            internal_code,
            internal_message,
            ..
        } if !status_code.is_success() => Err(ResponseError {
            status_code: status_code.as_u16(),
            internal_status_code: internal_code,
            internal_message,
            raw_response: None,
            raw_data: None,
            source_error: None,
        }),
        ResponseData {
            success: false,
            internal_code,
            internal_message,
            ..
        } => {
            log::warn!(
                "remote returned retcode {} without data: {}",
                internal_code.unwrap_or_default(),
                internal_message.as_deref().unwrap_or("")
            );
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// 各接口共用的语言与游戏业务参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub lang: String,
    pub lang_key: String,
    pub game_biz: String,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            lang: crate::consts::params::LANG.into(),
            lang_key: crate::consts::params::LANG_KEY.into(),
            game_biz: crate::consts::params::GAME_BIZ.into(),
        }
    }
}

pub fn headers() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static(crate::consts::CLIENT_USER_AGENT),
    );
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}

pub fn client_builder() -> reqwest::ClientBuilder {
    reqwest::ClientBuilder::new().default_headers(headers())
}
