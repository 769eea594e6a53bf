use serde::Deserialize;

#[derive(Default, Clone, Debug)]
pub struct ResponseData<T>
where
    T: Clone,
{
    pub success: bool,
    pub data: Option<T>,
    pub internal_code: Option<i32>,
    pub internal_message: Option<String>,
}

pub trait ResponseWrapper<T>
where
    T: Clone,
{
    fn to_response_data(self) -> ResponseData<T>;
}

/// 以retcode标识结果的响应数据包装对象，形如
/// ```json
/// {
///     "retcode": 0,
///     "message": "OK",
///     "data": { "list": [] }
/// }
/// ```
/// `data` 可能为 `null` 或缺失
#[derive(Default, Deserialize, Clone, Debug)]
pub struct ResponseWrapperRetcode<T>
where
    T: Clone,
{
    pub retcode: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: NullableData<T>,
}

#[derive(Default, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum NullableData<T>
where
    T: Clone,
{
    Data(T),
    MaybeFalse(bool),
    #[default]
    Null,
}

impl<T> NullableData<T>
where
    T: Clone,
{
    pub fn into_option(self) -> Option<T> {
        match self {
            NullableData::Data(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> ResponseWrapper<T> for ResponseWrapperRetcode<T>
where
    T: Clone,
{
    fn to_response_data(self) -> ResponseData<T> {
        ResponseData {
            success: self.retcode == 0,
            data: self.data.into_option(),
            internal_code: Some(self.retcode),
            internal_message: self.message,
        }
    }
}
