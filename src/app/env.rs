use std::sync::OnceLock;

pub fn cookie() -> Option<&'static str> {
    static COOKIE: OnceLock<Option<String>> = OnceLock::new();
    COOKIE
        .get_or_init(|| {
            first_non_blank(
                [consts::COOKIE, consts::COOKIE_FALLBACK].map(|key| std::env::var(key).ok()),
            )
        })
        .as_ref()
        .map(|x| x.as_str())
}

fn first_non_blank(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|x| !x.trim().is_empty())
}

pub fn override_account_api() -> Option<&'static str> {
    static OVERRIDE_ACCOUNT_API: OnceLock<Option<String>> = OnceLock::new();
    OVERRIDE_ACCOUNT_API
        .get_or_init(|| std::env::var(consts::OVERRIDE_ACCOUNT_API).ok())
        .as_ref()
        .map(|x| x.as_str())
}

pub fn override_cdkey_api() -> Option<&'static str> {
    static OVERRIDE_CDKEY_API: OnceLock<Option<String>> = OnceLock::new();
    OVERRIDE_CDKEY_API
        .get_or_init(|| std::env::var(consts::OVERRIDE_CDKEY_API).ok())
        .as_ref()
        .map(|x| x.as_str())
}

pub fn regions() -> Option<&'static str> {
    static REGIONS: OnceLock<Option<String>> = OnceLock::new();
    REGIONS
        .get_or_init(|| std::env::var(consts::REGIONS).ok())
        .as_ref()
        .map(|x| x.as_str())
}

pub mod consts {
    pub const COOKIE: &str = "CDKEY_REDEEM_COOKIE";
    pub const COOKIE_FALLBACK: &str = "AUTH_COOKIE";
    pub const OVERRIDE_ACCOUNT_API: &str = "CDKEY_REDEEM_ACCOUNT_API";
    pub const OVERRIDE_CDKEY_API: &str = "CDKEY_REDEEM_CDKEY_API";
    pub const REGIONS: &str = "CDKEY_REDEEM_REGIONS";
}
