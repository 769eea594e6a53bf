pub const CLIENT_USER_AGENT: &str = "Mozilla/5.0 (compatible; cdkey-redeem/0.1)";

/// 请求公共参数
pub mod params {
    pub const LANG: &str = "en";
    pub const LANG_KEY: &str = "en-us";
    pub const GAME_BIZ: &str = "hk4e_global";
}

pub mod account {
    pub const API_BASE_URL: &str = "https://api-account-os.hoyoverse.com/";
    pub mod api {
        pub const GAME_ROLES: &str = "account/binding/api/getUserGameRolesByCookieToken";
    }
}

pub mod cdkey {
    pub const API_BASE_URL: &str = "https://sg-hk4e-api.hoyoverse.com/";
    pub mod api {
        pub const WEB_EXCHANGE_CDKEY: &str = "common/apicdkey/api/webExchangeCdkey";
    }

    pub mod retcode {
        pub const SUCCESS: i32 = 0;
        pub const EXPIRED: i32 = -2001;
        pub const INVALID: i32 = -2003;
        pub const ALREADY_USED: i32 = -2017;
    }
}

pub mod region {
    pub const OS_USA: &str = "os_usa";
    pub const OS_EURO: &str = "os_euro";
    pub const OS_ASIA: &str = "os_asia";
    pub const OS_CHT: &str = "os_cht";

    /// 默认遍历顺序
    pub const DEFAULT_REGIONS: [&str; 4] = [OS_USA, OS_EURO, OS_ASIA, OS_CHT];
}

pub const DEFAULT_TIMEOUT_MILLIS: u64 = 2000;
