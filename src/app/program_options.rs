use argh::FromArgs;

use super::config::RedeemPolicy;

#[derive(FromArgs, Debug, Default)]
/// 为账号下各区服的游戏角色兑换兑换码
pub struct LaunchArgs {
    #[argh(positional)]
    /// 兑换码
    pub code: String,

    #[argh(option)]
    /// 登录Cookie（需含 account_id_v2 与 cookie_token_v2），等同于设置环境变量
    /// CDKEY_REDEEM_COOKIE=<cookie>
    pub cookie: Option<String>,

    #[argh(option)]
    /// 依次查询的区服，可重复指定，等同于设置环境变量
    /// CDKEY_REDEEM_REGIONS='os_usa,os_euro'
    pub region: Vec<String>,

    #[argh(option)]
    /// 兑换策略：first（仅兑换首个角色）或 all（兑换全部角色，默认）
    pub policy: Option<RedeemPolicy>,

    #[argh(option)]
    /// 单次请求超时（毫秒），默认 2000
    pub timeout_ms: Option<u64>,

    #[argh(option)]
    /// 查询角色时使用的 game_biz，默认 hk4e_global
    pub game_biz: Option<String>,

    #[argh(switch)]
    /// 以JSON格式输出结果
    pub json: Option<bool>,
}
