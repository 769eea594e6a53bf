use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// 游戏账号引用，仅包含兑换所需字段
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountRef {
    pub account_id: u64,
    pub game_business_id: String,
}

#[serde_as]
#[derive(Default, Deserialize, Serialize, Clone, Debug)]
pub struct GameRole {
    /// 线上接口返回字符串，旧接口为数字
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub game_uid: u64,
    pub game_biz: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub is_chosen: bool,
}

impl From<&GameRole> for AccountRef {
    fn from(role: &GameRole) -> Self {
        Self {
            account_id: role.game_uid,
            game_business_id: role.game_biz.clone(),
        }
    }
}

#[derive(Default, Deserialize, Clone, Debug)]
pub struct GameRoleList {
    #[serde(default)]
    pub list: Option<Vec<GameRole>>,
}

impl GameRoleList {
    pub fn account_refs(&self) -> Vec<AccountRef> {
        self.list
            .iter()
            .flatten()
            .map(AccountRef::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{ResponseWrapper, ResponseWrapperRetcode};

    #[test]
    fn game_role_uid_formats() {
        let list: GameRoleList = serde_json::from_str(
            r#"{"list":[
                {"game_biz":"hk4e_global","region":"os_usa","game_uid":"800000001","nickname":"Traveler","level":60,"is_chosen":true,"region_name":"America Server"},
                {"game_biz":"hk4e_global","game_uid":800000002}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            list.account_refs(),
            vec![
                AccountRef {
                    account_id: 800000001,
                    game_business_id: "hk4e_global".into()
                },
                AccountRef {
                    account_id: 800000002,
                    game_business_id: "hk4e_global".into()
                },
            ]
        );
        let first = &list.list.as_ref().unwrap()[0];
        assert_eq!(first.nickname.as_deref(), Some("Traveler"));
        assert_eq!(first.level, Some(60));
        assert!(first.is_chosen);
    }

    #[test]
    fn empty_role_payloads() {
        for json in [
            r#"{"retcode":0,"message":"OK","data":null}"#,
            r#"{"retcode":0,"message":"OK"}"#,
            r#"{"retcode":0,"message":"OK","data":{}}"#,
            r#"{"retcode":0,"message":"OK","data":{"list":null}}"#,
            r#"{"retcode":0,"message":"OK","data":{"list":[]}}"#,
        ] {
            let resp: ResponseWrapperRetcode<GameRoleList> = serde_json::from_str(json).unwrap();
            let refs = resp
                .to_response_data()
                .data
                .map(|x| x.account_refs())
                .unwrap_or_default();
            assert!(refs.is_empty(), "{json}");
        }
    }

    #[test]
    fn malformed_role_is_rejected() {
        let result = serde_json::from_str::<ResponseWrapperRetcode<GameRoleList>>(
            r#"{"retcode":0,"data":{"list":[{"game_biz":"hk4e_global"}]}}"#,
        );
        assert!(result.is_err());
    }
}
