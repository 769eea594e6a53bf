use async_trait::async_trait;
use reqwest::Url;

use crate::{
    consts::account::api,
    models::{
        api_account::{AccountRef, GameRoleList},
        common::ResponseWrapperRetcode,
    },
};

use super::{
    common::{try_response_data_or_empty, try_response_json, ApiResult, RequestParams},
    session::Session,
    RoleLookup,
};

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    params: RequestParams,
    session: Session,
}

impl Client {
    pub fn new(base_url: &str, session: Session, params: RequestParams) -> ApiResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            params,
            session,
        })
    }

    pub async fn get_user_game_roles(&self, region: &str) -> ApiResult<Vec<AccountRef>> {
        let resp = self
            .session
            .get(self.base_url.join(api::GAME_ROLES)?)?
            .query(&[
                ("lang", self.params.lang.as_str()),
                ("region", region),
                ("game_biz", self.params.game_biz.as_str()),
                ("sLangKey", self.params.lang_key.as_str()),
            ])
            .send()
            .await?;

        let status_code = resp.status();
        let json: ResponseWrapperRetcode<GameRoleList> = try_response_json(resp).await?;

        Ok(try_response_data_or_empty(status_code, json)?
            .map(|x| x.account_refs())
            .unwrap_or_default())
    }
}

#[async_trait]
impl RoleLookup for Client {
    async fn lookup_roles(&self, region: &str) -> ApiResult<Vec<AccountRef>> {
        self.get_user_game_roles(region).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_server::serve_once;

    fn client(base_url: &str) -> Client {
        let session = Session::new(reqwest::Client::new(), Some("cookie_token_v2=abc".into()));
        Client::new(base_url, session, RequestParams::default()).unwrap()
    }

    #[tokio::test]
    async fn get_user_game_roles() {
        let (base_url, rx_request) = serve_once(
            "200 OK",
            r#"{"retcode":0,"message":"OK","data":{"list":[{"game_biz":"hk4e_global","region":"os_usa","game_uid":"800000001","nickname":"Lumine","level":58,"is_chosen":false,"region_name":"America Server","is_official":true}]}}"#,
        )
        .await;

        let roles = client(&base_url).get_user_game_roles("os_usa").await.unwrap();
        assert_eq!(
            roles,
            vec![AccountRef {
                account_id: 800000001,
                game_business_id: "hk4e_global".into()
            }]
        );

        let request = rx_request.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /account/binding/api/getUserGameRolesByCookieToken?lang=en&region=os_usa&game_biz=hk4e_global&sLangKey=en-us HTTP/1.1"
        );
        assert!(request
            .to_ascii_lowercase()
            .contains("cookie: cookie_token_v2=abc"));
    }

    #[tokio::test]
    async fn region_without_roles() {
        let (base_url, _rx) =
            serve_once("200 OK", r#"{"retcode":0,"message":"OK","data":null}"#).await;
        let roles = client(&base_url).lookup_roles("os_cht").await.unwrap();
        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_error() {
        let (base_url, _rx) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
        let err = client(&base_url)
            .lookup_roles("os_usa")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("502"));
        assert!(err.contains("bad gateway"));
    }
}
