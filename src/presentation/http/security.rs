use std::time::Duration;

use poem::{
    Result as PoemResult,
    web::cookie::{Cookie, CookieJar},
};

use crate::{
    domain::{models::User, value_objects::SessionId},
    presentation::http::endpoints::root::ApiState,
};

pub const SESSION_COOKIE: &str = "sessionId";
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 7);

/// Session identity carried in the `sessionId` cookie.
pub struct SessionAuth;

impl SessionAuth {
    pub async fn from_cookies(cookie_jar: &CookieJar, state: &ApiState) -> PoemResult<User> {
        let token = cookie_jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value_str().to_string());

        let user = state
            .resolve_session_usecase
            .execute(token.as_deref())
            .await?;
        Ok(user)
    }

    pub fn issue(cookie_jar: &CookieJar, session_id: &SessionId) {
        let mut cookie = Cookie::new_with_str(SESSION_COOKIE, session_id.to_string());
        cookie.set_path("/");
        cookie.set_max_age(SESSION_MAX_AGE);
        cookie.set_http_only(true);
        cookie_jar.add(cookie);
    }
}
