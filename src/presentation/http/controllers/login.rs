// src/presentation/http/controllers/login.rs
use crate::application::commands::{LoginCommand, LoginOutcome};
use crate::presentation::http::{
    cookies,
    error::{HttpResult, IntoHttpResult},
    responses,
    state::HttpState,
};
use axum::{
    Extension, Form,
    extract::Query,
    response::{Html, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageParams {
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

pub async fn login_page(Query(params): Query<LoginPageParams>) -> Html<String> {
    let error = if params.error.is_some() {
        r#"<p class="error">Invalid password.</p>"#
    } else {
        ""
    };
    let redirect = escape_html(params.redirect.as_deref().unwrap_or_default());

    Html(format!(
        r#"<!doctype html>
<html>
<head><title>Login</title></head>
<body>
<form method="post" action="{action}">
{error}
<input type="password" name="password" autocomplete="current-password" autofocus>
<input type="hidden" name="redirect" value="{redirect}">
<button type="submit">Login</button>
</form>
</body>
</html>
"#,
        action = responses::LOGIN_PATH,
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> HttpResult<Response> {
    let command = LoginCommand {
        secret: form.password,
        redirect: form.redirect,
    };

    match state.services.login.attempt_login(command).into_http()? {
        LoginOutcome::Authenticated { cookie, redirect } => {
            let set_cookie = cookies::set_cookie(&cookie)?;
            responses::found(redirect.as_str(), Some(set_cookie))
        }
        LoginOutcome::Rejected { redirect } => {
            responses::found(&responses::login_failed_location(redirect.as_deref()), None)
        }
    }
}

pub async fn logout(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let cleared = cookies::set_cookie(&state.services.login.logout())?;
    responses::found("/", Some(cleared))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_page_escapes_the_redirect_value() {
        let Html(body) = login_page(Query(LoginPageParams {
            redirect: Some(r#""><script>alert(1)</script>"#.into()),
            error: Some("invalid_password".into()),
        }))
        .await;

        assert!(!body.contains("<script>"));
        assert!(body.contains("&quot;&gt;&lt;script&gt;"));
        assert!(body.contains("Invalid password."));
    }
}
