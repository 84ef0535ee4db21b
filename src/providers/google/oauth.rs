use crate::{
    constants::{
        GOOGLE_AUTH_URL, GOOGLE_REVOKE_URL, GOOGLE_SCOPES, GOOGLE_TOKEN_URL, GOOGLE_USERINFO_URL,
    },
    errors::{AppError, IOError, SyncError},
    localization::current_labels,
    logging::logger::{log_info, log_warn},
    providers::{
        authenticator::{AccessToken, Authenticator, PendingAuthorization},
        google::{error_for_response, transport},
    },
    util::open_in_browser,
};
use async_trait::async_trait;
use chrono::{Local, TimeDelta};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    time::timeout,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: Option<String>,
}

/// OAuth 2.0 installed-app flow: the consent page redirects to a listener
/// bound on the loopback interface, and the code it receives is exchanged
/// for an access token.
pub struct GoogleAuthenticator {
    client: Client,
    client_id: String,
    client_secret: Option<String>,
    auth_timeout: Duration,
}

impl GoogleAuthenticator {
    pub fn new(
        client: Client,
        client_id: String,
        client_secret: Option<String>,
        auth_timeout: Duration,
    ) -> Self {
        Self {
            client,
            client_id,
            client_secret,
            auth_timeout,
        }
    }

    async fn wait_for_code(
        &self,
        listener: &TcpListener,
        expected_state: &str,
    ) -> Result<String, AppError> {
        let (mut stream, _) = timeout(self.auth_timeout, listener.accept())
            .await
            .map_err(|_| denied("timed out waiting for the browser redirect"))?
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let (reader, mut writer) = stream.split();
        let mut request_line = String::new();
        BufReader::new(reader)
            .read_line(&mut request_line)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let result = parse_redirect(&request_line, expected_state);
        let page = match &result {
            Ok(_) => current_labels().browser_sign_in_complete,
            Err(_) => current_labels().browser_sign_in_failed,
        };
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            page.len(),
            page
        );
        let _ = writer.write_all(response.as_bytes()).await;
        let _ = writer.shutdown().await;
        result
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<AccessToken, AppError> {
        let mut form = vec![
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];
        if let Some(secret) = &self.client_secret {
            form.push(("client_secret", secret.as_str()));
        }
        let response = self
            .client
            .post(GOOGLE_TOKEN_URL)
            .form(&form)
            .send()
            .await
            .map_err(transport)?;
        let token: TokenResponse = error_for_response(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        Ok(AccessToken {
            value: token.access_token,
            expires_at: token
                .expires_in
                .and_then(TimeDelta::try_seconds)
                .map(|d| Local::now() + d),
        })
    }
}

#[async_trait]
impl Authenticator for GoogleAuthenticator {
    async fn start(&self) -> Result<PendingAuthorization, AppError> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::IO(IOError::from(e)))?
            .port();
        let redirect_uri = format!("http://127.0.0.1:{}", port);
        let state = new_state();
        let url = Url::parse_with_params(
            GOOGLE_AUTH_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", GOOGLE_SCOPES),
                ("state", state.as_str()),
                ("prompt", "consent"),
            ],
        )
        .map_err(|e| AppError::IO(IOError::Msg(format!("invalid authorization url: {}", e))))?;
        if let Err(e) = open_in_browser(url.as_str()) {
            log_warn(&format!("could not open the browser: {}", e));
        }
        log_info(&format!(
            "authorization started, waiting for redirect on '{}'",
            redirect_uri
        ));
        Ok(PendingAuthorization {
            url: url.to_string(),
            redirect_uri,
            state,
            listener: Some(listener),
        })
    }

    async fn finish(&self, pending: PendingAuthorization) -> Result<AccessToken, AppError> {
        let listener = pending
            .listener
            .as_ref()
            .ok_or_else(|| denied("authorization was not started"))?;
        let code = self.wait_for_code(listener, &pending.state).await?;
        self.exchange_code(&code, &pending.redirect_uri).await
    }

    async fn user_email(&self, token: &AccessToken) -> Result<Option<String>, AppError> {
        let response = self
            .client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(&token.value)
            .send()
            .await
            .map_err(transport)?;
        let info: UserInfo = error_for_response(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        Ok(info.email)
    }

    async fn revoke(&self, token: &AccessToken) -> Result<(), AppError> {
        let response = self
            .client
            .post(GOOGLE_REVOKE_URL)
            .form(&[("token", token.value.as_str())])
            .send()
            .await
            .map_err(transport)?;
        error_for_response(response).await?;
        Ok(())
    }
}

/// Extracts the authorization code from the first line of the redirect
/// request, e.g. `GET /?state=..&code=.. HTTP/1.1`.
pub fn parse_redirect(request_line: &str, expected_state: &str) -> Result<String, AppError> {
    let target = request_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| denied("empty redirect request"))?;
    let url = Url::parse(&format!("http://127.0.0.1{}", target))
        .map_err(|e| denied(&format!("invalid redirect: {}", e)))?;
    let (mut code, mut state, mut error) = (None, None, None);
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }
    if let Some(error) = error {
        return Err(denied(&error));
    }
    if state.as_deref() != Some(expected_state) {
        return Err(denied("state mismatch"));
    }
    code.ok_or_else(|| denied("missing authorization code"))
}

fn new_state() -> String {
    format!(
        "{:x}{:x}",
        Local::now().timestamp_nanos_opt().unwrap_or_default(),
        std::process::id()
    )
}

fn denied(message: &str) -> AppError {
    AppError::Sync(SyncError::AuthorizationDenied(message.to_string()))
}
