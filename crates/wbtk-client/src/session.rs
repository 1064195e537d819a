//! The Wikibase API session: login, CSRF tokens, entity fetch, and
//! create-or-update push with maxlag retry.
//!
//! The server signals replication lag with a `maxlag` error and a
//! `retry-after` header; writes back off for that long and retry, bounded
//! by the configured retry budget. Every other API error surfaces
//! immediately.

use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::{debug, info, warn};
use wbtk_types::EntityId;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const DEFAULT_RETRY_AFTER_SECS: f64 = 5.0;

/// Bulk-fetch entity documents by id through `wbgetentities`. Needs no
/// session; reads are anonymous.
pub fn fetch_entities(
    config: &ClientConfig,
    ids: &[EntityId],
) -> ClientResult<BTreeMap<String, Value>> {
    let joined = ids
        .iter()
        .map(EntityId::as_str)
        .collect::<Vec<_>>()
        .join("|");
    let client = Client::builder().user_agent(&config.user_agent).build()?;
    let response = client
        .get(&config.api_url)
        .query(&[
            ("action", "wbgetentities"),
            ("format", "json"),
            ("ids", joined.as_str()),
        ])
        .send()?
        .error_for_status()?;
    let payload: Value = response.json()?;
    if let Some((code, info)) = api_error(&payload) {
        return Err(ClientError::Api { code, info });
    }
    let entities = payload
        .get("entities")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ClientError::UnexpectedResponse("wbgetentities response has no entities".into())
        })?;
    debug!(requested = ids.len(), received = entities.len(), "fetched entities");
    Ok(entities
        .iter()
        .map(|(id, document)| (id.clone(), document.clone()))
        .collect())
}

/// Decide what kind of entity a document creates, from which top-level
/// keys are present. Only consulted when the document carries no `id`.
pub fn infer_new_kind(document: &Value) -> &'static str {
    let has = |key: &str| document.get(key).is_some_and(|v| !v.is_null());
    if has("lexicalCategory") {
        "lexeme"
    } else if has("glosses") {
        "sense"
    } else if has("representations") {
        "form"
    } else if has("labels") && has("sitelinks") {
        "item"
    } else {
        "property"
    }
}

fn api_error(payload: &Value) -> Option<(String, String)> {
    let error = payload.get("error")?;
    let code = error
        .get("code")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let info = error
        .get("info")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some((code, info))
}

fn retry_after_secs(response: &Response) -> f64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// An authenticated session against one Wikibase instance.
///
/// Construction performs the full login flow (login token → login → CSRF
/// token); the session then carries its cookies and CSRF token for the
/// lifetime of the value.
pub struct Session {
    http: Client,
    config: ClientConfig,
    csrf_token: String,
    assert_user: Option<String>,
}

impl Session {
    /// Log in with a username and password (or bot password in
    /// `User@botname` form).
    pub fn login(
        config: ClientConfig,
        username: &str,
        password: &str,
    ) -> ClientResult<Session> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()?;

        let mut session = Session {
            http,
            config,
            csrf_token: String::new(),
            // Bot passwords authenticate as `User@botname`; edits are
            // asserted against the plain user name.
            assert_user: username.split('@').next().map(str::to_string),
        };

        let token_response = session.get(&[
            ("action", "query"),
            ("meta", "tokens"),
            ("type", "login"),
            ("format", "json"),
        ])?;
        let login_token = token_str(&token_response, "logintoken")?;

        let login_response = session.post(&[
            ("action", "login"),
            ("format", "json"),
            ("lgname", username),
            ("lgpassword", password),
            ("lgtoken", &login_token),
        ])?;
        let result = login_response
            .pointer("/login/result")
            .and_then(Value::as_str)
            .unwrap_or("");
        if result != "Success" {
            let reason = login_response
                .pointer("/login/reason")
                .and_then(Value::as_str)
                .unwrap_or(result);
            return Err(ClientError::Login(reason.to_string()));
        }
        info!(user = username, "logged in");

        let csrf_response =
            session.get(&[("action", "query"), ("meta", "tokens"), ("format", "json")])?;
        session.csrf_token = token_str(&csrf_response, "csrftoken")?;
        debug!("obtained CSRF token");
        Ok(session)
    }

    /// The configuration this session talks through.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create or update an entity through `wbeditentity`.
    ///
    /// A document carrying an `id` updates that entity in place; otherwise
    /// the created entity's kind is inferred from the document's top-level
    /// keys. Returns the server's response payload, which carries the
    /// updated entity (fresh ids and revision) on success.
    pub fn push(&self, document: &Value, summary: Option<&str>) -> ClientResult<Value> {
        let mut form: Vec<(String, String)> = vec![
            ("action".into(), "wbeditentity".into()),
            ("format".into(), "json".into()),
        ];

        match document.get("id").and_then(Value::as_str) {
            Some(id) => form.push(("id".into(), id.to_string())),
            None => {
                let kind = infer_new_kind(document);
                debug!(kind, "pushing new entity");
                form.push(("new".into(), kind.to_string()));
            }
        }
        if let Some(summary) = summary {
            form.push(("summary".into(), summary.to_string()));
        }
        if let Some(user) = &self.assert_user {
            form.push(("assertuser".into(), user.clone()));
        }
        form.push(("token".into(), self.csrf_token.clone()));
        form.push(("data".into(), document.to_string()));
        form.push(("maxlag".into(), self.config.maxlag.to_string()));

        self.post_form(&form)
    }

    /// Send a GET request with the given query parameters.
    pub fn get(&self, params: &[(&str, &str)]) -> ClientResult<Value> {
        let response = self
            .http
            .get(&self.config.api_url)
            .query(params)
            .send()?
            .error_for_status()?;
        let payload: Value = response.json()?;
        if let Some((code, info)) = api_error(&payload) {
            return Err(ClientError::Api { code, info });
        }
        Ok(payload)
    }

    /// Send a POST request with the given form parameters, with maxlag
    /// retry.
    pub fn post(&self, params: &[(&str, &str)]) -> ClientResult<Value> {
        let form: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.post_form(&form)
    }

    fn post_form(&self, form: &[(String, String)]) -> ClientResult<Value> {
        let attempts = self.config.maxlag_retries + 1;
        for attempt in 1..=attempts {
            let response = self
                .http
                .post(&self.config.api_url)
                .form(form)
                .send()?
                .error_for_status()?;
            let backoff = retry_after_secs(&response);
            let payload: Value = response.json()?;
            match api_error(&payload) {
                Some((code, _)) if code == "maxlag" => {
                    if attempt == attempts {
                        return Err(ClientError::MaxlagExhausted { attempts });
                    }
                    warn!(attempt, backoff, "maxlag hit, backing off");
                    thread::sleep(Duration::from_secs_f64(backoff));
                }
                Some((code, info)) => return Err(ClientError::Api { code, info }),
                None => return Ok(payload),
            }
        }
        // The loop always returns on its final attempt.
        Err(ClientError::MaxlagExhausted { attempts })
    }
}

fn token_str(payload: &Value, key: &str) -> ClientResult<String> {
    payload
        .pointer(&format!("/query/tokens/{key}"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::UnexpectedResponse(format!("response has no {key}")))
}
