use http::HeaderMap;
use std::sync::Arc;

use crate::session::config::SESSION_COOKIE_NAME;
use crate::session::errors::SessionError;
use crate::session::types::CsrfToken;
use crate::storage::{SessionData, SessionRecord, SessionStore};
use crate::utils::gen_random_string;

use super::cookie::{stage_expired_cookie, stage_session_cookie};
use super::csrf::tokens_match;

/// Entropy in bytes for session ids and CSRF tokens. Encoded length is
/// longer (base64url).
const TOKEN_ENTROPY_BYTES: usize = 32;

/// Request-scoped handle to one browser session.
///
/// A `Session` starts uninitialized, holding only the session id the request
/// cookie carried (if any) and a shared store handle. `load` binds it to an
/// id and pulls the stored record into memory; every mutation after that is
/// in-memory only until `commit` writes the whole record back, or `clear`
/// deletes it. Cookie changes are staged on the session and drained with
/// [`take_cookie_headers`](Self::take_cookie_headers) when building the
/// response.
///
/// One value per request, owned by the handler. Concurrent requests for the
/// same browser get independent `Session` values whose commits resolve
/// last-write-wins in the store.
pub struct Session {
    store: Arc<dyn SessionStore>,
    request_sid: Option<String>,
    sid: Option<String>,
    data: SessionData,
    csrf: Option<String>,
    loaded: bool,
    fresh: bool,
    staged_cookies: HeaderMap,
}

impl Session {
    /// Creates an unloaded session from the store handle and the session id
    /// presented by the request, if any.
    pub fn new(store: Arc<dyn SessionStore>, request_sid: Option<String>) -> Self {
        Self {
            store,
            request_sid: request_sid.filter(|sid| !sid.is_empty()),
            sid: None,
            data: SessionData::default(),
            csrf: None,
            loaded: false,
            fresh: false,
            staged_cookies: HeaderMap::new(),
        }
    }

    /// Binds the session to an id and pulls its record into memory.
    ///
    /// If the request carried no session cookie, a fresh id is minted and a
    /// Set-Cookie header is staged; the session is then `is_fresh`. Either
    /// way the store is read exactly once, and a missing record (expired or
    /// never committed) yields empty data with no CSRF token.
    ///
    /// Calling `load` again is a no-op, so handlers can call it defensively.
    ///
    /// # Returns
    /// * `Err(SessionError::Store(_))` - the backend could not be read; the
    ///   session stays unloaded and nothing was mutated anywhere
    pub async fn load(&mut self) -> Result<(), SessionError> {
        if self.loaded {
            return Ok(());
        }

        let (sid, fresh) = match self.request_sid.clone() {
            Some(sid) => (sid, false),
            None => {
                let sid = gen_random_string(TOKEN_ENTROPY_BYTES)?;
                tracing::debug!("No session cookie presented, minting new session id");
                (sid, true)
            }
        };

        let record = self.store.get(&sid).await?.unwrap_or_default();

        if fresh {
            stage_session_cookie(&mut self.staged_cookies, &SESSION_COOKIE_NAME, &sid)?;
        }
        self.data = record.data;
        self.csrf = record.csrf;
        self.sid = Some(sid);
        self.fresh = fresh;
        self.loaded = true;
        Ok(())
    }

    /// Replaces the in-memory CSRF token with a freshly minted one and
    /// returns it. Takes effect in the store only on the next `commit`.
    ///
    /// Flows call this on privilege changes (login, signup) so a token
    /// captured before authentication is worthless afterwards.
    pub fn rotate_csrf_token(&mut self) -> Result<CsrfToken, SessionError> {
        let token = gen_random_string(TOKEN_ENTROPY_BYTES)?;
        self.csrf = Some(token.clone());
        Ok(CsrfToken::new(token))
    }

    /// Checks a candidate token against the session's current one.
    ///
    /// False when the session has no token, when the candidate is empty, and
    /// on mismatch. The comparison is constant-time; absence short-circuits,
    /// which reveals nothing about the token value.
    pub fn verify_csrf_token(&self, candidate: &str) -> bool {
        match &self.csrf {
            Some(stored) => !candidate.is_empty() && tokens_match(stored, candidate),
            None => false,
        }
    }

    /// The current CSRF token, if one has been loaded or rotated.
    pub fn csrf_token(&self) -> Option<CsrfToken> {
        self.csrf.clone().map(CsrfToken::new)
    }

    /// Writes the in-memory record (data bag plus CSRF token) to the store,
    /// replacing whatever was there.
    ///
    /// A commit without a bound session id is a safe no-op; that guards
    /// handlers that forgot to `load`. On store failure the in-memory state
    /// is untouched, so the caller may retry or give up without losing the
    /// request's mutations.
    pub async fn commit(&mut self) -> Result<(), SessionError> {
        let Some(sid) = &self.sid else {
            tracing::debug!("Commit without a bound session id is a no-op");
            return Ok(());
        };

        let record = SessionRecord {
            data: self.data.clone(),
            csrf: self.csrf.clone(),
        };
        self.store.set(sid, record).await?;
        Ok(())
    }

    /// Destroys the session: deletes the stored record, stages a cookie
    /// expiry for the browser, and resets the in-memory state.
    ///
    /// Clearing while not loaded, or clearing twice, is safe. If the store
    /// delete fails the session is left as it was, so a retry hits the same
    /// path again.
    pub async fn clear(&mut self) -> Result<(), SessionError> {
        if let Some(sid) = &self.sid {
            self.store.delete(sid).await?;
        }

        stage_expired_cookie(&mut self.staged_cookies, &SESSION_COOKIE_NAME)?;
        self.request_sid = None;
        self.sid = None;
        self.data = SessionData::default();
        self.csrf = None;
        self.loaded = false;
        self.fresh = false;
        Ok(())
    }

    /// Read access to the session's data bag.
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    /// Mutable access to the session's data bag. Changes are in-memory until
    /// `commit`.
    pub fn data_mut(&mut self) -> &mut SessionData {
        &mut self.data
    }

    /// The bound session id, once loaded.
    pub fn id(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    /// True when `load` minted a fresh id because the request carried none.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Drains the staged Set-Cookie headers for merging into the response.
    pub fn take_cookie_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.staged_cookies)
    }
}
