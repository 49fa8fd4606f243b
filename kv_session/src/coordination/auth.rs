use crate::identity::{Identity, IdentityStore, hash_password, verify_password};
use crate::session::{CsrfToken, Session};
use crate::utils::gen_random_string;

use super::errors::AuthError;

/// Registers a new account and signs the caller in.
///
/// The identity row is created first; on a duplicate email or username
/// nothing is written to the session store. On success the session carries
/// the new account id and a freshly rotated anti-forgery token, persisted
/// with a single commit.
pub async fn register_user(
    session: &mut Session,
    identities: &IdentityStore,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<(Identity, CsrfToken), AuthError> {
    if password != password_confirmation {
        return Err(AuthError::PasswordMismatch.log());
    }

    let username = derive_username(email);
    let id = gen_new_identity_id(identities).await?;
    let password_hash = hash_password(password)?;

    let identity = identities
        .create_identity(Identity::new(
            id,
            email.to_string(),
            username,
            password_hash,
        ))
        .await?;

    session.load().await?;
    session.data_mut().user_id = Some(identity.id.clone());
    let csrf_token = session.rotate_csrf_token()?;
    session.commit().await?;

    tracing::info!(user_id = %identity.id, "Registered new user");
    Ok((identity, csrf_token))
}

/// Signs an existing account in.
///
/// Unknown email and wrong password produce the same error so the endpoint
/// cannot be used to enumerate accounts. The anti-forgery token is rotated
/// on every successful login.
pub async fn login_user(
    session: &mut Session,
    identities: &IdentityStore,
    email: &str,
    password: &str,
) -> Result<CsrfToken, AuthError> {
    let identity = match identities.get_identity_by_email(email).await? {
        Some(identity) if verify_password(password, &identity.password_hash)? => identity,
        _ => return Err(AuthError::InvalidCredentials.log()),
    };

    session.load().await?;
    session.data_mut().user_id = Some(identity.id.clone());
    let csrf_token = session.rotate_csrf_token()?;
    session.commit().await?;

    tracing::debug!(user_id = %identity.id, "User logged in");
    Ok(csrf_token)
}

/// Destroys the caller's session.
///
/// Deliberately not protected by the anti-forgery token: a forged logout
/// only signs the victim out, and an expired token must never trap a user
/// in a session they want to end.
pub async fn logout_user(session: &mut Session) -> Result<(), AuthError> {
    session.load().await?;
    session.clear().await?;
    Ok(())
}

/// Changes the password of the signed-in account.
///
/// Order of checks: anti-forgery token first, then authentication, then the
/// old password. `csrf_candidate` is the raw header value; absence fails the
/// same way as a mismatch.
pub async fn change_password(
    session: &mut Session,
    identities: &IdentityStore,
    old_password: &str,
    new_password: &str,
    csrf_candidate: Option<&str>,
) -> Result<(), AuthError> {
    session.load().await?;

    if !session.verify_csrf_token(csrf_candidate.unwrap_or_default()) {
        return Err(AuthError::CsrfMissingOrInvalid.log());
    }

    let Some(user_id) = session.data().user_id.clone() else {
        return Err(AuthError::NotAuthenticated.log());
    };

    let identity = identities
        .get_identity(&user_id)
        .await?
        .ok_or_else(|| AuthError::NotAuthenticated.log())?;

    if !verify_password(old_password, &identity.password_hash)? {
        return Err(AuthError::InvalidCredentials.log());
    }

    identities
        .update_password(&identity.id, &hash_password(new_password)?)
        .await?;
    session.commit().await?;

    tracing::info!(user_id = %identity.id, "Password changed");
    Ok(())
}

/// Resolves the signed-in account, returning it together with the session's
/// current anti-forgery token so clients can re-arm after a page load.
pub async fn current_user(
    session: &mut Session,
    identities: &IdentityStore,
) -> Result<(Identity, Option<CsrfToken>), AuthError> {
    session.load().await?;

    let Some(user_id) = session.data().user_id.clone() else {
        return Err(AuthError::NotAuthenticated.log());
    };

    // A session pointing at a deleted account is treated as anonymous
    let identity = identities
        .get_identity(&user_id)
        .await?
        .ok_or_else(|| AuthError::NotAuthenticated.log())?;

    Ok((identity, session.csrf_token()))
}

/// Display name for a new account: the email local part, falling back to
/// the whole address when the local part is empty.
fn derive_username(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or(email)
        .to_string()
}

pub(super) async fn gen_new_identity_id(
    identities: &IdentityStore,
) -> Result<String, AuthError> {
    // Try up to 3 times to generate an unused ID
    for _ in 0..3 {
        let id = gen_random_string(32)?;

        match identities.get_identity(&id).await {
            Ok(None) => return Ok(id),
            Ok(Some(_)) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    // Vanishingly unlikely with 32 bytes of entropy, but handled anyway
    Err(AuthError::Coordination(
        "Failed to generate a unique identity ID after multiple attempts".to_string(),
    )
    .log())
}
