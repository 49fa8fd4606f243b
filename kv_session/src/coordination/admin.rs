use crate::identity::{Identity, IdentityStore};
use crate::session::Session;

use super::auth::current_user;
use super::errors::AuthError;

/// Resolves the signed-in account and requires the session's admin flag.
///
/// The flag is read from the session record, not the identity row, so an
/// operator grants or revokes it by editing the record in the session store.
/// An absent flag means not an admin.
pub async fn require_admin(
    session: &mut Session,
    identities: &IdentityStore,
) -> Result<Identity, AuthError> {
    let (identity, _) = current_user(session, identities).await?;

    if !session.data().admin() {
        return Err(AuthError::Forbidden.log());
    }

    Ok(identity)
}
