use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{LogCategory, NewLogEntry, NewUser, Role, User},
    traits::{AuditLog, UserApiError, UserManagement},
};

/// `AuthApi` wraps the demo identity store.
///
/// Registration creates a `buyer` account; login resolves the caller's role by looking their record up in the
/// store. Privilege is never derived from the shape of the email address itself, and an unknown email simply gets
/// the lowest-privilege role. Passwords are demo secrets and are not verified.
pub struct AuthApi<B> {
    db: B,
}

impl<B> Debug for AuthApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthApi")
    }
}

impl<B> AuthApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> AuthApi<B>
where B: UserManagement + AuditLog
{
    /// Creates a new buyer account. The display name is the local part of the email address.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, UserApiError> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = self
            .db
            .insert_user(NewUser {
                name,
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Buyer,
                is_active: true,
            })
            .await?;
        debug!("🔑️ Registered user #{} ({})", user.id, user.email);
        let entry = NewLogEntry {
            category: LogCategory::Auth,
            actor: Some(user.email.clone()),
            description: format!("User #{} registered", user.id),
            related_id: Some(user.id.to_string()),
        };
        if let Err(e) = self.db.create_log_entry(entry).await {
            warn!("🔑️ Could not write the audit entry for user #{}. {e}", user.id);
        }
        Ok(user)
    }

    /// Resolves the role for a login attempt from the identity store. Unknown emails are treated as buyers.
    pub async fn role_for_login(&self, email: &str) -> Result<Role, UserApiError> {
        let role = self.db.fetch_user_by_email(email).await?.map(|u| u.role).unwrap_or_default();
        trace!("🔑️ Login by {email} resolved to role '{role}'");
        Ok(role)
    }
}
