//! Test User Cleanup
//!
//! Best-effort removal of every user a client registered or was asked to track.
//! Failures are collected into a report; local session state is always reset.

use shared::logging::log_cleanup_warning;
use shared::{ClientError, CleanupFailure, CleanupFailureKind, CleanupReport, TestUser};
use tracing::info;

use super::api_client::StellarBurgersClient;

/// Delete statuses that count as "gone"
const DELETED_STATUSES: [u16; 3] = [200, 204, 404];

impl StellarBurgersClient {
    /// Log in as each tracked user, in creation order, and delete the account
    ///
    /// Never fails. Afterwards nothing is tracked and the token is cleared,
    /// whatever happened to the individual users.
    pub async fn cleanup(&mut self) -> CleanupReport {
        let users = self.session.take_tracked();
        let mut report = CleanupReport {
            attempted: users.len(),
            failures: Vec::new(),
        };

        if !users.is_empty() {
            info!("🧹 Cleaning up {} test user(s)", users.len());
        }

        for user in &users {
            if let Err(failure) = self.remove_user(user).await {
                log_cleanup_warning(&failure.to_string());
                report.record(failure);
            }
        }

        self.session.reset();

        if !users.is_empty() {
            info!(
                "✅ Cleanup finished: {} deleted, {} failed",
                report.deleted(),
                report.failures.len()
            );
        }
        report
    }

    async fn remove_user(&mut self, user: &TestUser) -> Result<(), CleanupFailure> {
        // A login that returns 200 without a token must not leave the previous
        // user's token in place for the delete below.
        self.session.clear_token();

        let login = self
            .login(&user.email, &user.password)
            .await
            .map_err(|err| request_failed(user, err))?;

        if login.status() != 200 {
            return Err(CleanupFailure {
                kind: CleanupFailureKind::LoginRejected,
                email: user.email.clone(),
                status: Some(login.status()),
                message: login.message().unwrap_or_default(),
            });
        }

        let delete = self
            .delete_current_user()
            .await
            .map_err(|err| request_failed(user, err))?;

        if !DELETED_STATUSES.contains(&delete.status()) {
            return Err(CleanupFailure {
                kind: CleanupFailureKind::DeleteRejected,
                email: user.email.clone(),
                status: Some(delete.status()),
                message: delete.message().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

fn request_failed(user: &TestUser, err: ClientError) -> CleanupFailure {
    CleanupFailure {
        kind: CleanupFailureKind::RequestFailed,
        email: user.email.clone(),
        status: None,
        message: err.to_string(),
    }
}
