use crate::session::SessionStore;
use time::OffsetDateTime;

///
/// Client side routes of the administration panel
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Verify,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Raffles,
    RaffleCreate,
    RaffleDetail(i64),
    RaffleEdit(i64),
    Orders,
    OrderCreate,
    OrderDetail(i64),
    Accounts,
    AccountCreate,
    AccountDetail(i64),
    Profile,
    ProfilePassword,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/auth/login".to_string(),
            Route::Register => "/auth/register".to_string(),
            Route::Verify => "/auth/verify".to_string(),
            Route::ForgotPassword => "/auth/forgot-password".to_string(),
            Route::ResetPassword => "/auth/reset-password".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Raffles => "/raffles".to_string(),
            Route::RaffleCreate => "/raffles/create".to_string(),
            Route::RaffleDetail(id) => format!("/raffles/{id}"),
            Route::RaffleEdit(id) => format!("/raffles/{id}/edit"),
            Route::Orders => "/orders".to_string(),
            Route::OrderCreate => "/orders/create".to_string(),
            Route::OrderDetail(id) => format!("/orders/{id}"),
            Route::Accounts => "/accounts".to_string(),
            Route::AccountCreate => "/accounts/create".to_string(),
            Route::AccountDetail(id) => format!("/accounts/{id}"),
            Route::Profile => "/profile".to_string(),
            Route::ProfilePassword => "/profile/password".to_string(),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login
                | Route::Register
                | Route::Verify
                | Route::ForgotPassword
                | Route::ResetPassword
        )
    }

    ///
    /// Management routes are restricted to administrators,
    /// dashboard and own profile only need a session.
    ///
    pub fn requires_admin(&self) -> bool {
        !self.is_public() && !matches!(self, Route::Dashboard | Route::Profile | Route::ProfilePassword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

///
/// Decides whether current session may enter `route`.
///
/// ### Returns
/// - [GuardOutcome::Redirect] to [Route::Login] when token is missing or expired
/// - [GuardOutcome::Redirect] to [Route::Login] when route requires admin
///   and stored user is not one
///
pub fn admin_guard(session: &SessionStore, route: Route) -> GuardOutcome {
    if route.is_public() {
        return GuardOutcome::Allow;
    }

    if !session.has_valid_token(OffsetDateTime::now_utc()) {
        tracing::debug!(route = %route.path(), "not authenticated, redirecting to login");
        return GuardOutcome::Redirect(Route::Login);
    }

    if route.requires_admin() {
        let is_admin = session.user().is_some_and(|user| user.is_admin());
        if !is_admin {
            tracing::debug!(route = %route.path(), "not an admin, redirecting to login");
            return GuardOutcome::Redirect(Route::Login);
        }
    }

    GuardOutcome::Allow
}
