use crate::{
    dto::{
        input::User,
        output::{
            ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
            ResetPasswordRequest,
        },
    },
    error::Error,
    routes::Route,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    ///
    /// Log in and store session: access token, association id
    /// and profile of the logged in user.
    ///
    /// ### Returns
    /// route user should be taken to
    ///
    /// ### Errors
    /// - [Error::Api] when credentials are rejected
    /// - [Error::UserProfile] when profile could not be loaded,
    ///   access token stays stored in that case
    ///
    async fn login(&self, credentials: LoginRequest) -> Result<Route, Error>;

    ///
    /// Register new user together with its association.
    /// Account has to be verified before first login.
    ///
    async fn register(&self, request: RegisterRequest) -> Result<(), Error>;

    async fn verify(&self, token: String) -> Result<(), Error>;

    ///
    /// Ends session. Backend is informed on best-effort basis,
    /// local session is always cleared.
    ///
    /// ### Errors
    /// - [Error::Session] when session storage could not be cleared
    ///
    async fn logout(&self) -> Result<Route, Error>;

    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<(), Error>;

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), Error>;

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), Error>;

    fn current_user(&self) -> Option<User>;

    ///
    /// Stored token is present and its `exp` claim is in the future
    ///
    fn is_authenticated(&self) -> bool;

    fn is_admin(&self) -> bool;
}
