use super::AuthService;
use crate::{
    api::ApiClient,
    dto::{
        input::{EmptyResponse, LoginResponse, User},
        output::{
            ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
            ResetPasswordRequest, VerifyRequest,
        },
    },
    error::Error,
    routes::Route,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct AuthServiceImpl {
    api: Arc<ApiClient>,
}

impl AuthServiceImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    async fn load_profile(&self) -> Result<User, Error> {
        let response = self.api.get::<User>("/v1/users/me", &[]).await?;
        if !response.success {
            tracing::warn!(message = ?response.message, "profile request was not successful");
            return Err(Error::UserProfile);
        }

        response.data.ok_or(Error::UserProfile)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: LoginRequest) -> Result<Route, Error> {
        tracing::info!(email = %credentials.email, "logging in");

        let login = self
            .api
            .post::<_, LoginResponse>("/v1/auth/login", &credentials)
            .await?
            .into_data()?;

        let session = self.api.session();
        session.set_access_token(&login.access_token)?;
        session.set_association_id(login.association_id)?;
        tracing::info!(association_id = login.association_id, "stored access token");

        let user = self.load_profile().await?;
        session.set_user(&user)?;
        tracing::info!(id = user.id, role = %user.role, "logged in");

        Ok(Route::Dashboard)
    }

    async fn register(&self, request: RegisterRequest) -> Result<(), Error> {
        tracing::info!(email = %request.user_data.email, "registering user");

        self.api
            .post::<_, EmptyResponse>("/v1/auth/register", &request)
            .await?;
        tracing::info!(email = %request.user_data.email, "registered user");

        Ok(())
    }

    async fn verify(&self, token: String) -> Result<(), Error> {
        tracing::info!("verifying account");

        self.api
            .post::<_, EmptyResponse>("/v1/auth/verify", &VerifyRequest { token })
            .await?;
        tracing::info!("verified account");

        Ok(())
    }

    async fn logout(&self) -> Result<Route, Error> {
        tracing::info!("logging out");

        if let Err(err) = self.api.post_empty::<EmptyResponse>("/v1/auth/logout").await {
            tracing::warn!(%err, "backend logout failed, clearing session anyway");
        }

        self.api.session().clear()?;
        tracing::info!("logged out");

        Ok(Route::Login)
    }

    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<(), Error> {
        tracing::info!("requesting password reset");
        tracing::trace!(?request);

        self.api
            .post::<_, EmptyResponse>("/v1/auth/forgot-password", &request)
            .await?;
        tracing::info!("requested password reset");

        Ok(())
    }

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), Error> {
        tracing::info!("resetting password");

        self.api
            .post::<_, EmptyResponse>("/v1/auth/reset-password", &request)
            .await?;
        tracing::info!("reset password");

        Ok(())
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), Error> {
        tracing::info!("changing password");

        self.api
            .put::<_, EmptyResponse>("/v1/users/me/password", &request)
            .await?;
        tracing::info!("changed password");

        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.api.session().user()
    }

    fn is_authenticated(&self) -> bool {
        self.api.session().has_valid_token(OffsetDateTime::now_utc())
    }

    fn is_admin(&self) -> bool {
        self.is_authenticated() && self.current_user().is_some_and(|user| user.is_admin())
    }
}
