use super::UserService;
use crate::{
    api::ApiClient,
    cache::{cache_key, search_params, ResponseCache},
    dto::{
        input::{PageResponse, User},
        output::{
            CreateUserRequest, PageRequest, UpdateProfileRequest, UpdateRoleRequest,
            UpdateUserRequest, UserFilters,
        },
        Role,
    },
    error::Error,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct UserServiceImpl {
    api: Arc<ApiClient>,
    search_cache: ResponseCache<String, PageResponse<User>>,
    user_cache: ResponseCache<i64, User>,
}

impl UserServiceImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            search_cache: ResponseCache::new(),
            user_cache: ResponseCache::new(),
        }
    }

    async fn clear_caches(&self) {
        self.search_cache.clear().await;
        self.user_cache.clear().await;
    }

    fn user_path(&self, id: i64, suffix: &str) -> Result<String, Error> {
        self.api.association_path(&format!("/users/{id}{suffix}"))
    }

    async fn toggle(&self, id: i64, action: &str) -> Result<User, Error> {
        tracing::info!(id, action, "changing user state");

        let path = self.user_path(id, &format!("/{action}"))?;
        let user = self.api.patch_empty::<User>(&path).await?.into_data()?;
        tracing::info!(id, enabled = user.enabled, "changed user state");

        self.clear_caches().await;

        Ok(user)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn search_users(
        &self,
        filters: UserFilters,
        page: PageRequest,
    ) -> Result<PageResponse<User>, Error> {
        let key = cache_key(&filters, &page);
        if let Some(cached) = self.search_cache.get(&key).await {
            tracing::debug!(%key, "user search answered from cache");
            return Ok(cached);
        }

        tracing::info!("searching users");
        tracing::trace!(?filters, ?page);

        let path = self.api.association_path("/users")?;
        let users = self
            .api
            .get::<PageResponse<User>>(&path, &search_params(&filters, &page))
            .await?
            .into_data()?;
        tracing::info!(count = users.content.len(), "found users");

        self.search_cache.insert(key, users.clone()).await;

        Ok(users)
    }

    async fn get_user(&self, id: i64) -> Result<User, Error> {
        if let Some(cached) = self.user_cache.get(&id).await {
            return Ok(cached);
        }

        tracing::info!(id, "finding user");

        let path = self.user_path(id, "")?;
        let user = self.api.get::<User>(&path, &[]).await?.into_data()?;
        tracing::info!(id, "found user");

        self.user_cache.insert(id, user.clone()).await;

        Ok(user)
    }

    async fn create_user(&self, user: CreateUserRequest) -> Result<User, Error> {
        tracing::info!("creating user");
        tracing::trace!(?user);

        let path = self.api.association_path("/users")?;
        let user = self.api.post::<_, User>(&path, &user).await?.into_data()?;
        tracing::info!(id = user.id, "created user");

        self.clear_caches().await;

        Ok(user)
    }

    async fn update_user(&self, id: i64, user: UpdateUserRequest) -> Result<User, Error> {
        tracing::info!(id, "updating user");
        tracing::trace!(?user);

        let path = self.user_path(id, "")?;
        let user = self.api.put::<_, User>(&path, &user).await?.into_data()?;
        tracing::info!(id, "updated user");

        self.clear_caches().await;

        Ok(user)
    }

    async fn update_role(&self, id: i64, role: Role) -> Result<User, Error> {
        tracing::info!(id, %role, "updating user role");

        let path = self.user_path(id, "/role")?;
        let user = self
            .api
            .patch::<_, User>(&path, &UpdateRoleRequest { role })
            .await?
            .into_data()?;
        tracing::info!(id, role = %user.role, "updated user role");

        self.clear_caches().await;

        Ok(user)
    }

    async fn enable_user(&self, id: i64) -> Result<User, Error> {
        self.toggle(id, "enable").await
    }

    async fn disable_user(&self, id: i64) -> Result<User, Error> {
        self.toggle(id, "disable").await
    }

    async fn update_profile(&self, profile: UpdateProfileRequest) -> Result<User, Error> {
        tracing::info!("updating profile");
        tracing::trace!(?profile);

        let user = self
            .api
            .put::<_, User>("/v1/users/me", &profile)
            .await?
            .into_data()?;
        tracing::info!(id = user.id, "updated profile");

        self.clear_caches().await;
        self.api.session().set_user(&user)?;

        Ok(user)
    }
}
