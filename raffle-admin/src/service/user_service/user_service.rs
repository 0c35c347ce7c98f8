use crate::{
    dto::{
        input::{PageResponse, User},
        output::{CreateUserRequest, PageRequest, UpdateProfileRequest, UpdateUserRequest, UserFilters},
        Role,
    },
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    ///
    /// Find accounts of the association matching filters.
    /// Identical searches are answered from cache.
    ///
    async fn search_users(
        &self,
        filters: UserFilters,
        page: PageRequest,
    ) -> Result<PageResponse<User>, Error>;

    ///
    /// ### Errors
    /// - [Error::Api] with status 404 when account does not exist
    ///
    async fn get_user(&self, id: i64) -> Result<User, Error>;

    async fn create_user(&self, user: CreateUserRequest) -> Result<User, Error>;

    async fn update_user(&self, id: i64, user: UpdateUserRequest) -> Result<User, Error>;

    async fn update_role(&self, id: i64, role: Role) -> Result<User, Error>;

    async fn enable_user(&self, id: i64) -> Result<User, Error>;

    async fn disable_user(&self, id: i64) -> Result<User, Error>;

    ///
    /// Update profile of the logged in user. Stored session user
    /// is replaced with the response.
    ///
    async fn update_profile(&self, profile: UpdateProfileRequest) -> Result<User, Error>;
}
