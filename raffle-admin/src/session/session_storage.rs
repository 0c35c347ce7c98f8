use super::Error;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";
pub const ASSOCIATION_ID_KEY: &str = "associationId";

#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    ///
    /// Removing missing key is not an error
    ///
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}
