use super::{Error, SessionStorage, ACCESS_TOKEN_KEY, ASSOCIATION_ID_KEY, USER_KEY};
use crate::dto::input::User;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::watch;

///
/// Typed view over [SessionStorage].
///
/// Current user is additionally published on a watch channel
/// so views can react to login and logout.
///
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current_user: watch::Sender<Option<User>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let user = match Self::read_user(storage.as_ref()) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(%err, "ignoring stored user");
                None
            }
        };
        let (current_user, _) = watch::channel(user);

        Self {
            storage,
            current_user,
        }
    }

    fn read_user(storage: &dyn SessionStorage) -> Result<Option<User>, Error> {
        let Some(user) = storage.get_item(USER_KEY)? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&user)?))
    }

    pub fn access_token(&self) -> Result<Option<String>, Error> {
        self.storage.get_item(ACCESS_TOKEN_KEY)
    }

    pub fn set_access_token(&self, access_token: &str) -> Result<(), Error> {
        self.storage.set_item(ACCESS_TOKEN_KEY, access_token)
    }

    ///
    /// Checks whether stored token is usable at `now`.
    /// Missing, malformed and expired tokens are all unusable.
    ///
    pub fn has_valid_token(&self, now: OffsetDateTime) -> bool {
        let access_token = match self.access_token() {
            Ok(Some(access_token)) => access_token,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(%err, "failed to read access token");
                return false;
            }
        };

        let claims = match access_token::decode_claims(&access_token) {
            Ok(claims) => claims,
            Err(err) => {
                tracing::warn!(%err, "stored access token is malformed");
                return false;
            }
        };

        match access_token::is_expired(&claims, now) {
            Ok(expired) => !expired,
            Err(err) => {
                tracing::warn!(%err, "stored access token has invalid expiration");
                false
            }
        }
    }

    ///
    /// ### Errors
    /// - [Error::Corrupted] when stored value is not a number
    ///
    pub fn association_id(&self) -> Result<Option<i64>, Error> {
        let Some(association_id) = self.storage.get_item(ASSOCIATION_ID_KEY)? else {
            return Ok(None);
        };

        let association_id = association_id
            .parse()
            .map_err(|_| Error::Corrupted("association id is not a number"))?;

        Ok(Some(association_id))
    }

    pub fn set_association_id(&self, association_id: i64) -> Result<(), Error> {
        self.storage
            .set_item(ASSOCIATION_ID_KEY, &association_id.to_string())
    }

    pub fn user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn set_user(&self, user: &User) -> Result<(), Error> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(USER_KEY, &json)?;
        self.current_user.send_replace(Some(user.clone()));

        Ok(())
    }

    pub fn subscribe_user(&self) -> watch::Receiver<Option<User>> {
        self.current_user.subscribe()
    }

    ///
    /// Removes every session key. In-memory user is cleared
    /// even when storage fails.
    ///
    /// ### Errors
    /// First storage failure, after removal of every key was attempted
    ///
    pub fn clear(&self) -> Result<(), Error> {
        self.current_user.send_replace(None);

        let mut first_error = None;
        for key in [ACCESS_TOKEN_KEY, USER_KEY, ASSOCIATION_ID_KEY] {
            if let Err(err) = self.storage.remove_item(key) {
                tracing::warn!(key, %err, "failed to remove session key");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::Role,
        session::{MemorySessionStorage, MockSessionStorage},
    };

    fn user() -> User {
        User {
            id: 3,
            email: "john@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone_number: None,
            role: Role::Admin,
            enabled: true,
            association_id: Some(7),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn user_is_restored_from_storage() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage
            .set_item(USER_KEY, &serde_json::to_string(&user()).unwrap())
            .unwrap();

        let store = SessionStore::new(storage);

        assert_eq!(store.user(), Some(user()));
    }

    #[test]
    fn corrupted_user_is_ignored() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage.set_item(USER_KEY, "{not json").unwrap();

        let store = SessionStore::new(storage);

        assert_eq!(store.user(), None);
    }

    #[test]
    fn association_id_corrupted() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage.set_item(ASSOCIATION_ID_KEY, "seven").unwrap();
        let store = SessionStore::new(storage);

        let result = store.association_id();

        assert!(matches!(result, Err(Error::Corrupted(_))));
    }

    #[test]
    fn set_user_notifies_subscribers() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        let mut receiver = store.subscribe_user();

        store.set_user(&user()).unwrap();

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), Some(user()));
    }

    #[test]
    fn clear_removes_every_key() {
        let storage = Arc::new(MemorySessionStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_access_token("token").unwrap();
        store.set_association_id(7).unwrap();
        store.set_user(&user()).unwrap();

        store.clear().unwrap();

        assert_eq!(store.access_token().unwrap(), None);
        assert_eq!(store.association_id().unwrap(), None);
        assert_eq!(store.user(), None);
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
    }

    #[test]
    fn has_valid_token_without_token() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));

        assert!(!store.has_valid_token(OffsetDateTime::now_utc()));
    }

    #[test]
    fn has_valid_token_malformed_token() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        store.set_access_token("not-a-jwt").unwrap();

        assert!(!store.has_valid_token(OffsetDateTime::now_utc()));
    }

    #[test]
    fn has_valid_token_expiration() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        store
            .set_access_token(&access_token::test::create_jwt("3", 1_800_000_000))
            .unwrap();

        let before = OffsetDateTime::from_unix_timestamp(1_799_999_999).unwrap();
        let after = OffsetDateTime::from_unix_timestamp(1_800_000_000).unwrap();

        assert!(store.has_valid_token(before));
        assert!(!store.has_valid_token(after));
    }

    #[test]
    fn clear_storage_failure_still_clears_user() {
        let mut storage = MockSessionStorage::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage.expect_set_item().returning(|_, _| Ok(()));
        storage
            .expect_remove_item()
            .returning(|_| Err(Error::Corrupted("disk gone")));
        let store = SessionStore::new(Arc::new(storage));
        store.set_user(&user()).unwrap();

        let result = store.clear();

        assert!(result.is_err());
        assert_eq!(store.user(), None);
    }

    #[test]
    fn clear_storage_failure_still_removes_other_keys() {
        let mut storage = MockSessionStorage::new();
        storage.expect_get_item().returning(|_| Ok(None));
        storage
            .expect_remove_item()
            .withf(|key| key == ACCESS_TOKEN_KEY)
            .times(1)
            .returning(|_| Err(Error::Corrupted("disk gone")));
        storage
            .expect_remove_item()
            .withf(|key| key == USER_KEY)
            .times(1)
            .returning(|_| Ok(()));
        storage
            .expect_remove_item()
            .withf(|key| key == ASSOCIATION_ID_KEY)
            .times(1)
            .returning(|_| Ok(()));
        let store = SessionStore::new(Arc::new(storage));

        let result = store.clear();

        assert!(matches!(result, Err(Error::Corrupted("disk gone"))));
    }
}
