use crate::{
    dto::{
        input::{PageResponse, Raffle, RaffleImage, RaffleStatistics},
        output::{PageRequest, RaffleFilters, RaffleImageUpload, RaffleRequest},
        RaffleStatus,
    },
    error::Error,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaffleService: Send + Sync {
    ///
    /// Find raffles of the association matching filters.
    /// Identical searches are answered from cache.
    ///
    async fn search_raffles(
        &self,
        filters: RaffleFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Raffle>, Error>;

    ///
    /// Find raffle by id. Answered from cache until the raffle
    /// is mutated or its statistics update is announced.
    ///
    /// ### Errors
    /// - [Error::Api] with status 404 when raffle does not exist
    ///
    async fn get_raffle(&self, id: i64) -> Result<Raffle, Error>;

    ///
    /// Ticket and revenue statistics of the raffle
    ///
    async fn get_statistics(&self, id: i64) -> Result<RaffleStatistics, Error>;

    ///
    /// Create new raffle in draft status
    ///
    async fn create_raffle(&self, raffle: RaffleRequest) -> Result<Raffle, Error>;

    async fn update_raffle(&self, id: i64, raffle: RaffleRequest) -> Result<Raffle, Error>;

    async fn delete_raffle(&self, id: i64) -> Result<(), Error>;

    ///
    /// Request status change. The backend decides whether
    /// the transition is allowed.
    ///
    /// ### Errors
    /// - [Error::Api] with code `INVALID_STATUS_TRANSITION`
    ///
    async fn update_status(&self, id: i64, status: RaffleStatus) -> Result<Raffle, Error>;

    async fn upload_image(&self, id: i64, image: RaffleImageUpload) -> Result<RaffleImage, Error>;

    async fn delete_image(&self, id: i64, image_id: i64) -> Result<(), Error>;
}
