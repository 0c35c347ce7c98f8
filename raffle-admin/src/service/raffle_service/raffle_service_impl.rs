use super::RaffleService;
use crate::{
    api::ApiClient,
    cache::{cache_key, search_params, ResponseCache},
    dto::{
        input::{EmptyResponse, PageResponse, Raffle, RaffleImage, RaffleStatistics},
        output::{
            PageRequest, RaffleFilters, RaffleImageUpload, RaffleRequest, UpdateRaffleStatusRequest,
        },
        RaffleStatus,
    },
    error::Error,
    service::raffle_statistics_update_service::RaffleStatisticsUpdateService,
};
use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tokio::sync::{
    broadcast::{self, error::TryRecvError},
    Mutex,
};

pub struct RaffleServiceImpl {
    api: Arc<ApiClient>,
    search_cache: ResponseCache<String, PageResponse<Raffle>>,
    raffle_cache: ResponseCache<i64, Raffle>,
    statistics_cache: ResponseCache<i64, RaffleStatistics>,
    statistics_updates: Mutex<broadcast::Receiver<i64>>,
}

impl RaffleServiceImpl {
    pub fn new(
        api: Arc<ApiClient>,
        statistics_update_service: &RaffleStatisticsUpdateService,
    ) -> Self {
        Self {
            api,
            search_cache: ResponseCache::new(),
            raffle_cache: ResponseCache::new(),
            statistics_cache: ResponseCache::new(),
            statistics_updates: Mutex::new(statistics_update_service.subscribe()),
        }
    }

    ///
    /// Drops cached entries of raffles announced since the last read.
    /// Lagging behind the announcements drops every entry.
    ///
    async fn apply_statistics_updates(&self) {
        let mut statistics_updates = self.statistics_updates.lock().await;

        loop {
            match statistics_updates.try_recv() {
                Ok(raffle_id) => {
                    tracing::debug!(raffle_id, "invalidating raffle after statistics update");
                    self.raffle_cache.invalidate(&raffle_id).await;
                    self.statistics_cache.invalidate(&raffle_id).await;
                    self.search_cache.clear().await;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "missed statistics updates, clearing raffle caches");
                    self.clear_caches().await;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    async fn clear_caches(&self) {
        self.search_cache.clear().await;
        self.raffle_cache.clear().await;
        self.statistics_cache.clear().await;
    }

    fn raffle_path(&self, id: i64, suffix: &str) -> Result<String, Error> {
        self.api.association_path(&format!("/raffles/{id}{suffix}"))
    }
}

#[async_trait]
impl RaffleService for RaffleServiceImpl {
    async fn search_raffles(
        &self,
        filters: RaffleFilters,
        page: PageRequest,
    ) -> Result<PageResponse<Raffle>, Error> {
        self.apply_statistics_updates().await;

        let key = cache_key(&filters, &page);
        if let Some(cached) = self.search_cache.get(&key).await {
            tracing::debug!(%key, "raffle search answered from cache");
            return Ok(cached);
        }

        tracing::info!("searching raffles");
        tracing::trace!(?filters, ?page);

        let path = self.api.association_path("/raffles")?;
        let raffles = self
            .api
            .get::<PageResponse<Raffle>>(&path, &search_params(&filters, &page))
            .await?
            .into_data()?;
        tracing::info!(count = raffles.content.len(), "found raffles");

        self.search_cache.insert(key, raffles.clone()).await;

        Ok(raffles)
    }

    async fn get_raffle(&self, id: i64) -> Result<Raffle, Error> {
        self.apply_statistics_updates().await;

        if let Some(cached) = self.raffle_cache.get(&id).await {
            return Ok(cached);
        }

        tracing::info!(id, "finding raffle");

        let path = self.raffle_path(id, "")?;
        let raffle = self.api.get::<Raffle>(&path, &[]).await?.into_data()?;
        tracing::info!(id, "found raffle");

        self.raffle_cache.insert(id, raffle.clone()).await;

        Ok(raffle)
    }

    async fn get_statistics(&self, id: i64) -> Result<RaffleStatistics, Error> {
        self.apply_statistics_updates().await;

        if let Some(cached) = self.statistics_cache.get(&id).await {
            return Ok(cached);
        }

        tracing::info!(id, "finding raffle statistics");

        let path = self.raffle_path(id, "/statistics")?;
        let statistics = self
            .api
            .get::<RaffleStatistics>(&path, &[])
            .await?
            .into_data()?;

        self.statistics_cache.insert(id, statistics.clone()).await;

        Ok(statistics)
    }

    async fn create_raffle(&self, raffle: RaffleRequest) -> Result<Raffle, Error> {
        tracing::info!("creating raffle");
        tracing::trace!(?raffle);

        let path = self.api.association_path("/raffles")?;
        let raffle = self
            .api
            .post::<_, Raffle>(&path, &raffle)
            .await?
            .into_data()?;
        tracing::info!(id = raffle.id, "created raffle");

        self.clear_caches().await;

        Ok(raffle)
    }

    async fn update_raffle(&self, id: i64, raffle: RaffleRequest) -> Result<Raffle, Error> {
        tracing::info!(id, "updating raffle");
        tracing::trace!(?raffle);

        let path = self.raffle_path(id, "")?;
        let raffle = self
            .api
            .put::<_, Raffle>(&path, &raffle)
            .await?
            .into_data()?;
        tracing::info!(id, "updated raffle");

        self.clear_caches().await;

        Ok(raffle)
    }

    async fn delete_raffle(&self, id: i64) -> Result<(), Error> {
        tracing::info!(id, "deleting raffle");

        let path = self.raffle_path(id, "")?;
        self.api.delete::<EmptyResponse>(&path).await?;
        tracing::info!(id, "deleted raffle");

        self.clear_caches().await;

        Ok(())
    }

    async fn update_status(&self, id: i64, status: RaffleStatus) -> Result<Raffle, Error> {
        tracing::info!(id, %status, "updating raffle status");

        let path = self.raffle_path(id, "/status")?;
        let raffle = self
            .api
            .put::<_, Raffle>(&path, &UpdateRaffleStatusRequest { status })
            .await?
            .into_data()?;
        tracing::info!(id, status = %raffle.status, "updated raffle status");

        self.clear_caches().await;

        Ok(raffle)
    }

    async fn upload_image(&self, id: i64, image: RaffleImageUpload) -> Result<RaffleImage, Error> {
        tracing::info!(
            id,
            file_name = %image.file_name,
            size = image.content.len(),
            "uploading raffle image"
        );

        let part = Part::bytes(image.content)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|err| anyhow!("invalid image content type: {err}"))?;
        let form = Form::new().part("file", part);

        let path = self.raffle_path(id, "/images")?;
        let image = self
            .api
            .post_multipart::<RaffleImage>(&path, form)
            .await?
            .into_data()?;
        tracing::info!(id, image_id = image.id, "uploaded raffle image");

        self.clear_caches().await;

        Ok(image)
    }

    async fn delete_image(&self, id: i64, image_id: i64) -> Result<(), Error> {
        tracing::info!(id, image_id, "deleting raffle image");

        let path = self.raffle_path(id, &format!("/images/{image_id}"))?;
        self.api.delete::<EmptyResponse>(&path).await?;
        tracing::info!(id, image_id, "deleted raffle image");

        self.clear_caches().await;

        Ok(())
    }
}
