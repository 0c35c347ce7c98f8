use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

///
/// Publish/subscribe subject announcing raffles whose statistics
/// changed because of an order action.
///
/// Publishing without subscribers is not an error.
///
pub struct RaffleStatisticsUpdateService {
    sender: broadcast::Sender<i64>,
}

impl RaffleStatisticsUpdateService {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self { sender }
    }

    pub fn notify_raffle_updated(&self, raffle_id: i64) {
        let receivers = self.sender.send(raffle_id).unwrap_or_default();
        tracing::debug!(raffle_id, receivers, "raffle statistics update published");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<i64> {
        self.sender.subscribe()
    }
}

impl Default for RaffleStatisticsUpdateService {
    fn default() -> Self {
        Self::new()
    }
}
