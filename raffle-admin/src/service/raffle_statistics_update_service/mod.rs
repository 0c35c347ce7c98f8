mod raffle_statistics_update_service;

pub use raffle_statistics_update_service::*;
