pub mod contacts;
pub mod donations;
pub mod stats;

pub use contacts::ContactService;
pub use donations::DonationService;
pub use stats::StatsService;
