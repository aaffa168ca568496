pub mod amount;
pub mod asset;
pub mod balance;
pub mod pool;
pub mod price;
pub mod snapshot;

pub use amount::DepositAmount;
pub use asset::{AssetMetadata, AssetSymbol};
pub use balance::BalanceSnapshot;
pub use pool::PoolSnapshot;
pub use price::PriceSet;
pub use snapshot::{AssetSnapshot, MarketSnapshot};
