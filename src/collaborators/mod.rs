pub mod channel_queue;
pub mod memory_table;
pub mod queue;
pub mod table;

pub use channel_queue::{ChannelQueue, RouterActor};
pub use memory_table::MemoryTable;
pub use queue::{QueueCollector, QueueError};
pub use table::{
    MarketplaceRecord, RecordKey, TableError, TableOperation, TableOperationType, TableResult,
    TableStore,
};
