mod load;
mod records;

pub use load::{FeedSource, load_records};
pub use records::{InterfaceRecord, protocol_tags, system_ids};
