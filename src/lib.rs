mod bounds;
mod codec;
mod error;
mod index;
mod instant;
mod interval;
mod sequence;

pub use bounds::Bounds;
pub use codec::parse;
pub use error::{Error, Result};
pub use index::RangeIndex;
pub use instant::{Instant, Timestamp, LITERAL_FORMAT};
pub use interval::{Interval, Overlap};
pub use sequence::Sequence;
