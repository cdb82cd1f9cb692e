//! Individual value generators for the telemetry record fields.

pub mod numeric;
pub mod timestamp;
pub mod uuid;

pub use self::numeric::{generate_rounded_range, round_to};
pub use self::timestamp::local_timestamp_now;
pub use self::uuid::generate_uuid_v4;
