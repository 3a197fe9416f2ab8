use std::collections::BTreeMap;

// Key that always carries the overall number of available artisans.
pub const TOTAL_KEY: &str = "total";

// Available artisan counts keyed by lower-cased specialty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtisanCounts {
    pub by_specialty: BTreeMap<String, u64>,
    pub total: u64,
}

impl ArtisanCounts {
    // Flatten into the wire shape, with `total` written last so it wins.
    pub fn into_map(self) -> BTreeMap<String, u64> {
        let mut map = self.by_specialty;
        map.insert(TOTAL_KEY.to_string(), self.total);
        map
    }
}

// Landing page statistics computed from live platform data.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformStats {
    pub artisan_count: u64,
    pub completed_bookings: u64,
    pub average_rating: Option<f64>,
}

// Lifecycle states a booking can be persisted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}
