//! Record types for the three generated entity kinds.

use chrono::NaiveDateTime;
use std::fmt;

/// Storage-assigned identifier of a host row.
pub type HostId = i64;

/// Storage-assigned identifier of a listing row.
pub type ListingId = i64;

/// Storage-assigned identifier of a review row.
pub type ReviewId = i64;

/// Kind of accommodation offered by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    EntireHome,
    PrivateRoom,
    SharedRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::EntireHome,
        RoomType::PrivateRoom,
        RoomType::SharedRoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nightly price, rendered as `$<dollars>.<cents>` with two cent digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub dollars: u16,
    pub cents: u8,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars, self.cents)
    }
}

/// A listing owner.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    pub name: String,
    pub is_superhost: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A rentable unit owned by a host.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub name: String,
    pub room_type: RoomType,
    pub minimum_nights: i32,
    pub host_id: HostId,
    pub price: Price,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Feedback left on a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub listing_id: ListingId,
    pub reviewer_name: String,
    pub comments: String,
    pub sentiment: Sentiment,
    pub date: NaiveDateTime,
}
