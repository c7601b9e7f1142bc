//! # Ledger Record
//!
//! The four loosely-typed store entries modeled as one record.
//!
//! | Key | Field | Default |
//! |-----|-------|---------|
//! | `totalCrops` | [`LedgerSnapshot::total_crops`] | `0` |
//! | `totalDiseases` | [`LedgerSnapshot::total_diseases`] | `0` |
//! | `favoriteCropName` | [`LedgerSnapshot::favorite_crop_name`] | `"Rice"` |
//! | `favoriteCropCount` | [`LedgerSnapshot::favorite_crop_count`] | `0` |
//!
//! Numeric entries are stored as decimal strings. Anything that does not
//! parse as a non-negative integer decodes as `0`.

/// Store key for the cumulative crop count
pub const TOTAL_CROPS_KEY: &str = "totalCrops";
/// Store key for the cumulative disease detection count
pub const TOTAL_DISEASES_KEY: &str = "totalDiseases";
/// Store key for the favorite crop name
pub const FAVORITE_CROP_NAME_KEY: &str = "favoriteCropName";
/// Store key for the favorite crop count
pub const FAVORITE_CROP_COUNT_KEY: &str = "favoriteCropCount";

/// Favorite crop name used before anything has been recorded
pub const DEFAULT_FAVORITE_CROP: &str = "Rice";

/// A crop prediction as seen by the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedCrop {
    pub name: String,
    /// Confidence on a 0-100 scale
    pub confidence: f64,
}

impl PredictedCrop {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Point-in-time view of every ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub total_crops: u64,
    pub total_diseases: u64,
    pub favorite_crop_name: String,
    pub favorite_crop_count: u64,
}

impl Default for LedgerSnapshot {
    fn default() -> Self {
        Self {
            total_crops: 0,
            total_diseases: 0,
            favorite_crop_name: DEFAULT_FAVORITE_CROP.to_string(),
            favorite_crop_count: 0,
        }
    }
}

/// The favorite crop and how often it has been recommended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTally {
    pub name: String,
    pub count: u64,
}

impl Default for FavoriteTally {
    fn default() -> Self {
        Self {
            name: DEFAULT_FAVORITE_CROP.to_string(),
            count: 0,
        }
    }
}

impl FavoriteTally {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Apply one recommended crop name.
    ///
    /// A matching name bumps the count. A different name only takes over
    /// while the count is zero, so an established favorite is never
    /// displaced by a crop that later overtakes it.
    pub fn observe(&mut self, crop: &str) {
        if crop == self.name {
            self.count = self.count.saturating_add(1);
        } else if self.count == 0 {
            self.name = crop.to_string();
            self.count = 1;
        }
    }

    /// Apply a batch of predictions in order.
    pub fn observe_all<'a, I>(&mut self, crops: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for crop in crops {
            self.observe(crop);
        }
    }
}

impl LedgerSnapshot {
    /// Build a snapshot from the raw store values, applying defaults.
    pub fn decode(
        total_crops: Option<&str>,
        total_diseases: Option<&str>,
        favorite_crop_name: Option<&str>,
        favorite_crop_count: Option<&str>,
    ) -> Self {
        Self {
            total_crops: decode_count(total_crops),
            total_diseases: decode_count(total_diseases),
            favorite_crop_name: decode_name(favorite_crop_name),
            favorite_crop_count: decode_count(favorite_crop_count),
        }
    }
}

/// Decode a stored counter. Absent or malformed values count as zero.
pub fn decode_count(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Decode the stored favorite name, falling back to [`DEFAULT_FAVORITE_CROP`].
pub fn decode_name(raw: Option<&str>) -> String {
    match raw {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_FAVORITE_CROP.to_string(),
    }
}
