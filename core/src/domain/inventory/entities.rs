use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::inventory::value_objects::UpdateItemInput;

/// Unit applied when the caller does not supply one.
pub const DEFAULT_UNIT: &str = "pz";

/// Items expiring within this many days are URGENT.
pub const URGENT_WITHIN_DAYS: i64 = 3;
/// Items expiring within this many days (but not urgently) are WARNING.
pub const WARNING_WITHIN_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

/// Per-100g nutrition facts as reported by the product database.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    pub energy: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub salt: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub ingredients: Option<String>,
    pub nutrition: Option<NutritionInfo>,
    pub image_url: Option<String>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InventoryItemConfig {
    pub user_id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub expiry_date: NaiveDate,
    pub ingredients: Option<String>,
    pub nutrition: Option<NutritionInfo>,
    pub image_url: Option<String>,
    pub suggestions: Option<Vec<String>>,
}

impl InventoryItem {
    pub fn new(config: InventoryItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            barcode: config.barcode,
            product_name: config.product_name,
            brand: config.brand,
            category: config.category,
            quantity: config.quantity,
            unit: config.unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            expiry_date: config.expiry_date,
            ingredients: config.ingredients,
            nutrition: config.nutrition,
            image_url: config.image_url,
            suggestions: config.suggestions.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        let (now, _) = generate_timestamp();
        self.quantity = quantity;
        self.updated_at = now;
    }

    /// Full-field update. Fields the caller omitted keep their stored value.
    pub fn apply_update(&mut self, input: UpdateItemInput) {
        let (now, _) = generate_timestamp();
        self.product_name = input.product_name;
        self.quantity = input.quantity;
        self.expiry_date = input.expiry_date;
        if let Some(brand) = input.brand {
            self.brand = Some(brand);
        }
        if let Some(unit) = input.unit {
            self.unit = unit;
        }
        self.updated_at = now;
    }
}

/// Urgency classification of an item, derived at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    Expired,
    Urgent,
    Warning,
    Ok,
}

impl ExpiryStatus {
    /// An item that expires today (`days_left == 0`) is already EXPIRED, not
    /// URGENT. Preserved exactly for compatibility with existing clients.
    pub fn classify(days_left: i64) -> Self {
        if days_left <= 0 {
            ExpiryStatus::Expired
        } else if days_left <= URGENT_WITHIN_DAYS {
            ExpiryStatus::Urgent
        } else if days_left <= WARNING_WITHIN_DAYS {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Ok
        }
    }
}

/// Whole days until the item expires, rounded up. Negative once the expiry
/// date is in the past. The expiry date has no time-of-day; it is anchored at
/// midnight UTC, matching how the dates are stored.
pub fn days_until_expiry(expiry_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry_midnight = expiry_date.and_time(NaiveTime::MIN).and_utc();
    let seconds = (expiry_midnight - now).num_seconds();
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) > 0)
}

/// An item annotated with its derived urgency, as returned by list reads.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemWithStatus {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub days_left: i64,
    pub status: ExpiryStatus,
}

impl ItemWithStatus {
    pub fn derive(item: InventoryItem, now: DateTime<Utc>) -> Self {
        let days_left = days_until_expiry(item.expiry_date, now);
        Self {
            item,
            days_left,
            status: ExpiryStatus::classify(days_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expiring_today_has_zero_days_left() {
        assert_eq!(days_until_expiry(date(2025, 10, 20), noon()), 0);
    }

    #[test]
    fn expiring_today_is_expired_not_urgent() {
        let days = days_until_expiry(date(2025, 10, 20), noon());
        assert_eq!(ExpiryStatus::classify(days), ExpiryStatus::Expired);
    }

    #[test]
    fn past_expiry_is_negative_and_expired() {
        let days = days_until_expiry(date(2025, 10, 15), noon());
        assert_eq!(days, -5);
        assert_eq!(ExpiryStatus::classify(days), ExpiryStatus::Expired);
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(
            ExpiryStatus::classify(days_until_expiry(date(2025, 10, 21), noon())),
            ExpiryStatus::Urgent
        );
        assert_eq!(
            ExpiryStatus::classify(days_until_expiry(date(2025, 10, 23), noon())),
            ExpiryStatus::Urgent
        );
        assert_eq!(
            ExpiryStatus::classify(days_until_expiry(date(2025, 10, 24), noon())),
            ExpiryStatus::Warning
        );
        assert_eq!(
            ExpiryStatus::classify(days_until_expiry(date(2025, 10, 27), noon())),
            ExpiryStatus::Warning
        );
        assert_eq!(
            ExpiryStatus::classify(days_until_expiry(date(2025, 10, 28), noon())),
            ExpiryStatus::Ok
        );
    }

    #[test]
    fn days_left_at_exact_midnight_is_whole_difference() {
        let midnight = Utc.with_ymd_and_hms(2025, 10, 20, 0, 0, 0).unwrap();
        assert_eq!(days_until_expiry(date(2025, 10, 23), midnight), 3);
    }

    #[test]
    fn status_is_pure_in_now() {
        let days = days_until_expiry(date(2025, 10, 25), noon());
        assert_eq!(ExpiryStatus::classify(days), ExpiryStatus::classify(days));

        // Same item, later clock: status moves without any write.
        let later = noon() + Duration::days(6);
        let days_later = days_until_expiry(date(2025, 10, 25), later);
        assert_eq!(ExpiryStatus::classify(days_later), ExpiryStatus::Expired);
    }

    #[test]
    fn serialized_status_uses_upper_case_labels() {
        assert_eq!(
            serde_json::to_string(&ExpiryStatus::Expired).unwrap(),
            "\"EXPIRED\""
        );
        assert_eq!(serde_json::to_string(&ExpiryStatus::Ok).unwrap(), "\"OK\"");
    }

    #[test]
    fn unit_defaults_when_absent() {
        let item = InventoryItem::new(InventoryItemConfig {
            user_id: Uuid::new_v4(),
            barcode: "8001234567890".to_string(),
            product_name: "Latte intero".to_string(),
            brand: None,
            category: None,
            quantity: 1,
            unit: None,
            expiry_date: date(2025, 12, 20),
            ingredients: None,
            nutrition: None,
            image_url: None,
            suggestions: None,
        });
        assert_eq!(item.unit, DEFAULT_UNIT);
        assert!(item.suggestions.is_empty());
    }
}
