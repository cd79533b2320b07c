use crate::customer::CustomerDirectory;
use crate::equipment::EquipmentType;
use crate::time::local_today;
use crate::windows::available_time_windows;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerContext {
    pub customer_name: String,
    pub equipment_type: EquipmentType,
    pub last_service_date: Option<NaiveDate>,
    pub current_date: NaiveDate,
    pub available_time_windows: Vec<String>,
}

/// Resolves a phone number against the seeded directory, dated today.
///
/// Unknown or malformed numbers resolve to the default record; this never
/// fails.
pub fn resolve_by_phone(phone: &str) -> CustomerContext {
    resolve_by_phone_on(phone, local_today())
}

pub fn resolve_by_phone_on(phone: &str, today: NaiveDate) -> CustomerContext {
    let record = CustomerDirectory::seeded().resolve(phone);
    CustomerContext {
        customer_name: record.name.to_string(),
        equipment_type: record.equipment_type,
        last_service_date: record.last_service_date,
        current_date: today,
        available_time_windows: available_time_windows(),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_by_phone, resolve_by_phone_on};
    use crate::customer::DEFAULT_PHONE;
    use crate::equipment::EquipmentType;
    use crate::windows::TIME_WINDOWS;
    use chrono::{Local, NaiveDate};

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn resolves_seeded_customer() {
        let today = day(2025, 3, 4);
        let ctx = resolve_by_phone_on("+15559876543", today);
        assert_eq!(ctx.customer_name, "Sarah Johnson");
        assert_eq!(ctx.equipment_type, EquipmentType::Hvac);
        assert_eq!(ctx.last_service_date, Some(day(2023, 9, 20)));
        assert_eq!(ctx.current_date, today);
    }

    #[test]
    fn unknown_phone_matches_default_record() {
        let today = day(2025, 3, 4);
        let unknown = resolve_by_phone_on("+10000000000", today);
        let default = resolve_by_phone_on(DEFAULT_PHONE, today);
        assert_eq!(unknown, default);
        assert_eq!(unknown.customer_name, "John Smith");
        assert_eq!(unknown.equipment_type, EquipmentType::Furnace);
    }

    #[test]
    fn context_carries_full_catalog() {
        let ctx = resolve_by_phone_on("+15555551212", day(2025, 3, 4));
        assert_eq!(ctx.available_time_windows.len(), TIME_WINDOWS.len());
        assert_eq!(ctx.available_time_windows, TIME_WINDOWS);
    }

    #[test]
    fn wall_clock_variant_uses_today() {
        let before = Local::now().date_naive();
        let ctx = resolve_by_phone("");
        let after = Local::now().date_naive();
        assert!(ctx.current_date == before || ctx.current_date == after);
    }

    #[test]
    fn context_serializes_dates_as_iso() {
        let ctx = resolve_by_phone_on(DEFAULT_PHONE, day(2025, 3, 4));
        let value = serde_json::to_value(&ctx).expect("serialize");
        assert_eq!(value["current_date"], "2025-03-04");
        assert_eq!(value["last_service_date"], "2024-01-15");
        assert_eq!(value["equipment_type"], "furnace");
        assert_eq!(value["available_time_windows"].as_array().unwrap().len(), 10);
    }
}
