use crate::equipment::EquipmentType;
use chrono::NaiveDate;
use serde::Serialize;

/// Key of the record every unknown phone number falls back to.
pub const DEFAULT_PHONE: &str = "+15551234567";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    pub name: &'static str,
    pub equipment_type: EquipmentType,
    pub last_service_date: Option<NaiveDate>,
}

const fn service_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("seeded service date is not a calendar date"),
    }
}

static SEEDED: [(&str, CustomerRecord); 3] = [
    (
        DEFAULT_PHONE,
        CustomerRecord {
            name: "John Smith",
            equipment_type: EquipmentType::Furnace,
            last_service_date: Some(service_date(2024, 1, 15)),
        },
    ),
    (
        "+15559876543",
        CustomerRecord {
            name: "Sarah Johnson",
            equipment_type: EquipmentType::Hvac,
            last_service_date: Some(service_date(2023, 9, 20)),
        },
    ),
    (
        "+15555551212",
        CustomerRecord {
            name: "Mike Davis",
            equipment_type: EquipmentType::HotWaterHeater,
            last_service_date: Some(service_date(2024, 2, 10)),
        },
    ),
];

/// Read-only phone number to customer table.
///
/// The table must contain an entry keyed [`DEFAULT_PHONE`]; [`resolve`]
/// relies on it so that lookups never fail.
///
/// [`resolve`]: CustomerDirectory::resolve
#[derive(Debug, Clone, Copy)]
pub struct CustomerDirectory {
    entries: &'static [(&'static str, CustomerRecord)],
    default_index: usize,
}

impl CustomerDirectory {
    pub fn seeded() -> Self {
        Self {
            entries: &SEEDED,
            default_index: 0,
        }
    }

    pub fn lookup(&self, phone: &str) -> Option<&'static CustomerRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == phone)
            .map(|(_, record)| record)
    }

    pub fn resolve(&self, phone: &str) -> &'static CustomerRecord {
        self.lookup(phone).unwrap_or_else(|| self.default_record())
    }

    pub fn default_record(&self) -> &'static CustomerRecord {
        &self.entries[self.default_index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static CustomerRecord)> {
        self.entries.iter().map(|(phone, record)| (*phone, record))
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerDirectory, DEFAULT_PHONE};
    use crate::equipment::EquipmentType;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn seeded_records_match_by_exact_key() {
        let directory = CustomerDirectory::seeded();

        let john = directory.lookup(DEFAULT_PHONE).expect("john");
        assert_eq!(john.name, "John Smith");
        assert_eq!(john.equipment_type, EquipmentType::Furnace);
        assert_eq!(john.last_service_date, date(2024, 1, 15));

        let sarah = directory.lookup("+15559876543").expect("sarah");
        assert_eq!(sarah.name, "Sarah Johnson");
        assert_eq!(sarah.equipment_type, EquipmentType::Hvac);
        assert_eq!(sarah.last_service_date, date(2023, 9, 20));

        let mike = directory.lookup("+15555551212").expect("mike");
        assert_eq!(mike.name, "Mike Davis");
        assert_eq!(mike.equipment_type, EquipmentType::HotWaterHeater);
        assert_eq!(mike.last_service_date, date(2024, 2, 10));
    }

    #[test]
    fn lookup_does_not_normalize_keys() {
        let directory = CustomerDirectory::seeded();
        assert!(directory.lookup("15559876543").is_none());
        assert!(directory.lookup(" +15559876543").is_none());
        assert!(directory.lookup("(555) 987-6543").is_none());
    }

    #[test]
    fn resolve_falls_back_to_default_record() {
        let directory = CustomerDirectory::seeded();
        let fallback = directory.default_record();
        for phone in ["", "+10000000000", "not a phone", "+1555123456"] {
            assert_eq!(directory.resolve(phone), fallback, "phone {phone:?}");
        }
        assert_eq!(
            directory.resolve(DEFAULT_PHONE),
            directory.lookup(DEFAULT_PHONE).expect("default")
        );
    }

    #[test]
    fn iter_preserves_table_order() {
        let directory = CustomerDirectory::seeded();
        let phones: Vec<&str> = directory.iter().map(|(phone, _)| phone).collect();
        assert_eq!(phones, vec![DEFAULT_PHONE, "+15559876543", "+15555551212"]);
    }
}
