use crate::error::CoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Hvac,
    HotWaterHeater,
    Furnace,
}

impl EquipmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentType::Hvac => "hvac",
            EquipmentType::HotWaterHeater => "hot_water_heater",
            EquipmentType::Furnace => "furnace",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match value.as_str() {
            "hvac" => Ok(EquipmentType::Hvac),
            "hot_water_heater" => Ok(EquipmentType::HotWaterHeater),
            "furnace" => Ok(EquipmentType::Furnace),
            _ => Err(CoreError::InvalidEquipmentType(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EquipmentType;
    use crate::error::CoreError;
    use std::str::FromStr;

    #[test]
    fn as_str_matches_serde_labels() {
        for kind in [
            EquipmentType::Hvac,
            EquipmentType::HotWaterHeater,
            EquipmentType::Furnace,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn from_str_accepts_loose_spellings() {
        assert_eq!(
            EquipmentType::from_str(" Hot-Water-Heater ").unwrap(),
            EquipmentType::HotWaterHeater
        );
        assert_eq!(
            EquipmentType::from_str("hot water heater").unwrap(),
            EquipmentType::HotWaterHeater
        );
        assert_eq!(EquipmentType::from_str("HVAC").unwrap(), EquipmentType::Hvac);
    }

    #[test]
    fn from_str_round_trips_labels() {
        for kind in [
            EquipmentType::Hvac,
            EquipmentType::HotWaterHeater,
            EquipmentType::Furnace,
        ] {
            assert_eq!(EquipmentType::from_str(kind.as_str()).unwrap(), kind);
        }
        assert!(EquipmentType::from_str("water_heater").is_err());
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        let err = EquipmentType::from_str("boiler").unwrap_err();
        assert_eq!(err, CoreError::InvalidEquipmentType("boiler".to_string()));
    }
}
