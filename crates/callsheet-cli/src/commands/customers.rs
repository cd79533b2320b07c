use crate::commands::{print_json, Context};
use anyhow::Result;
use callsheet_core::time::format_date;
use callsheet_core::{CustomerDirectory, EquipmentType, DEFAULT_PHONE, NO_PREVIOUS_SERVICE};
use clap::Args;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct CustomersArgs {
    /// Only list customers with this equipment (hvac|hot_water_heater|furnace)
    #[arg(long, value_name = "TYPE")]
    pub equipment: Option<String>,
}

#[derive(Debug, Serialize)]
struct CustomerListItem {
    phone: &'static str,
    name: &'static str,
    equipment_type: EquipmentType,
    last_service_date: Option<String>,
    default: bool,
}

pub fn list_customers(ctx: &Context<'_>, args: CustomersArgs) -> Result<()> {
    let equipment = args
        .equipment
        .as_deref()
        .map(EquipmentType::from_str)
        .transpose()?;

    let items: Vec<CustomerListItem> = CustomerDirectory::seeded()
        .iter()
        .filter(|(_, record)| equipment.is_none_or(|kind| record.equipment_type == kind))
        .map(|(phone, record)| CustomerListItem {
            phone,
            name: record.name,
            equipment_type: record.equipment_type,
            last_service_date: record.last_service_date.map(format_date),
            default: phone == DEFAULT_PHONE,
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no customers");
        return Ok(());
    }

    for item in items {
        let last_service = item.last_service_date.as_deref().unwrap_or(NO_PREVIOUS_SERVICE);
        let marker = if item.default { "  (default)" } else { "" };
        println!(
            "{}  {}  {}  {}{}",
            item.phone, item.name, item.equipment_type, last_service, marker
        );
    }
    Ok(())
}
