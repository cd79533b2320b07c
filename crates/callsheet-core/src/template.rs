use crate::context::{resolve_by_phone_on, CustomerContext};
use crate::time::{format_date, local_today};
use crate::windows::{join_time_windows, TEMPLATE_WINDOW_LIMIT};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_PREVIOUS_SERVICE: &str = "No previous service";

/// String substitution variables for an outbound message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateFields {
    pub current_date: String,
    pub last_service_date: String,
    pub available_time_windows: String,
    pub customer_name: String,
    pub equipment_type: String,
}

impl TemplateFields {
    /// Only the first [`TEMPLATE_WINDOW_LIMIT`] slots are rendered, even
    /// though the context carries the whole catalog.
    pub fn from_context(ctx: &CustomerContext) -> Self {
        Self {
            current_date: format_date(ctx.current_date),
            last_service_date: ctx
                .last_service_date
                .map(format_date)
                .unwrap_or_else(|| NO_PREVIOUS_SERVICE.to_string()),
            available_time_windows: join_time_windows(
                &ctx.available_time_windows,
                TEMPLATE_WINDOW_LIMIT,
            ),
            customer_name: ctx.customer_name.clone(),
            equipment_type: ctx.equipment_type.as_str().to_string(),
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("current_date", self.current_date.as_str()),
            ("last_service_date", self.last_service_date.as_str()),
            ("available_time_windows", self.available_time_windows.as_str()),
            ("customer_name", self.customer_name.as_str()),
            ("equipment_type", self.equipment_type.as_str()),
        ]
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("current_date".to_string(), self.current_date),
            ("last_service_date".to_string(), self.last_service_date),
            (
                "available_time_windows".to_string(),
                self.available_time_windows,
            ),
            ("customer_name".to_string(), self.customer_name),
            ("equipment_type".to_string(), self.equipment_type),
        ])
    }
}

pub fn to_template_fields(phone: &str) -> BTreeMap<String, String> {
    template_fields_on(phone, local_today()).into_map()
}

pub fn template_fields_on(phone: &str, today: NaiveDate) -> TemplateFields {
    TemplateFields::from_context(&resolve_by_phone_on(phone, today))
}
