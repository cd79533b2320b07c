pub mod context;
pub mod customer;
pub mod equipment;
pub mod error;
pub mod phone;
pub mod template;
pub mod time;
pub mod windows;

pub use context::{resolve_by_phone, resolve_by_phone_on, CustomerContext};
pub use customer::{CustomerDirectory, CustomerRecord, DEFAULT_PHONE};
pub use equipment::EquipmentType;
pub use error::CoreError;
pub use phone::canonical_phone;
pub use template::{template_fields_on, to_template_fields, TemplateFields, NO_PREVIOUS_SERVICE};
pub use windows::{available_time_windows, join_time_windows, TEMPLATE_WINDOW_LIMIT, TIME_WINDOWS};
