use crate::commands::{print_json, Context};
use anyhow::Result;
use callsheet_core::time::format_date;
use callsheet_core::{
    canonical_phone, resolve_by_phone, CustomerContext, CustomerDirectory, TemplateFields,
    NO_PREVIOUS_SERVICE,
};
use clap::Args;
use tracing::{debug, Level};

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Phone number to resolve; unknown numbers use the default customer
    pub phone: String,
    /// Canonicalise the number (e.g. "(555) 987-6543" -> "+15559876543")
    #[arg(long)]
    pub normalize: bool,
}

pub fn lookup(ctx: &Context<'_>, args: LookupArgs) -> Result<()> {
    let customer = resolve(ctx, &args);

    if ctx.json {
        return print_json(&customer);
    }

    for line in context_lines(&customer) {
        println!("{line}");
    }
    Ok(())
}

pub fn fields(ctx: &Context<'_>, args: LookupArgs) -> Result<()> {
    let customer = resolve(ctx, &args);
    let fields = TemplateFields::from_context(&customer);

    if ctx.json {
        return print_json(&fields);
    }

    for (name, value) in fields.entries() {
        println!("{name}={value}");
    }
    Ok(())
}

fn resolve(ctx: &Context<'_>, args: &LookupArgs) -> CustomerContext {
    let key = lookup_key(&args.phone, args.normalize || ctx.config.lookup.normalize_phone);
    if tracing::enabled!(Level::DEBUG) {
        match CustomerDirectory::seeded().lookup(&key) {
            Some(record) => debug!(phone = %key, customer = record.name, "customer found"),
            None => debug!(phone = %key, "customer not found, using default record"),
        }
    }
    resolve_by_phone(&key)
}

fn lookup_key(raw: &str, normalize: bool) -> String {
    if !normalize {
        return raw.to_string();
    }
    match canonical_phone(raw) {
        Some(canonical) => {
            debug!(raw, canonical = %canonical, "phone canonicalised");
            canonical
        }
        None => raw.to_string(),
    }
}

fn context_lines(customer: &CustomerContext) -> Vec<String> {
    let last_service = customer
        .last_service_date
        .map(format_date)
        .unwrap_or_else(|| NO_PREVIOUS_SERVICE.to_string());
    let mut lines = vec![
        format!("customer_name: {}", customer.customer_name),
        format!("equipment_type: {}", customer.equipment_type),
        format!("last_service_date: {last_service}"),
        format!("current_date: {}", format_date(customer.current_date)),
        "available_time_windows:".to_string(),
    ];
    lines.extend(
        customer
            .available_time_windows
            .iter()
            .map(|window| format!("  {window}")),
    );
    lines
}
