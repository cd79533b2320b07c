/// Appointment slots offered to every customer, in display order.
pub const TIME_WINDOWS: [&str; 10] = [
    "Monday 9:00 AM - 12:00 PM",
    "Monday 1:00 PM - 5:00 PM",
    "Tuesday 9:00 AM - 12:00 PM",
    "Tuesday 1:00 PM - 5:00 PM",
    "Wednesday 9:00 AM - 12:00 PM",
    "Wednesday 1:00 PM - 5:00 PM",
    "Thursday 9:00 AM - 12:00 PM",
    "Thursday 1:00 PM - 5:00 PM",
    "Friday 9:00 AM - 12:00 PM",
    "Friday 1:00 PM - 5:00 PM",
];

/// Number of slots surfaced in rendered template fields.
pub const TEMPLATE_WINDOW_LIMIT: usize = 5;

pub fn available_time_windows() -> Vec<String> {
    TIME_WINDOWS.iter().map(|window| window.to_string()).collect()
}

pub fn join_time_windows<S: AsRef<str>>(windows: &[S], limit: usize) -> String {
    windows
        .iter()
        .take(limit)
        .map(|window| window.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}
