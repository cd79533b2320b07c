/// Canonicalises a North American phone number into the `+1XXXXXXXXXX`
/// form used as directory keys.
///
/// Formatting characters are dropped and anything after an extension
/// marker is ignored. Numbers that do not look like NANP numbers keep
/// their digits (and leading `+`) unchanged.
pub fn canonical_phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut digits = String::new();
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        if matches!(ch, 'x' | 'X' | '#' | ';' | ',') {
            break;
        }
    }

    if digits.is_empty() {
        return None;
    }

    let canonical = if trimmed.starts_with('+') {
        format!("+{digits}")
    } else if digits.len() == 10 {
        format!("+1{digits}")
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+{digits}")
    } else {
        digits
    };
    Some(canonical)
}
