/// Группирует целую часть числа запятыми (en-US)
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Форматирует число с разделителями тысяч и фиксированным числом знаков
///
/// # Примеры
/// ```
/// use analytics::shared::format::format_with_commas;
/// assert_eq!(format_with_commas(1234567.891, 1), "1,234,567.9");
/// assert_eq!(format_with_commas(42.0, 2), "42.00");
/// ```
pub fn format_with_commas(num: f64, decimals: usize) -> String {
    if !num.is_finite() {
        return num.to_string();
    }
    let formatted = format!("{:.*}", decimals, num.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    // "-0.0" не показываем
    if num < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    result
}

/// Компактная запись: 1.2K, 3.4M, 5.6B; меньше тысячи округляется до целого
pub fn format_compact(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{}B", format_with_commas(num / 1_000_000_000.0, 1))
    } else if num >= 1_000_000.0 {
        format!("{}M", format_with_commas(num / 1_000_000.0, 1))
    } else if num >= 1_000.0 {
        format!("{}K", format_with_commas(num / 1_000.0, 1))
    } else {
        format_with_commas(num.round(), 0)
    }
}
