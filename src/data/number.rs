/// First run of ASCII digits in `s`, parsed base-10.
///
/// `None` means the string has no digits at all. A run too long for `u64`
/// saturates to `u64::MAX`.
pub fn extract_number(s: &str) -> Option<u64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    Some(digits[..end].parse().unwrap_or(u64::MAX))
}
