//! Price formatting.
//!
//! Prices are whole rupees. Display uses the Indian numbering system: the
//! last three digits form one group and every group above it has two digits
//! (`4500000` -> `45,00,000`).

/// Groups the digits of `amount` the Indian way.
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    // Leading group is one or two digits, the rest are pairs.
    let first = head.len() % 2;
    let first = if first == 0 { 2 } else { first };
    out.push_str(&head[..first]);
    for pair in head.as_bytes()[first..].chunks(2) {
        out.push(',');
        out.extend(pair.iter().map(|&b| char::from(b)));
    }

    out.push(',');
    out.push_str(tail);
    out
}

/// Formats `amount` with the rupee sign, e.g. `₹25,000`.
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        let cases = [
            (0, "0"),
            (999, "999"),
            (1_000, "1,000"),
            (25_000, "25,000"),
            (100_000, "1,00,000"),
            (4_500_000, "45,00,000"),
            (12_345_678, "1,23,45,678"),
            (987_654_321, "98,76,54,321"),
        ];

        for (amount, expected) in cases {
            assert_eq!(group_indian(amount), expected, "amount {amount}");
        }
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(95_000), "₹95,000");
        assert_eq!(format_rupees(500), "₹500");
    }
}
