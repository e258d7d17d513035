use uuid::Uuid;

/// Prefixes distinguish where a reference was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    Booking,
    SupplierPayment,
}

impl ReferenceKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReferenceKind::Booking => "BK",
            ReferenceKind::SupplierPayment => "SP",
        }
    }
}

pub fn generate_reference(kind: ReferenceKind) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.prefix(), token[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_carry_prefix_and_eight_hex_chars() {
        let reference = generate_reference(ReferenceKind::SupplierPayment);
        let (prefix, token) = reference.split_once('-').unwrap();
        assert_eq!(prefix, "SP");
        assert_eq!(token.len(), 8);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn references_are_not_reused() {
        let first = generate_reference(ReferenceKind::Booking);
        let second = generate_reference(ReferenceKind::Booking);
        assert_ne!(first, second);
    }
}
