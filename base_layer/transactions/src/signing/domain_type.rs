// Copyright 2024 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use txsig_common_types::types::{DomainType, TransactionType, DOMAIN_EXECUTION_TRANSACTION_BASE};

/// The signing domain type of an execution transaction type: [`DOMAIN_EXECUTION_TRANSACTION_BASE`] with the byte at
/// [`DomainType::TRANSACTION_TYPE_INDEX`] replaced by the type tag.
///
/// Every one of the 256 tags maps to a distinct domain type, and all of them stay inside the execution namespace.
pub fn domain_type_for_transaction_type(tx_type: TransactionType) -> DomainType {
    let mut bytes = *DOMAIN_EXECUTION_TRANSACTION_BASE.as_bytes();
    bytes[DomainType::TRANSACTION_TYPE_INDEX] = tx_type.as_u8();
    DomainType::new(bytes)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use txsig_common_types::types::DOMAIN_APPLICATION_MASK;

    use super::*;

    #[test]
    fn reference_type() {
        let domain_type = domain_type_for_transaction_type(TransactionType::new(0xab));
        assert_eq!(domain_type.to_hex(), "0x01ab0002");
    }

    #[test]
    fn injective_over_all_tags() {
        let all = (0..=u8::MAX)
            .map(|t| domain_type_for_transaction_type(TransactionType::new(t)))
            .collect::<HashSet<_>>();
        assert_eq!(all.len(), 256);
    }

    #[test]
    fn stays_in_the_execution_namespace() {
        for t in 0..=u8::MAX {
            let domain_type = domain_type_for_transaction_type(TransactionType::new(t));
            assert!(domain_type.is_execution_transaction());
            assert!(domain_type.is_execution());
            assert!(!domain_type.is_application());
            assert_ne!(domain_type, DOMAIN_APPLICATION_MASK);
            assert_eq!(domain_type.as_bytes()[0], 0x01);
            assert_eq!(&domain_type.as_bytes()[2..], &[0x00, 0x02]);
        }
    }
}
