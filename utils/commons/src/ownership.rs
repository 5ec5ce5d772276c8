use crate::CustomContractError;
use concordium_std::*;

/// Single owner access control. The owner is the only address allowed to
/// withdraw funds and change contract settings.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct Ownership {
    /// `None` once ownership has been renounced.
    owner: Option<Address>,
}

impl Ownership {
    pub fn new(owner: Address) -> Self {
        Self { owner: Some(owner) }
    }

    pub fn owner(&self) -> Option<Address> {
        self.owner
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner.as_ref() == Some(address)
    }

    /// Rejects unless `sender` currently owns the contract.
    pub fn ensure_owner(&self, sender: &Address) -> Result<(), CustomContractError> {
        match &self.owner {
            None => Err(CustomContractError::NoOwner),
            Some(owner) if owner == sender => Ok(()),
            Some(_) => Err(CustomContractError::OwnerOnly),
        }
    }

    pub fn handle_update(
        &mut self,
        sender: Address,
        update: OwnershipUpdate,
    ) -> Result<OwnershipTransferred, CustomContractError> {
        self.ensure_owner(&sender)?;

        let new = match update {
            OwnershipUpdate::Transfer(address) => Some(address),
            OwnershipUpdate::Renounce => None,
        };
        self.owner = new;

        Ok(OwnershipTransferred {
            previous: sender,
            new,
        })
    }
}

#[derive(Debug, SchemaType, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipUpdate {
    /// Hand the contract over to another address.
    Transfer(Address),
    /// Leave the contract without an owner. Owner-only functions become
    /// unavailable for good.
    Renounce,
}

#[derive(Debug, SchemaType, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous: Address,
    pub new: Option<Address>,
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const OWNER_ACCOUNT: AccountAddress = AccountAddress([1; 32]);
    const OWNER_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 1,
    };

    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);

    #[concordium_test]
    fn test_owner_rights() {
        let ownership = Ownership::new(Address::Account(OWNER_ACCOUNT));

        claim!(ownership.is_owner(&Address::Account(OWNER_ACCOUNT)));
        claim!(!ownership.is_owner(&Address::Account(USER_1)));
        claim_eq!(
            ownership.ensure_owner(&Address::Account(OWNER_ACCOUNT)),
            Ok(())
        );
        claim_eq!(
            ownership.ensure_owner(&Address::Account(USER_1)),
            Err(CustomContractError::OwnerOnly)
        );
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut ownership = Ownership::new(Address::Account(OWNER_ACCOUNT));

        let result = ownership.handle_update(
            Address::Account(USER_1),
            OwnershipUpdate::Transfer(Address::Account(USER_1)),
        );
        claim_eq!(result, Err(CustomContractError::OwnerOnly));
        claim_eq!(ownership.owner(), Some(Address::Account(OWNER_ACCOUNT)));

        let result = ownership.handle_update(
            Address::Account(OWNER_ACCOUNT),
            OwnershipUpdate::Transfer(Address::Contract(OWNER_CONTRACT)),
        );
        claim_eq!(
            result,
            Ok(OwnershipTransferred {
                previous: Address::Account(OWNER_ACCOUNT),
                new: Some(Address::Contract(OWNER_CONTRACT)),
            })
        );
        claim!(ownership.is_owner(&Address::Contract(OWNER_CONTRACT)));
        claim!(!ownership.is_owner(&Address::Account(OWNER_ACCOUNT)));

        // Previous owner lost its rights
        let result = ownership.handle_update(
            Address::Account(OWNER_ACCOUNT),
            OwnershipUpdate::Transfer(Address::Account(USER_2)),
        );
        claim_eq!(result, Err(CustomContractError::OwnerOnly));
    }

    #[concordium_test]
    fn test_renounce_ownership() {
        let mut ownership = Ownership::new(Address::Account(OWNER_ACCOUNT));

        let result =
            ownership.handle_update(Address::Account(OWNER_ACCOUNT), OwnershipUpdate::Renounce);
        claim_eq!(
            result,
            Ok(OwnershipTransferred {
                previous: Address::Account(OWNER_ACCOUNT),
                new: None,
            })
        );
        claim_eq!(ownership.owner(), None);
        claim_eq!(
            ownership.ensure_owner(&Address::Account(OWNER_ACCOUNT)),
            Err(CustomContractError::NoOwner)
        );

        let result = ownership.handle_update(
            Address::Account(OWNER_ACCOUNT),
            OwnershipUpdate::Transfer(Address::Account(OWNER_ACCOUNT)),
        );
        claim_eq!(result, Err(CustomContractError::NoOwner));
    }
}
