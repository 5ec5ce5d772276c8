use commons::*;
use concordium_cis2::TokenIdU32;
use concordium_std::*;
use core::ops::DerefMut;

use crate::external::{InitParams, TokenData};

/// Data stored for every token ever minted.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProbeNodeData {
    pub owner: Address,
    pub uclid_addr: String,
    /// Cleared when the token is burnt.
    pub active: bool,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Address allowed to withdraw funds and update contract settings.
    pub ownership: Ownership,
    pub base_uri: String,
    pub meta_uri: String,
    /// Exact amount required to mint a token.
    pub minting_fee: Amount,
    /// Id of the most recently minted token, 0 before the first mint.
    pub last_token_id: u32,
    /// Number of tokens that are not burnt.
    pub total_supply: u32,
    /// All minted tokens, burnt ones included.
    pub tokens: StateMap<ContractTokenId, ProbeNodeData, S>,
    /// Active tokens of each owner.
    pub owned_tokens: StateMap<Address, StateSet<ContractTokenId, S>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>, params: InitParams) -> Self {
        Self {
            ownership: Ownership::new(params.owner),
            base_uri: params.base_uri,
            meta_uri: params.meta_uri,
            minting_fee: params.minting_fee,
            last_token_id: 0,
            total_supply: 0,
            tokens: state_builder.new_map(),
            owned_tokens: state_builder.new_map(),
        }
    }

    /// Metadata URI shared by all tokens.
    pub fn token_uri(&self) -> String {
        let mut uri = self.base_uri.clone();
        uri.push_str(&self.meta_uri);
        uri
    }

    /// Check that the token exists and is not burnt.
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens
            .get(token_id)
            .map(|data| data.active)
            .unwrap_or(false)
    }

    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .filter(|data| data.active)
            .map(|data| data.owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist or was burnt.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self.owner_of(token_id)?;
        Ok(ContractTokenAmount::from(u8::from(owner == *address)))
    }

    /// Issue the next token id to `owner`.
    pub fn mint(
        &mut self,
        owner: Address,
        uclid_addr: String,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<ContractTokenId> {
        let id = self
            .last_token_id
            .checked_add(1)
            .ok_or(CustomContractError::TokenIdOverflow)?;
        let token_id = TokenIdU32(id);

        self.tokens.insert(
            token_id,
            ProbeNodeData {
                owner,
                uclid_addr,
                active: true,
            },
        );
        self.owned_tokens
            .entry(owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(token_id);

        self.last_token_id = id;
        self.total_supply += 1;

        Ok(token_id)
    }

    /// Deactivate a token on behalf of its owner. Returns the owner.
    pub fn burn(&mut self, token_id: &ContractTokenId, sender: &Address) -> ContractResult<Address> {
        let owner = {
            let mut data = self
                .tokens
                .get_mut(token_id)
                .filter(|data| data.active)
                .ok_or(ContractError::InvalidTokenId)?;
            ensure_eq!(data.owner, *sender, ContractError::Unauthorized);
            data.active = false;
            data.owner
        };

        let emptied = match self.owned_tokens.get_mut(&owner) {
            Some(mut owned) => {
                owned.remove(token_id);
                owned.iter().next().is_none()
            }
            None => false,
        };
        // Drop the index entry of an owner without tokens.
        if emptied {
            self.owned_tokens.remove(&owner);
        }
        self.total_supply -= 1;

        Ok(owner)
    }

    fn token_data(&self, id: u32) -> Option<TokenData> {
        self.tokens.get(&TokenIdU32(id)).map(|data| TokenData {
            token_id: TokenIdU32(id),
            addr: data.owner,
            uclid_addr: data.uclid_addr.clone(),
            active: data.active,
        })
    }

    /// Registry entries in token id order. Inactive entries are dropped
    /// before `skip` is applied when `only_active` is set.
    pub fn paginate(&self, skip: u32, show: u32, only_active: bool) -> Vec<TokenData> {
        (1..=self.last_token_id)
            .filter_map(|id| self.token_data(id))
            .filter(|data| data.active || !only_active)
            .skip(skip as usize)
            .take(show as usize)
            .collect()
    }

    /// Active tokens of `owner` in token id order.
    pub fn tokens_of(&self, owner: &Address) -> Vec<TokenData> {
        let mut ids: Vec<u32> = self
            .owned_tokens
            .get(owner)
            .map(|owned| owned.iter().map(|token_id| token_id.0).collect())
            .unwrap_or_default();
        ids.sort_unstable();

        ids.into_iter()
            .filter_map(|id| self.token_data(id))
            .collect()
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);

    fn new_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        State::new(
            state_builder,
            InitParams::deployment(Address::Account(OWNER)),
        )
    }

    #[concordium_test]
    fn test_paginate_skips_burnt_tokens() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);

        for (owner, uclid_addr) in [(USER_1, "node-a"), (USER_2, "node-b"), (USER_1, "node-c")] {
            state
                .mint(Address::Account(owner), uclid_addr.into(), &mut state_builder)
                .expect_report("Failed to mint");
        }
        let burnt = state.burn(&TokenIdU32(2), &Address::Account(USER_2));
        claim_eq!(burnt, Ok(Address::Account(USER_2)));

        let all = state.paginate(0, 10, false);
        claim_eq!(all.len(), 3);
        claim!(!all[1].active);
        claim_eq!(all[1].addr, Address::Account(USER_2));

        let active = state.paginate(0, 10, true);
        claim_eq!(active.len(), 2);
        claim_eq!(active[0].token_id, TokenIdU32(1));
        claim_eq!(active[1].token_id, TokenIdU32(3));

        let page = state.paginate(1, 1, true);
        claim_eq!(page.len(), 1);
        claim_eq!(page[0].uclid_addr, String::from("node-c"));

        claim!(state.paginate(3, 10, false).is_empty());
        claim!(state.paginate(0, 0, false).is_empty());
    }

    #[concordium_test]
    fn test_burn_last_token_clears_owner_index() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);

        for owner in [USER_1, USER_1, USER_2] {
            state
                .mint(Address::Account(owner), "node".into(), &mut state_builder)
                .expect_report("Failed to mint");
        }

        let burnt = state.burn(&TokenIdU32(3), &Address::Account(USER_2));
        claim_eq!(burnt, Ok(Address::Account(USER_2)));
        claim!(state.owned_tokens.get(&Address::Account(USER_2)).is_none());

        // Owner with tokens left keeps its entry
        let burnt = state.burn(&TokenIdU32(1), &Address::Account(USER_1));
        claim_eq!(burnt, Ok(Address::Account(USER_1)));
        claim!(state.owned_tokens.get(&Address::Account(USER_1)).is_some());
        claim_eq!(state.tokens_of(&Address::Account(USER_1)).len(), 1);

        let burnt = state.burn(&TokenIdU32(2), &Address::Account(USER_1));
        claim_eq!(burnt, Ok(Address::Account(USER_1)));
        claim!(state.owned_tokens.get(&Address::Account(USER_1)).is_none());
        claim!(state.tokens_of(&Address::Account(USER_1)).is_empty());

        // Minting again recreates the entry
        let minted = state.mint(Address::Account(USER_2), "node".into(), &mut state_builder);
        claim_eq!(minted, Ok(TokenIdU32(4)));
        claim_eq!(state.tokens_of(&Address::Account(USER_2)).len(), 1);
        claim_eq!(state.total_supply, 1);
    }

    #[concordium_test]
    fn test_tokens_of_sorted_by_id() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);

        for i in 0..300u32 {
            let owner = if i % 2 == 0 { USER_1 } else { USER_2 };
            state
                .mint(Address::Account(owner), "node".into(), &mut state_builder)
                .expect_report("Failed to mint");
        }

        let owned = state.tokens_of(&Address::Account(USER_1));
        claim_eq!(owned.len(), 150);
        claim!(owned
            .windows(2)
            .all(|pair| pair[0].token_id.0 < pair[1].token_id.0));
        claim!(owned
            .iter()
            .all(|data| data.addr == Address::Account(USER_1)));
    }

    #[concordium_test]
    fn test_token_id_overflow() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state.last_token_id = u32::MAX;

        let result = state.mint(Address::Account(USER_1), "node".into(), &mut state_builder);
        claim_eq!(result, Err(CustomContractError::TokenIdOverflow.into()));
        claim_eq!(state.total_supply, 0);
    }
}
