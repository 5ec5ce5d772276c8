use commons::ContractTokenId;
use concordium_std::*;

use crate::constants::*;

#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct InitParams {
    /// Address that owns the contract and collects minting fees.
    pub owner: Address,
    /// First part of the token metadata URI.
    pub base_uri: String,
    /// Second part of the token metadata URI, appended to `base_uri`.
    pub meta_uri: String,
    /// Exact amount that has to be attached to every `mint` call.
    pub minting_fee: Amount,
}

impl InitParams {
    /// Parameters of the production deployment, owned by `owner`.
    pub fn deployment(owner: Address) -> Self {
        Self {
            owner,
            base_uri: String::from(DEPLOYMENT_BASE_URI),
            meta_uri: String::from(DEPLOYMENT_META_URI),
            minting_fee: Amount::from_micro_ccd(DEPLOYMENT_MINTING_FEE_MICRO_CCD),
        }
    }
}

#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct MintParams {
    /// Off-chain identifier of the probe node.
    pub uclid_addr: String,
}

#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawParams {
    /// Account receiving the funds.
    pub to: AccountAddress,
    pub amount: Amount,
}

#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub skip: u32,
    pub show: u32,
    /// Leave out burnt tokens.
    pub only_active: bool,
}

/// Registry entry as returned by the query functions.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub token_id: ContractTokenId,
    /// Current owner, or the last owner of a burnt token.
    pub addr: Address,
    pub uclid_addr: String,
    pub active: bool,
}

#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub enum UpdateInternalValueParams {
    MintingFee(Amount),
    BaseUri(String),
    MetaUri(String),
}
