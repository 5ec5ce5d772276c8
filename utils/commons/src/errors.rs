use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Minting requires the correct fee (Error code: -4).
    IncorrectFee,
    /// Contract balance is lower than the requested amount (Error code: -5).
    InsufficientBalance,
    /// Token id counter is exhausted (Error code: -6).
    TokenIdOverflow,
    /// Failed to invoke a transfer (Error code: -7).
    InvokeTransferError,
    /// Only the contract owner has access (Error code: -8).
    OwnerOnly,
    /// Ownership was renounced, nobody owns the contract (Error code: -9).
    NoOwner,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
