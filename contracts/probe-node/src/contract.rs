use commons::*;
use concordium_cis2::*;
use concordium_std::*;

use crate::events::ProbeNodeEvent;
use crate::external::*;
use crate::state::State;

/// Initialize contract instance with no tokens.
#[init(contract = "ProbeNode", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;

    // Construct the initial contract state.
    let state = State::new(state_builder, params);
    Ok(state)
}

/// Mint the next token to the sender, storing the given probe node
/// identifier with it. Logs a `Mint` and a `TokenMetadata` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The attached amount differs from the minting fee.
/// - The token id counter is exhausted.
/// - Fails to log `Mint` or `TokenMetadata` event.
#[receive(
    mutable,
    payable,
    contract = "ProbeNode",
    name = "mint",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params = MintParams::deserial(&mut ctx.parameter_cursor())?;
    let owner = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    ensure_eq!(
        amount,
        state.minting_fee,
        CustomContractError::IncorrectFee.into()
    );

    let token_id = state.mint(owner, params.uclid_addr, state_builder)?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    logger.log(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
        TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: state.token_uri(),
                hash: None,
            },
        },
    ))?;

    Ok(token_id)
}

/// Burn a token. Only the token owner can burn it. The token id is not
/// reused afterwards.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist or is already burnt.
/// - The sender is not the owner of the token.
/// - Fails to log `Burn` event.
#[receive(
    mutable,
    contract = "ProbeNode",
    name = "burn",
    parameter = "ContractTokenId",
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;

    let owner = host.state_mut().burn(&token_id, &ctx.sender())?;

    // Log Burn event
    logger.log(&Cis2Event::Burn(BurnEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    Ok(())
}

/// Transfer collected CCD from the contract to an account.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the contract owner.
/// - The contract balance is lower than the requested amount.
/// - The transfer fails.
/// - Fails to log `Withdraw` event.
#[receive(
    mutable,
    contract = "ProbeNode",
    name = "withdraw",
    parameter = "WithdrawParams",
    enable_logger
)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = WithdrawParams::deserial(&mut ctx.parameter_cursor())?;

    host.state().ownership.ensure_owner(&ctx.sender())?;

    ensure!(
        params.amount <= host.self_balance(),
        CustomContractError::InsufficientBalance.into()
    );

    host.invoke_transfer(&params.to, params.amount)
        .map_err(CustomContractError::from)?;

    logger.log(&ProbeNodeEvent::Withdraw(&params))?;

    Ok(())
}

/// View the owner of an active token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist or is burnt.
#[receive(
    contract = "ProbeNode",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    host.state().owner_of(&token_id)
}

/// View the metadata URI of an active token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist or is burnt.
#[receive(
    contract = "ProbeNode",
    name = "tokenURI",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    ensure!(
        state.contains_token(&token_id),
        ContractError::InvalidTokenId
    );

    Ok(state.token_uri())
}

/// Get the token metadata URLs for a list of token IDs.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist or is burnt.
#[receive(
    contract = "ProbeNode",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params = ContractTokenMetadataQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let mut response = Vec::with_capacity(params.queries.len());
    for token_id in params.queries {
        ensure!(
            state.contains_token(&token_id),
            ContractError::InvalidTokenId
        );

        response.push(MetadataUrl {
            url: state.token_uri(),
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist or is burnt.
#[receive(
    contract = "ProbeNode",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params = ContractBalanceOfQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// View the number of tokens that are not burnt.
#[receive(contract = "ProbeNode", name = "totalSupply", return_value = "u32")]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().total_supply)
}

/// View the contract owner. `None` after ownership was renounced.
#[receive(contract = "ProbeNode", name = "owner", return_value = "Option<Address>")]
fn view_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    Ok(host.state().ownership.owner())
}

#[receive(contract = "ProbeNode", name = "baseURI", return_value = "String")]
fn view_base_uri<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().base_uri.clone())
}

#[receive(contract = "ProbeNode", name = "metaURI", return_value = "String")]
fn view_meta_uri<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().meta_uri.clone())
}

#[receive(contract = "ProbeNode", name = "mintingFee", return_value = "Amount")]
fn view_minting_fee<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    Ok(host.state().minting_fee)
}

/// View a page of the registry in token id order. Burnt tokens are
/// included unless `only_active` is set.
#[receive(
    contract = "ProbeNode",
    name = "getTokenDataPaginated",
    parameter = "PaginationParams",
    return_value = "Vec<TokenData>"
)]
fn get_token_data_paginated<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TokenData>> {
    let params = PaginationParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host
        .state()
        .paginate(params.skip, params.show, params.only_active))
}

/// View all active tokens owned by an address.
#[receive(
    contract = "ProbeNode",
    name = "getTokensByAddress",
    parameter = "Address",
    return_value = "Vec<TokenData>"
)]
fn get_tokens_by_address<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<TokenData>> {
    let owner = Address::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().tokens_of(&owner))
}

/// Transfer or renounce contract ownership.
///
///  It rejects if:
///  - Fails to parse `OwnershipUpdate` parameters.
///  - Sender is not the contract owner.
///  - Fails to log `OwnershipTransferred` event.
#[receive(
    mutable,
    contract = "ProbeNode",
    name = "updateOwnership",
    parameter = "OwnershipUpdate",
    enable_logger
)]
fn update_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = OwnershipUpdate::deserial(&mut ctx.parameter_cursor())?;
    let transfer = host
        .state_mut()
        .ownership
        .handle_update(ctx.sender(), params)?;

    logger.log(&ProbeNodeEvent::OwnershipTransferred(&transfer))?;

    Ok(())
}

/// Function to update internal values. This includes:
/// - MintingFee. Amount to attach to every `mint` call.
/// - BaseUri. First part of the token metadata URI.
/// - MetaUri. Second part of the token metadata URI.
///
///  It rejects if:
///  - Fails to parse `UpdateInternalValueParams` parameters.
///  - Sender is not the contract owner.
///  - Fails to log `InternalValueUpdated` event.
#[receive(
    mutable,
    contract = "ProbeNode",
    name = "updateInternalValue",
    parameter = "UpdateInternalValueParams",
    enable_logger
)]
fn update_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = UpdateInternalValueParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state_mut();

    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&ProbeNodeEvent::InternalValueUpdated(&params))?;

    match params {
        UpdateInternalValueParams::MintingFee(fee) => state.minting_fee = fee,
        UpdateInternalValueParams::BaseUri(uri) => state.base_uri = uri,
        UpdateInternalValueParams::MetaUri(uri) => state.meta_uri = uri,
    }

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);

    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);

    const BASE_URI: &str = "https://example.com/";
    const META_URI: &str = "metadata.json";

    fn minting_fee() -> Amount {
        Amount::from_micro_ccd(1_000)
    }

    /// Test helper function which creates a contract owned by `OWNER` with
    /// no tokens.
    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            owner: Address::Account(OWNER),
            base_uri: String::from(BASE_URI),
            meta_uri: String::from(META_URI),
            minting_fee: minting_fee(),
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_ProbeNode");

        TestHost::new(state, state_builder)
    }

    fn mint_as(
        host: &mut TestHost<State<TestStateApi>>,
        minter: AccountAddress,
        uclid_addr: &str,
        amount: Amount,
    ) -> (ContractResult<ContractTokenId>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            uclid_addr: String::from(uclid_addr),
        });
        ctx.set_sender(Address::Account(minter))
            .set_invoker(minter)
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = mint(&ctx, host, amount, &mut logger);
        (result, logger)
    }

    fn burn_as(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        token_id: ContractTokenId,
    ) -> (ContractResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_sender(Address::Account(sender))
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = burn(&ctx, host, &mut logger);
        (result, logger)
    }

    fn withdraw_as(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        params: WithdrawParams,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(sender))
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        withdraw(&ctx, host, &mut logger)
    }

    fn query_owner_of(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<Address> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_parameter(&bytes);
        owner_of(&ctx, host)
    }

    fn query_token_uri(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<String> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_parameter(&bytes);
        token_uri(&ctx, host)
    }

    fn query_total_supply(host: &TestHost<State<TestStateApi>>) -> u32 {
        let ctx = TestReceiveContext::empty();
        total_supply(&ctx, host).expect_report("Failed to call totalSupply")
    }

    fn query_paginated(
        host: &TestHost<State<TestStateApi>>,
        skip: u32,
        show: u32,
        only_active: bool,
    ) -> Vec<TokenData> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&PaginationParams {
            skip,
            show,
            only_active,
        });
        ctx.set_parameter(&bytes);
        get_token_data_paginated(&ctx, host).expect_report("Failed to call getTokenDataPaginated")
    }

    fn query_tokens_by_address(
        host: &TestHost<State<TestStateApi>>,
        owner: Address,
    ) -> Vec<TokenData> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&owner);
        ctx.set_parameter(&bytes);
        get_tokens_by_address(&ctx, host).expect_report("Failed to call getTokensByAddress")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(
            view_owner(&ctx, &host),
            Ok(Some(Address::Account(OWNER)))
        );
        claim_eq!(view_base_uri(&ctx, &host), Ok(String::from(BASE_URI)));
        claim_eq!(view_meta_uri(&ctx, &host), Ok(String::from(META_URI)));
        claim_eq!(view_minting_fee(&ctx, &host), Ok(minting_fee()));
        claim_eq!(query_total_supply(&host), 0);
        claim!(query_paginated(&host, 0, 10, false).is_empty());
    }

    #[concordium_test]
    fn test_deployment_params() {
        let params = InitParams::deployment(Address::Account(OWNER));
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_ProbeNode");

        claim_eq!(
            state.token_uri(),
            String::from("https://kdkcom1234.github.io/uclid-probe-node-meta/probe-meta.json")
        );
        claim_eq!(state.minting_fee, Amount::from_micro_ccd(1_000));
        claim!(state.ownership.is_owner(&Address::Account(OWNER)));
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();

        let (result, logger) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));

        claim_eq!(
            query_owner_of(&host, TokenIdU32(1)),
            Ok(Address::Account(USER_1))
        );
        claim_eq!(query_total_supply(&host), 1);
        claim_eq!(
            query_token_uri(&host, TokenIdU32(1)),
            Ok(String::from("https://example.com/metadata.json"))
        );

        // Check the logs
        claim_eq!(logger.logs.len(), 2, "Exactly two events should be logged");
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                owner: Address::Account(USER_1),
            }))),
            "Expected an event for minting the token"
        );
        claim!(
            logger.logs.contains(&to_bytes(
                &Cis2Event::TokenMetadata::<_, ContractTokenAmount>(TokenMetadataEvent {
                    token_id: TokenIdU32(1),
                    metadata_url: MetadataUrl {
                        url: String::from("https://example.com/metadata.json"),
                        hash: None,
                    },
                })
            )),
            "Expected an event for token metadata"
        );
    }

    #[concordium_test]
    fn test_mint_incorrect_fee() {
        let mut host = default_host();

        let (result, logger) =
            mint_as(&mut host, USER_1, "uclid1Addr", Amount::from_micro_ccd(100));
        claim_eq!(result, Err(CustomContractError::IncorrectFee.into()));
        claim!(logger.logs.is_empty());

        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", Amount::from_micro_ccd(1_001));
        claim_eq!(result, Err(CustomContractError::IncorrectFee.into()));

        claim_eq!(query_total_supply(&host), 0);
        claim_eq!(
            query_owner_of(&host, TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
    }

    #[concordium_test]
    fn test_burn() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));

        let (result, logger) = burn_as(&mut host, USER_1, TokenIdU32(1));
        claim_eq!(result, Ok(()));

        claim_eq!(
            query_owner_of(&host, TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(
            query_token_uri(&host, TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(query_total_supply(&host), 0);

        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Burn(BurnEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                owner: Address::Account(USER_1),
            }))]
        );

        // Burnt token cannot be burnt again
        let (result, _) = burn_as(&mut host, USER_1, TokenIdU32(1));
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        // Token ids are not reused
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(2)));
    }

    #[concordium_test]
    fn test_burn_not_owner() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));

        let (result, logger) = burn_as(&mut host, USER_2, TokenIdU32(1));
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(logger.logs.is_empty());

        // Contract owner has no rights over tokens either
        let (result, _) = burn_as(&mut host, OWNER, TokenIdU32(1));
        claim_eq!(result, Err(ContractError::Unauthorized));

        let (result, _) = burn_as(&mut host, USER_1, TokenIdU32(7));
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        claim_eq!(
            query_owner_of(&host, TokenIdU32(1)),
            Ok(Address::Account(USER_1))
        );
        claim_eq!(query_total_supply(&host), 1);
    }

    #[concordium_test]
    fn test_withdraw() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));
        host.set_self_balance(minting_fee());

        let result = withdraw_as(
            &mut host,
            OWNER,
            WithdrawParams {
                to: OWNER,
                amount: minting_fee(),
            },
        );

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&OWNER, minting_fee()));
    }

    #[concordium_test]
    fn test_withdraw_not_owner() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));
        host.set_self_balance(minting_fee());

        let result = withdraw_as(
            &mut host,
            USER_1,
            WithdrawParams {
                to: USER_1,
                amount: minting_fee(),
            },
        );

        claim_eq!(result, Err(CustomContractError::OwnerOnly.into()));
        claim!(!host.transfer_occurred(&USER_1, minting_fee()));
    }

    #[concordium_test]
    fn test_withdraw_insufficient_balance() {
        let mut host = default_host();
        host.set_self_balance(minting_fee());

        let result = withdraw_as(
            &mut host,
            OWNER,
            WithdrawParams {
                to: OWNER,
                amount: minting_fee() + Amount::from_micro_ccd(1),
            },
        );

        claim_eq!(result, Err(CustomContractError::InsufficientBalance.into()));
        claim!(!host.transfer_occurred(&OWNER, minting_fee() + Amount::from_micro_ccd(1)));
    }

    #[concordium_test]
    fn test_get_token_data_paginated() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr1", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));
        let (result, _) = mint_as(&mut host, USER_2, "uclid1Addr2", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(2)));

        let tokens = query_paginated(&host, 0, 2, false);
        claim_eq!(tokens.len(), 2);
        claim_eq!(
            tokens[0],
            TokenData {
                token_id: TokenIdU32(1),
                addr: Address::Account(USER_1),
                uclid_addr: String::from("uclid1Addr1"),
                active: true,
            }
        );
        claim_eq!(tokens[1].addr, Address::Account(USER_2));

        let (result, _) = burn_as(&mut host, USER_1, TokenIdU32(1));
        claim_eq!(result, Ok(()));

        let tokens = query_paginated(&host, 0, 2, false);
        claim_eq!(tokens.len(), 2);
        claim!(!tokens[0].active);

        let tokens = query_paginated(&host, 0, 2, true);
        claim_eq!(tokens.len(), 1);
        claim_eq!(tokens[0].token_id, TokenIdU32(2));

        claim!(query_paginated(&host, 1, 2, true).is_empty());
    }

    #[concordium_test]
    fn test_get_tokens_by_address() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr1", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));
        let (result, _) = mint_as(&mut host, USER_2, "uclid1Addr2", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(2)));

        let tokens = query_tokens_by_address(&host, Address::Account(USER_1));
        claim_eq!(tokens.len(), 1);
        claim_eq!(tokens[0].addr, Address::Account(USER_1));
        claim_eq!(tokens[0].uclid_addr, String::from("uclid1Addr1"));

        let (result, _) = burn_as(&mut host, USER_1, TokenIdU32(1));
        claim_eq!(result, Ok(()));

        claim!(query_tokens_by_address(&host, Address::Account(USER_1)).is_empty());
        claim!(query_tokens_by_address(&host, Address::Account(OWNER)).is_empty());
    }

    #[concordium_test]
    fn test_balance_of() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));

        let mut ctx = TestReceiveContext::empty();
        let params = ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: TokenIdU32(1),
                    address: Address::Account(USER_1),
                },
                BalanceOfQuery {
                    token_id: TokenIdU32(1),
                    address: Address::Account(USER_2),
                },
            ],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let result = balance_of(&ctx, &host).expect_report("Failed to call balanceOf");
        claim_eq!(
            result.0,
            vec![ContractTokenAmount::from(1), ContractTokenAmount::from(0)]
        );

        let mut ctx = TestReceiveContext::empty();
        let params = ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU32(2),
                address: Address::Account(USER_1),
            }],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        claim_eq!(
            balance_of(&ctx, &host).map(|response| response.0),
            Err(ContractError::InvalidTokenId)
        );
    }

    #[concordium_test]
    fn test_token_metadata() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));

        let mut ctx = TestReceiveContext::empty();
        let params = ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU32(1)],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let result = token_metadata(&ctx, &host).expect_report("Failed to call tokenMetadata");
        claim_eq!(result.0.len(), 1);
        claim_eq!(
            result.0[0].url,
            String::from("https://example.com/metadata.json")
        );
        claim!(result.0[0].hash.is_none());

        let mut ctx = TestReceiveContext::empty();
        let params = ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU32(1), TokenIdU32(2)],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        claim!(matches!(
            token_metadata(&ctx, &host),
            Err(ContractError::InvalidTokenId)
        ));
    }

    #[concordium_test]
    fn test_queries_reject_burnt_token() {
        let mut host = default_host();
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Ok(TokenIdU32(1)));
        let (result, _) = burn_as(&mut host, USER_1, TokenIdU32(1));
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let params = ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU32(1),
                address: Address::Account(USER_1),
            }],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        claim_eq!(
            balance_of(&ctx, &host).map(|response| response.0),
            Err(ContractError::InvalidTokenId)
        );

        let mut ctx = TestReceiveContext::empty();
        let params = ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU32(1)],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        claim!(matches!(
            token_metadata(&ctx, &host),
            Err(ContractError::InvalidTokenId)
        ));
    }

    #[concordium_test]
    fn test_update_ownership() {
        let mut host = default_host();
        host.set_self_balance(minting_fee());

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OwnershipUpdate::Transfer(Address::Account(USER_2)));
        ctx.set_sender(Address::Account(OWNER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_ownership(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&ProbeNodeEvent::OwnershipTransferred(
                &OwnershipTransferred {
                    previous: Address::Account(OWNER),
                    new: Some(Address::Account(USER_2)),
                }
            ))]
        );

        // Previous owner cannot withdraw anymore
        let params = WithdrawParams {
            to: OWNER,
            amount: minting_fee(),
        };
        let result = withdraw_as(&mut host, OWNER, params);
        claim_eq!(result, Err(CustomContractError::OwnerOnly.into()));

        let params = WithdrawParams {
            to: USER_2,
            amount: minting_fee(),
        };
        let result = withdraw_as(&mut host, USER_2, params);
        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&USER_2, minting_fee()));
    }

    #[concordium_test]
    fn test_renounce_ownership() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OwnershipUpdate::Renounce);
        ctx.set_sender(Address::Account(OWNER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_ownership(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let ctx = TestReceiveContext::empty();
        claim_eq!(view_owner(&ctx, &host), Ok(None));

        let params = WithdrawParams {
            to: OWNER,
            amount: Amount::zero(),
        };
        let result = withdraw_as(&mut host, OWNER, params);
        claim_eq!(result, Err(CustomContractError::NoOwner.into()));
    }

    #[concordium_test]
    fn test_update_internal_value() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let params = UpdateInternalValueParams::MintingFee(Amount::from_ccd(1));
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_internal_value(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::OwnerOnly.into()));
        claim!(logger.logs.is_empty());

        ctx.set_sender(Address::Account(OWNER));
        let result = update_internal_value(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&ProbeNodeEvent::InternalValueUpdated(&params))]
        );

        // Old fee is rejected, new one accepted
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", minting_fee());
        claim_eq!(result, Err(CustomContractError::IncorrectFee.into()));
        let (result, _) = mint_as(&mut host, USER_1, "uclid1Addr", Amount::from_ccd(1));
        claim_eq!(result, Ok(TokenIdU32(1)));

        for params in vec![
            UpdateInternalValueParams::BaseUri(String::from("ipfs://probe/")),
            UpdateInternalValueParams::MetaUri(String::from("node.json")),
        ] {
            let mut ctx = TestReceiveContext::empty();
            let bytes = to_bytes(&params);
            ctx.set_sender(Address::Account(OWNER))
                .set_parameter(&bytes);
            let result = update_internal_value(&ctx, &mut host, &mut logger);
            claim_eq!(result, Ok(()));
        }

        claim_eq!(
            query_token_uri(&host, TokenIdU32(1)),
            Ok(String::from("ipfs://probe/node.json"))
        );
    }
}
