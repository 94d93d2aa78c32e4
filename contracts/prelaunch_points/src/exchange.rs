//! Exchange adapters.
//!
//! Claims of non-base tokens swap the locked amount into the base token through
//! one of two external adapters, picked by [`Exchange`]. Adapters are untrusted:
//! the caller supplies the route payload, the adapter is only authorized to
//! pull exactly `amount_in`, and the realized output is measured from this
//! contract's own balance rather than taken from the adapter's reply.

use crate::auth::authorize_transfer;
use crate::errors::PrelaunchError;
use crate::storage::Config;
use soroban_sdk::{contractclient, contracttype, token, Address, Bytes, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Exchange {
    /// Single-route adapter with its own minimum-out check
    Router = 0,
    /// Aggregator executing opaque calldata
    Aggregator = 1,
}

#[contractclient(name = "RouterClient")]
pub trait RouterInterface {
    #[allow(clippy::too_many_arguments)]
    fn exact_input(
        env: Env,
        sender: Address,
        recipient: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out_min: i128,
        route: Bytes,
    ) -> i128;
}

#[contractclient(name = "AggregatorClient")]
pub trait AggregatorInterface {
    fn transform(
        env: Env,
        sender: Address,
        recipient: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        calldata: Bytes,
    );
}

pub struct SwapRequest<'a> {
    pub token_in: &'a Address,
    pub token_out: &'a Address,
    pub amount_in: i128,
    pub min_out: i128,
    pub payload: &'a Bytes,
}

/// Call shape of one adapter family. `execute` reports whether the call succeeded.
pub trait SwapAdapter {
    fn execute(&self, e: &Env, adapter: &Address, request: &SwapRequest) -> bool;
}

pub struct RouterAdapter;

impl SwapAdapter for RouterAdapter {
    fn execute(&self, e: &Env, adapter: &Address, request: &SwapRequest) -> bool {
        let this = e.current_contract_address();
        let result = RouterClient::new(e, adapter).try_exact_input(
            &this,
            &this,
            request.token_in,
            request.token_out,
            &request.amount_in,
            &request.min_out,
            request.payload,
        );
        matches!(result, Ok(Ok(_)))
    }
}

pub struct AggregatorAdapter;

impl SwapAdapter for AggregatorAdapter {
    fn execute(&self, e: &Env, adapter: &Address, request: &SwapRequest) -> bool {
        let this = e.current_contract_address();
        let result = AggregatorClient::new(e, adapter).try_transform(
            &this,
            &this,
            request.token_in,
            request.token_out,
            &request.amount_in,
            request.payload,
        );
        matches!(result, Ok(Ok(_)))
    }
}

impl Exchange {
    pub fn adapter(&self, config: &Config) -> Address {
        match self {
            Exchange::Router => config.router.clone(),
            Exchange::Aggregator => config.aggregator.clone(),
        }
    }

    /// Swap and return the realized amount of `token_out` received.
    pub fn swap(&self, e: &Env, config: &Config, request: &SwapRequest) -> Result<i128, PrelaunchError> {
        let adapter = self.adapter(config);
        match self {
            Exchange::Router => run_swap(e, &RouterAdapter, &adapter, request),
            Exchange::Aggregator => run_swap(e, &AggregatorAdapter, &adapter, request),
        }
    }
}

fn run_swap<A: SwapAdapter>(
    e: &Env,
    venue: &A,
    adapter: &Address,
    request: &SwapRequest,
) -> Result<i128, PrelaunchError> {
    let this = e.current_contract_address();
    let token_out = token::Client::new(e, request.token_out);
    let before = token_out.balance(&this);

    authorize_transfer(e, request.token_in, adapter, request.amount_in);
    if !venue.execute(e, adapter, request) {
        return Err(PrelaunchError::SwapFailed);
    }

    let realized = token_out.balance(&this) - before;
    if realized < 0 {
        return Err(PrelaunchError::SwapFailed);
    }
    Ok(realized)
}
