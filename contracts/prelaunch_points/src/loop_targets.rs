//! Output asset and staking vault interfaces.

use crate::auth::authorize_transfer;
use crate::phase::LoopTargets;
use soroban_sdk::{contractclient, token, Address, Env};

/// Output asset: pulls base from `from` and mints output to `receiver`.
#[contractclient(name = "LoopTokenClient")]
pub trait LoopTokenInterface {
    fn deposit(env: Env, from: Address, receiver: Address, amount: i128) -> i128;
}

/// Staking vault: pulls output from `from` and stakes it for `receiver`.
#[contractclient(name = "LoopVaultClient")]
pub trait LoopVaultInterface {
    fn stake(env: Env, from: Address, receiver: Address, amount: i128, option: u32) -> i128;
}

/// Deposit `amount` of base into the output asset and return the output this
/// contract actually received.
pub fn mint_output(e: &Env, targets: &LoopTargets, base_token: &Address, amount: i128) -> i128 {
    if amount == 0 {
        return 0;
    }
    let this = e.current_contract_address();
    let output = token::Client::new(e, &targets.output_asset);
    let before = output.balance(&this);

    authorize_transfer(e, base_token, &targets.output_asset, amount);
    LoopTokenClient::new(e, &targets.output_asset).deposit(&this, &this, &amount);

    output.balance(&this) - before
}

pub fn send_output(e: &Env, targets: &LoopTargets, to: &Address, amount: i128) {
    token::Client::new(e, &targets.output_asset).transfer(&e.current_contract_address(), to, &amount);
}

pub fn stake_output(e: &Env, targets: &LoopTargets, receiver: &Address, amount: i128, option: u32) {
    authorize_transfer(e, &targets.output_asset, &targets.staking_vault, amount);
    LoopVaultClient::new(e, &targets.staking_vault).stake(
        &e.current_contract_address(),
        receiver,
        &amount,
        &option,
    );
}
