//! Authorization of pulls made by other contracts from this contract.

use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

/// Authorize exactly one `token.transfer(this, to, amount)` made by the next
/// contract this contract calls (or anything below it).
pub fn authorize_transfer(e: &Env, token: &Address, to: &Address, amount: i128) {
    let this = e.current_contract_address();
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (this, to.clone(), amount).into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
}
