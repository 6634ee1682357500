use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Pulls `amount` from `from` into contract custody.
///
/// Failures from the token contract — insufficient balance, missing
/// authorization — surface to the caller as the token's own failure.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of custody to `to`.
///
/// Verifies the contract's holdings cover the transfer first; a shortfall
/// means the reward funding model was violated upstream, and the call must
/// abort before any token movement.
pub fn payout(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if balance(env, token) < amount {
        return Err(ContractError::InsufficientCustodyBalance);
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

/// Tokens currently held by the contract.
pub fn balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
