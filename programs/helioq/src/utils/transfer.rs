use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::LedgerError;

/// Transfer SOL between accounts using direct lamport manipulation.
/// The source must be owned by this program.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let from_balance = from.lamports().checked_sub(amount)
        .ok_or(LedgerError::InsufficientPoolFunds)?;
    let to_balance = to.lamports().checked_add(amount)
        .ok_or(LedgerError::Overflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

/// Transfer SOL out of a program account, keeping it rent-exempt.
pub fn transfer_lamports_safe<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent = Rent::get()?;
    let min_balance = rent.minimum_balance(from.data_len());

    let required = amount
        .checked_add(min_balance)
        .ok_or(LedgerError::Overflow)?;

    require!(
        from.lamports() >= required,
        LedgerError::InsufficientPoolFunds
    );

    transfer_lamports(from, to, amount)
}

/// Transfer SOL from a signer using the System Program.
pub fn transfer_sol_cpi<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(system_program, Transfer { from, to });
    system_program::transfer(cpi_ctx, amount).map_err(|err| {
        msg!("System transfer of {} lamports failed: {}", amount, err);
        error!(LedgerError::TransferFailed)
    })
}
