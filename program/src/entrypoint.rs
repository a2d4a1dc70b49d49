use pinocchio::{
    account_info::AccountInfo, entrypoint, msg, program_error::ProgramError, pubkey::Pubkey,
    ProgramResult,
};

use crate::instruction::{self, expect_empty, read_u64, InitializeData, MarketplaceInstruction};

entrypoint!(process_instruction);

#[inline(always)]
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match MarketplaceInstruction::try_from(disc)? {
        MarketplaceInstruction::Initialize => {
            msg!("Instruction: Initialize");
            let data = InitializeData::parse(payload)?;
            instruction::initialize::process_initialize(accounts, data)
        }
        MarketplaceInstruction::List => {
            msg!("Instruction: List");
            let price = read_u64(payload)?;
            instruction::list::process_list(accounts, price)
        }
        MarketplaceInstruction::Delist => {
            msg!("Instruction: Delist");
            expect_empty(payload)?;
            instruction::delist::process_delist(accounts)
        }
        MarketplaceInstruction::Purchase => {
            msg!("Instruction: Purchase");
            expect_empty(payload)?;
            instruction::purchase::process_purchase(accounts)
        }
        MarketplaceInstruction::WithdrawFees => {
            msg!("Instruction: WithdrawFees");
            let lamports = read_u64(payload)?;
            instruction::withdraw_fees::process_withdraw_fees(accounts, lamports)
        }
    }
}
