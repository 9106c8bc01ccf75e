use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::LotteryError;

/// Prize leg of a settlement: the whole pot goes to one winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub amount: u64,
}

/// Every value movement caused by one ticket purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub payer: Pubkey,
    pub payment: u64,
    /// Present only for the purchase that fills the round.
    pub payout: Option<Payout>,
}

/// Moves lamports on behalf of the round state machine.
///
/// `settle` must be all-or-nothing: when it returns an error neither the
/// payment nor the payout may have taken effect.
pub trait Treasury {
    fn settle(&mut self, settlement: &Settlement) -> Result<()>;
}

/// On-chain treasury. The pot is held by the lottery PDA itself.
///
/// A failing leg aborts the instruction, and the runtime discards the
/// payment CPI together with every account write.
pub struct LamportTreasury<'a, 'info> {
    pub payer: AccountInfo<'info>,
    pub lottery: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    /// Candidate winner accounts, passed as remaining accounts by the buyer
    /// of the last ticket.
    pub recipients: &'a [AccountInfo<'info>],
}

impl<'a, 'info> LamportTreasury<'a, 'info> {
    /// Requires a writable account for every ticket holder other than the
    /// payer, so the buyer of the last ticket cannot leave a possible winner
    /// out and have the draw revert.
    pub fn require_holders(&self, holders: &[Pubkey]) -> Result<()> {
        for holder in holders.iter().filter(|holder| *holder != self.payer.key) {
            let covered = self
                .recipients
                .iter()
                .any(|account| account.key == holder && account.is_writable);
            if !covered {
                msg!("Missing writable account for ticket holder {}", holder);
                return err!(LotteryError::HolderAccountsMissing);
            }
        }
        Ok(())
    }

    fn recipient(&self, winner: &Pubkey) -> Result<AccountInfo<'info>> {
        if self.payer.key == winner {
            return Ok(self.payer.clone());
        }
        let account = self
            .recipients
            .iter()
            .find(|account| account.key == winner)
            .ok_or(error!(LotteryError::TransferFailed))?;
        require!(account.is_writable, LotteryError::TransferFailed);
        Ok(account.clone())
    }
}

impl<'a, 'info> Treasury for LamportTreasury<'a, 'info> {
    fn settle(&mut self, settlement: &Settlement) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.payer.clone(),
                    to: self.lottery.clone(),
                },
            ),
            settlement.payment,
        )?;

        let Some(payout) = &settlement.payout else {
            return Ok(());
        };

        let recipient = self.recipient(&payout.winner)?;
        let pot_left = self
            .lottery
            .lamports()
            .checked_sub(payout.amount)
            .ok_or(error!(LotteryError::TransferFailed))?;
        let winner_balance = recipient
            .lamports()
            .checked_add(payout.amount)
            .ok_or(error!(LotteryError::TransferFailed))?;

        msg!("Paying {} lamports to {}", payout.amount, payout.winner);
        **self.lottery.try_borrow_mut_lamports()? = pot_left;
        **recipient.try_borrow_mut_lamports()? = winner_balance;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(key: Pubkey, lamports: u64) -> Self {
            Self {
                key,
                owner: crate::ID,
                lamports,
                data: Vec::new(),
            }
        }

        fn info(&mut self, is_signer: bool, is_writable: bool) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                is_signer,
                is_writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    // Helper: Generate a test pubkey
    fn test_pubkey(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn prize_to(winner: Pubkey, amount: u64) -> Settlement {
        Settlement {
            payer: test_pubkey(2),
            payment: 100,
            payout: Some(Payout { winner, amount }),
        }
    }

    fn treasury_with<'a, 'info>(
        base: &[AccountInfo<'info>; 3],
        recipients: &'a [AccountInfo<'info>],
    ) -> LamportTreasury<'a, 'info> {
        LamportTreasury {
            payer: base[0].clone(),
            lottery: base[1].clone(),
            system_program: base[2].clone(),
            recipients,
        }
    }

    // Off-chain the system program CPI is a no-op, so only the payout leg
    // moves lamports in these tests.

    #[test]
    fn test_payer_can_be_paid_as_winner() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &[],
        };

        treasury.settle(&prize_to(test_pubkey(2), 300)).unwrap();
        assert_eq!(treasury.lottery.lamports(), 4_700);
        assert_eq!(treasury.payer.lamports(), 1_300);
    }

    #[test]
    fn test_winner_found_among_recipients_receives_exact_pot() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut alice = TestAccount::new(test_pubkey(3), 10);
        let mut bob = TestAccount::new(test_pubkey(4), 20);
        let recipients = [alice.info(false, true), bob.info(false, true)];
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &recipients,
        };

        treasury.settle(&prize_to(test_pubkey(4), 400)).unwrap();
        assert_eq!(treasury.lottery.lamports(), 4_600);
        assert_eq!(recipients[1].lamports(), 420);
        assert_eq!(recipients[0].lamports(), 10);
        assert_eq!(treasury.payer.lamports(), 1_000);
    }

    #[test]
    fn test_missing_winner_account_fails_transfer() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut alice = TestAccount::new(test_pubkey(3), 10);
        let recipients = [alice.info(false, true)];
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &recipients,
        };

        let err = treasury.settle(&prize_to(test_pubkey(9), 400)).unwrap_err();
        assert_eq!(err, LotteryError::TransferFailed.into());
        assert_eq!(treasury.lottery.lamports(), 5_000);
    }

    #[test]
    fn test_read_only_winner_account_fails_transfer() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut alice = TestAccount::new(test_pubkey(3), 10);
        let recipients = [alice.info(false, false)];
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &recipients,
        };

        let err = treasury.settle(&prize_to(test_pubkey(3), 400)).unwrap_err();
        assert_eq!(err, LotteryError::TransferFailed.into());
        assert_eq!(recipients[0].lamports(), 10);
        assert_eq!(treasury.lottery.lamports(), 5_000);
    }

    #[test]
    fn test_payout_larger_than_lottery_balance_fails() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 300);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &[],
        };

        let err = treasury.settle(&prize_to(test_pubkey(2), 301)).unwrap_err();
        assert_eq!(err, LotteryError::TransferFailed.into());
        assert_eq!(treasury.lottery.lamports(), 300);
        assert_eq!(treasury.payer.lamports(), 1_000);
    }

    #[test]
    fn test_settlement_without_payout_leaves_pot() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &[],
        };

        let settlement = Settlement {
            payer: test_pubkey(2),
            payment: 100,
            payout: None,
        };
        treasury.settle(&settlement).unwrap();
        assert_eq!(treasury.lottery.lamports(), 5_000);
    }

    #[test]
    fn test_holders_must_all_be_passed_writable() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let mut alice = TestAccount::new(test_pubkey(3), 10);
        let mut bob = TestAccount::new(test_pubkey(4), 10);
        let payer_info = payer.info(true, true);
        let lottery_info = lottery.info(false, true);
        let system_info = system.info(false, false);
        let alice_info = alice.info(false, true);
        let bob_info = bob.info(false, false);
        let holders = [test_pubkey(3), test_pubkey(2), test_pubkey(4)];

        let base = [payer_info, lottery_info, system_info];

        let only_alice = [alice_info.clone()];
        let err = treasury_with(&base, &only_alice).require_holders(&holders).unwrap_err();
        assert_eq!(err, LotteryError::HolderAccountsMissing.into());

        let bob_read_only = [alice_info.clone(), bob_info.clone()];
        let err = treasury_with(&base, &bob_read_only).require_holders(&holders).unwrap_err();
        assert_eq!(err, LotteryError::HolderAccountsMissing.into());

        let mut bob_writable = bob_info.clone();
        bob_writable.is_writable = true;
        let everyone = [bob_writable, alice_info.clone()];
        treasury_with(&base, &everyone).require_holders(&holders).unwrap();
    }

    #[test]
    fn test_payer_alone_needs_no_extra_accounts() {
        let mut payer = TestAccount::new(test_pubkey(2), 1_000);
        let mut lottery = TestAccount::new(test_pubkey(1), 5_000);
        let mut system = TestAccount::new(system_program::ID, 1);
        let treasury = LamportTreasury {
            payer: payer.info(true, true),
            lottery: lottery.info(false, true),
            system_program: system.info(false, false),
            recipients: &[],
        };
        treasury.require_holders(&[test_pubkey(2)]).unwrap();
    }
}
