//! Transfer fee rules
//!
//! Computes the fee charged for moving money between two accounts. The fee
//! depends on the transfer amount and the type/provider relationship between
//! the source and destination accounts.
//!
//! The rules are evaluated in order; the first match wins. The same-provider
//! rule is checked before any type-based rule, so an in-network transfer is
//! always free regardless of type.

use std::fmt;

use crate::models::{Account, AccountType, Money};

/// 1% rate for wallet-to-wallet transfers across providers
const WALLET_RATE_BPS: i64 = 100;
/// Wallet-to-wallet fee cap: GHS 5.00
const WALLET_FEE_CAP: Money = Money::from_pesewas(500);

/// Flat bank-to-bank fee for amounts up to the tier limit: GHS 2.00
const BANK_FEE_LOW: Money = Money::from_pesewas(200);
/// Flat bank-to-bank fee above the tier limit: GHS 5.00
const BANK_FEE_HIGH: Money = Money::from_pesewas(500);
/// Bank tier boundary: GHS 1000.00 (inclusive on the low side)
const BANK_TIER_LIMIT: Money = Money::from_pesewas(100_000);

/// 1.5% rate for wallet/bank transfers in either direction
const CROSS_RATE_BPS: i64 = 150;
/// Wallet/bank fee cap: GHS 10.00
const CROSS_FEE_CAP: Money = Money::from_pesewas(1_000);

/// Which fee rule applied to a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeRule {
    /// Same provider and same account type: in-network, free
    SameProvider,
    /// Mobile wallet to mobile wallet across providers: 1% capped at GHS 5
    WalletToWallet,
    /// Bank to bank across providers: GHS 2 up to GHS 1000, GHS 5 above
    BankToBank,
    /// Mobile wallet to/from bank account: 1.5% capped at GHS 10
    WalletBank,
    /// Either side is cash: free
    CashInvolved,
    /// No rule matched (credit card combinations and non-positive amounts): free
    NoCharge,
}

impl fmt::Display for FeeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameProvider => write!(f, "same provider"),
            Self::WalletToWallet => write!(f, "wallet to wallet (1%, max GHS 5.00)"),
            Self::BankToBank => write!(f, "bank to bank (flat)"),
            Self::WalletBank => write!(f, "wallet/bank (1.5%, max GHS 10.00)"),
            Self::CashInvolved => write!(f, "cash transfer"),
            Self::NoCharge => write!(f, "no charge"),
        }
    }
}

/// A computed fee together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub fee: Money,
    pub rule: FeeRule,
}

impl FeeQuote {
    /// A zero fee under the fall-through rule
    pub const fn free() -> Self {
        Self {
            fee: Money::zero(),
            rule: FeeRule::NoCharge,
        }
    }
}

/// Compute the transfer fee and the rule that applied
///
/// Non-positive amounts quote zero; validation of the amount itself belongs
/// to the form layer.
pub fn quote_transfer_fee(amount: Money, from: &Account, to: &Account) -> FeeQuote {
    if !amount.is_positive() {
        return FeeQuote::free();
    }

    // In-network transfers are free and take precedence over type rules.
    if from.provider == to.provider && from.account_type == to.account_type {
        return FeeQuote {
            fee: Money::zero(),
            rule: FeeRule::SameProvider,
        };
    }

    use AccountType::*;
    match (from.account_type, to.account_type) {
        (MobileWallet, MobileWallet) => FeeQuote {
            fee: amount.percent_bps(WALLET_RATE_BPS).min(WALLET_FEE_CAP),
            rule: FeeRule::WalletToWallet,
        },
        (BankAccount, BankAccount) => FeeQuote {
            fee: if amount <= BANK_TIER_LIMIT {
                BANK_FEE_LOW
            } else {
                BANK_FEE_HIGH
            },
            rule: FeeRule::BankToBank,
        },
        (MobileWallet, BankAccount) | (BankAccount, MobileWallet) => FeeQuote {
            fee: amount.percent_bps(CROSS_RATE_BPS).min(CROSS_FEE_CAP),
            rule: FeeRule::WalletBank,
        },
        (Cash, _) | (_, Cash) => FeeQuote {
            fee: Money::zero(),
            rule: FeeRule::CashInvolved,
        },
        // Credit card combinations have no published rule yet; free until
        // product decides otherwise.
        _ => FeeQuote::free(),
    }
}

/// Compute just the transfer fee
pub fn transfer_fee(amount: Money, from: &Account, to: &Account) -> Money {
    quote_transfer_fee(amount, from, to).fee
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(account_type: AccountType, provider: &str) -> Account {
        Account::with_balance("Test", account_type, provider, Money::from_cedis(10_000))
    }

    #[test]
    fn test_same_provider_same_type_is_free() {
        let from = account(AccountType::MobileWallet, "MTN Mobile Money");
        let to = account(AccountType::MobileWallet, "MTN Mobile Money");

        for cedis in [1, 100, 1000, 50_000] {
            let quote = quote_transfer_fee(Money::from_cedis(cedis), &from, &to);
            assert_eq!(quote.fee, Money::zero());
            assert_eq!(quote.rule, FeeRule::SameProvider);
        }
    }

    #[test]
    fn test_same_provider_different_type_is_not_in_network() {
        // Same provider but different types falls through to the type rules.
        let from = account(AccountType::MobileWallet, "Ecobank Ghana");
        let to = account(AccountType::BankAccount, "Ecobank Ghana");

        let quote = quote_transfer_fee(Money::from_cedis(100), &from, &to);
        assert_eq!(quote.rule, FeeRule::WalletBank);
        assert_eq!(quote.fee, Money::from_pesewas(150));
    }

    #[test]
    fn test_wallet_to_wallet_one_percent_capped() {
        let from = account(AccountType::MobileWallet, "MTN Mobile Money");
        let to = account(AccountType::MobileWallet, "Vodafone Cash");

        // 1% of 100 = 1.00
        assert_eq!(
            transfer_fee(Money::from_cedis(100), &from, &to),
            Money::from_cedis(1)
        );
        // 1% of 1000 = 10.00, capped at 5.00
        assert_eq!(
            transfer_fee(Money::from_cedis(1000), &from, &to),
            Money::from_cedis(5)
        );
        // exactly at the cap: 1% of 500 = 5.00
        assert_eq!(
            transfer_fee(Money::from_cedis(500), &from, &to),
            Money::from_cedis(5)
        );
    }

    #[test]
    fn test_bank_to_bank_tiered() {
        let from = account(AccountType::BankAccount, "Ecobank Ghana");
        let to = account(AccountType::BankAccount, "Fidelity Bank");

        // boundary is inclusive at 1000.00
        assert_eq!(
            transfer_fee(Money::from_cedis(1000), &from, &to),
            Money::from_cedis(2)
        );
        assert_eq!(
            transfer_fee(Money::from_pesewas(100_001), &from, &to),
            Money::from_cedis(5)
        );
        assert_eq!(
            transfer_fee(Money::from_cedis(50), &from, &to),
            Money::from_cedis(2)
        );
    }

    #[test]
    fn test_wallet_bank_either_direction() {
        let wallet = account(AccountType::MobileWallet, "MTN Mobile Money");
        let bank = account(AccountType::BankAccount, "Ecobank Ghana");

        // 1.5% of 100 = 1.50
        assert_eq!(
            transfer_fee(Money::from_cedis(100), &wallet, &bank),
            Money::from_pesewas(150)
        );
        // 1.5% of 1000 = 15.00, capped at 10.00
        assert_eq!(
            transfer_fee(Money::from_cedis(1000), &wallet, &bank),
            Money::from_cedis(10)
        );
        // symmetric in direction
        assert_eq!(
            transfer_fee(Money::from_cedis(100), &bank, &wallet),
            Money::from_pesewas(150)
        );
    }

    #[test]
    fn test_cash_is_always_free() {
        let cash = account(AccountType::Cash, "Physical Cash");
        let bank = account(AccountType::BankAccount, "Ecobank Ghana");
        let wallet = account(AccountType::MobileWallet, "Vodafone Cash");
        let card = account(AccountType::CreditCard, "Visa");

        for other in [&bank, &wallet, &card] {
            let quote = quote_transfer_fee(Money::from_cedis(5000), &cash, other);
            assert_eq!(quote.fee, Money::zero());
            assert_eq!(quote.rule, FeeRule::CashInvolved);

            let quote = quote_transfer_fee(Money::from_cedis(5000), other, &cash);
            assert_eq!(quote.fee, Money::zero());
            assert_eq!(quote.rule, FeeRule::CashInvolved);
        }
    }

    #[test]
    fn test_credit_card_falls_through_to_free() {
        let card = account(AccountType::CreditCard, "Visa");
        let other_card = account(AccountType::CreditCard, "MasterCard");
        let bank = account(AccountType::BankAccount, "Ecobank Ghana");

        let quote = quote_transfer_fee(Money::from_cedis(100), &card, &other_card);
        assert_eq!(quote.fee, Money::zero());
        assert_eq!(quote.rule, FeeRule::NoCharge);

        let quote = quote_transfer_fee(Money::from_cedis(100), &card, &bank);
        assert_eq!(quote.rule, FeeRule::NoCharge);
    }

    #[test]
    fn test_non_positive_amount_quotes_zero() {
        let from = account(AccountType::BankAccount, "Ecobank Ghana");
        let to = account(AccountType::BankAccount, "Fidelity Bank");

        assert_eq!(transfer_fee(Money::zero(), &from, &to), Money::zero());
        assert_eq!(
            transfer_fee(Money::from_cedis(-5), &from, &to),
            Money::zero()
        );
    }

    #[test]
    fn test_percentage_fee_rounds_half_up() {
        let from = account(AccountType::MobileWallet, "MTN Mobile Money");
        let to = account(AccountType::MobileWallet, "Vodafone Cash");

        // 1% of 0.50 = 0.005 -> 0.01
        assert_eq!(
            transfer_fee(Money::from_pesewas(50), &from, &to),
            Money::from_pesewas(1)
        );
        // 1% of 0.49 = 0.0049 -> 0.00
        assert_eq!(
            transfer_fee(Money::from_pesewas(49), &from, &to),
            Money::zero()
        );
    }
}
