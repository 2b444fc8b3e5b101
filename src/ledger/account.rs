use super::bank::BankId;
use super::error::LedgerError;
use super::Decimal;
use serde::{Deserialize, Serialize};

/// An owner's account with an exact decimal balance.
///
/// Equality is by value: two accounts are equal when their owners match and their
/// balances are numerically equal. The bank back-reference is not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: Decimal,
    #[serde(skip)]
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    /// Returns the owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the bank this account was added to, if any
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(super) fn attach(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Debit `amount` from the account.
    ///
    /// The new balance is computed and checked before it is stored, so a failed debit
    /// leaves the balance exactly as it was. `amount` is expected to be non-negative;
    /// this is not checked.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| self.out_of_range())?;
        if new_balance < Decimal::ZERO {
            return Err(LedgerError::InsufficientFunds {
                owner: self.owner.clone(),
                balance: self.balance,
                requested: amount,
            });
        }

        log::trace!(
            "[debit] owner={} amount={} -> balance={}",
            self.owner,
            amount,
            new_balance
        );
        self.balance = new_balance;
        Ok(())
    }

    /// Credit `amount` to the account. A negative amount is added as-is.
    ///
    /// # Panics
    /// Panics if the balance would leave the `Decimal` range; see [`Account::try_credit`].
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
        log::trace!(
            "[credit] owner={} amount={} -> balance={}",
            self.owner,
            amount,
            self.balance
        );
    }

    /// Credit `amount`, refusing a result outside the `Decimal` range.
    pub fn try_credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.credited_balance(amount)?;
        self.credit(amount);
        Ok(())
    }

    /// Balance after crediting `amount`, without storing it.
    pub(super) fn credited_balance(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> LedgerError {
        LedgerError::AmountOutOfRange {
            owner: self.owner.clone(),
        }
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn juan() -> Account {
        Account::new("Juan", dec!(1000.12345))
    }

    #[test]
    fn test_new_account_keeps_owner_and_balance() {
        let account = juan();
        assert_eq!(account.owner(), "Juan");
        assert_eq!(account.balance(), dec!(1000.12345));
        assert!(account.bank().is_none());
        assert!(account.balance() >= Decimal::ZERO);
    }

    #[test]
    fn test_debit_is_exact() {
        let mut account = juan();
        account.debit(dec!(100)).unwrap();

        assert_eq!(account.balance(), dec!(900.12345));
        assert_eq!(account.balance().to_string(), "900.12345");
        assert_eq!(account.balance().trunc(), dec!(900));
    }

    #[test]
    fn test_credit_is_exact() {
        let mut account = juan();
        account.credit(dec!(100));

        assert_eq!(account.balance(), dec!(1100.12345));
        assert_eq!(account.balance().to_string(), "1100.12345");
    }

    #[test]
    fn test_debit_insufficient_funds_leaves_balance_unchanged() {
        let mut account = juan();
        let err = account.debit(dec!(1500)).unwrap_err();

        assert_eq!(err.to_string(), "Insufficient Funds");
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                owner: "Juan".to_string(),
                balance: dec!(1000.12345),
                requested: dec!(1500),
            }
        );
        assert_eq!(account.balance().to_string(), "1000.12345");
    }

    #[test]
    fn test_debit_whole_balance_leaves_zero() {
        let mut account = juan();
        account.debit(dec!(1000.12345)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_credit_accepts_negative_amount() {
        let mut account = juan();
        account.credit(dec!(-0.12345));
        assert_eq!(account.balance(), dec!(1000));
    }

    #[test]
    fn test_try_credit_rejects_overflow() {
        let mut account = Account::new("Juan", Decimal::MAX);
        let err = account.try_credit(dec!(1)).unwrap_err();

        assert_eq!(
            err,
            LedgerError::AmountOutOfRange {
                owner: "Juan".to_string()
            }
        );
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_debit_rejects_overflow() {
        let mut account = Account::new("Juan", Decimal::MIN);
        assert!(matches!(
            account.debit(dec!(1)),
            Err(LedgerError::AmountOutOfRange { .. })
        ));
        assert_eq!(account.balance(), Decimal::MIN);
    }

    #[test]
    fn test_equality_is_by_value() {
        let account = Account::new("John Doe", dec!(8900.9997));
        let other = Account::new("John Doe", dec!(8900.9997));
        assert_eq!(account, other);
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(
            Account::new("John Doe", dec!(3000)),
            Account::new("John Doe", dec!(3000.00))
        );
    }

    #[test]
    fn test_equality_requires_owner_and_balance() {
        let account = Account::new("John Doe", dec!(8900.9997));
        assert_ne!(account, Account::new("Jane Doe", dec!(8900.9997)));
        assert_ne!(account, Account::new("John Doe", dec!(8900.9996)));
    }

    #[test]
    fn test_equality_ignores_bank() {
        let mut attached = Account::new("John Doe", dec!(10));
        attached.attach(BankId::next());
        assert_eq!(attached, Account::new("John Doe", dec!(10)));
    }

    #[test]
    fn test_repeated_debit_from_fresh_state_is_stable() {
        for _ in 0..5 {
            let mut account = juan();
            account.debit(dec!(100)).unwrap();
            assert_eq!(account.balance().to_string(), "900.12345");
        }
    }

    #[rstest]
    #[case(dec!(100))]
    #[case(dec!(200))]
    #[case(dec!(300))]
    #[case(dec!(500))]
    #[case(dec!(700))]
    #[case(dec!(1000.1234))]
    fn test_debit_leaves_positive_balance(#[case] amount: Decimal) {
        let mut account = juan();
        account.debit(amount).unwrap();
        assert!(account.balance() > Decimal::ZERO);
        assert_eq!(account.balance(), dec!(1000.12345) - amount);
    }

    #[rstest]
    #[case("Roberto", dec!(200), dec!(100), "100")]
    #[case("Andres", dec!(250), dec!(200), "50")]
    #[case("Pepe", dec!(300), dec!(300), "0")]
    #[case("Cata", dec!(501), dec!(500), "1")]
    #[case("Pipe", dec!(750), dec!(700), "50")]
    #[case("Jose", dec!(1000.12345), dec!(1000.12345), "0.00000")]
    fn test_debit_table(
        #[case] owner: &str,
        #[case] balance: Decimal,
        #[case] amount: Decimal,
        #[case] expected: &str,
    ) {
        let mut account = Account::new(owner, balance);
        account.debit(amount).unwrap();
        assert_eq!(account.owner(), owner);
        assert_eq!(account.balance().to_string(), expected);
    }

    #[rstest]
    #[case(dec!(0), dec!(0.0001))]
    #[case(dec!(99.99), dec!(100))]
    #[case(dec!(1000.12345), dec!(1000.12346))]
    fn test_overdraft_table(#[case] balance: Decimal, #[case] amount: Decimal) {
        let mut account = Account::new("Juan", balance);
        assert!(matches!(
            account.debit(amount),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance(), balance);
    }
}
