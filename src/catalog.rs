//! Selection catalogs for the entry forms
//!
//! Declarative lookup tables backing the dependent selects: account type to
//! provider, expense category to subcategory, plus the flat income category
//! and payment method lists. Forms clear the chosen child value whenever the
//! parent changes; the tables themselves are pure data.

use crate::models::AccountType;

/// Providers offered for each account type
pub fn providers_for(account_type: AccountType) -> &'static [&'static str] {
    match account_type {
        AccountType::BankAccount => &[
            "Ghana Commercial Bank",
            "Ecobank Ghana",
            "Standard Chartered",
            "Fidelity Bank",
            "Zenith Bank",
            "Access Bank",
            "Stanbic Bank",
            "Absa Bank",
            "Prudential Bank",
            "Other Bank",
        ],
        AccountType::MobileWallet => &[
            "MTN Mobile Money",
            "Vodafone Cash",
            "AirtelTigo Money",
            "Zeepay",
            "Other Mobile Wallet",
        ],
        AccountType::CreditCard => &[
            "Visa",
            "MasterCard",
            "American Express",
            "Other Credit Card",
        ],
        AccountType::Cash => &["Physical Cash", "Petty Cash", "Emergency Cash"],
    }
}

/// Top-level expense categories, in display order
pub const EXPENSE_CATEGORIES: [&str; 3] = ["Needs", "Wants", "Emergency"];

/// Subcategories offered for each expense category
///
/// Unknown categories yield an empty slice, which leaves the dependent
/// select with nothing to offer.
pub fn subcategories_for(category: &str) -> &'static [&'static str] {
    match category {
        "Needs" => &[
            "Food & Groceries",
            "Rent/Mortgage",
            "Transportation",
            "Utilities",
            "Insurance",
            "Healthcare",
            "Phone Bill",
            "Internet",
        ],
        "Wants" => &[
            "Entertainment",
            "Dining Out",
            "Shopping",
            "Travel",
            "Hobbies",
            "Subscriptions",
            "Personal Care",
            "Gifts",
        ],
        "Emergency" => &[
            "Medical Emergency",
            "Car Repairs",
            "Home Repairs",
            "Urgent Replacement",
            "Other Emergency",
        ],
        _ => &[],
    }
}

/// Income categories
pub const INCOME_CATEGORIES: [&str; 7] = [
    "Salary",
    "Freelance",
    "Business",
    "Investment Returns",
    "Gift/Bonus",
    "Side Hustle",
    "Other",
];

/// Payment methods offered on the expense form
pub const PAYMENT_METHODS: [&str; 5] = [
    "Bank Account",
    "Mobile Wallet",
    "Cash",
    "Credit Card",
    "Debit Card",
];

/// Check whether a subcategory belongs to a category
pub fn is_valid_subcategory(category: &str, subcategory: &str) -> bool {
    subcategories_for(category).contains(&subcategory)
}

/// Check whether a provider is offered for an account type
pub fn is_valid_provider(account_type: AccountType, provider: &str) -> bool {
    providers_for(account_type).contains(&provider)
}
