//! Database seeder for Teller development and testing.
//!
//! Inserts five demonstration accounts. Accounts whose number already exists
//! are left alone, so the seeder can be re-run.
//!
//! Usage: cargo run --bin seeder

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use teller_core::{AccountStore, AccountType, NewAccount};
use teller_db::AccountRepository;
use teller_shared::AppConfig;

struct SeedAccount {
    number: &'static str,
    holder: &'static str,
    kind: AccountType,
    balance: Decimal,
    email: &'static str,
    phone: &'static str,
}

fn seed_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount {
            number: "ACC-001-2024",
            holder: "John Smith",
            kind: AccountType::Savings,
            balance: dec!(15000.50),
            email: "john.smith@email.com",
            phone: "555-0101",
        },
        SeedAccount {
            number: "ACC-002-2024",
            holder: "Sarah Johnson",
            kind: AccountType::Checking,
            balance: dec!(8750.25),
            email: "sarah.j@email.com",
            phone: "555-0102",
        },
        SeedAccount {
            number: "ACC-003-2024",
            holder: "Tech Solutions Inc.",
            kind: AccountType::Business,
            balance: dec!(125000.00),
            email: "finance@techsolutions.com",
            phone: "555-0103",
        },
        SeedAccount {
            number: "ACC-004-2024",
            holder: "Maria Garcia",
            kind: AccountType::Savings,
            balance: dec!(3200.75),
            email: "maria.garcia@email.com",
            phone: "555-0104",
        },
        SeedAccount {
            number: "ACC-005-2024",
            holder: "Robert Chen",
            kind: AccountType::Checking,
            balance: dec!(22500.00),
            email: "r.chen@email.com",
            phone: "555-0105",
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    println!("Connecting to database...");
    let db = teller_db::connect(&config.database).await?;
    let repo = AccountRepository::new(db);

    println!("Seeding accounts...");
    for seed in seed_accounts() {
        if repo.find_by_account_number(seed.number).await?.is_some() {
            println!("  {} already exists, skipping...", seed.number);
            continue;
        }

        let account = repo
            .create(NewAccount {
                account_number: seed.number.to_string(),
                holder_name: seed.holder.to_string(),
                account_type: seed.kind,
                balance: seed.balance,
                email: Some(seed.email.to_string()),
                phone: Some(seed.phone.to_string()),
            })
            .await?;
        println!("  Created {} (id {})", account.account_number, account.id);
    }

    println!("Seeding complete!");
    Ok(())
}
