use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::{AccountId, Platform, ProofUpload, WalletError};
use crate::service::WalletService;

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Tony",
];
const LAST_NAMES: [&str; 8] = [
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Hoare",
];

/// Seed a running wallet system with demo accounts: registered, approved,
/// each with one approved deposit and a pending withdrawal here and there.
/// Used by the CLI to exercise the system end to end.
pub async fn seed_demo(
    service: &WalletService,
    count: usize,
) -> Result<Vec<AccountId>, WalletError> {
    let mut account_ids = Vec::with_capacity(count);
    let mut rng = rand::rng();

    for i in 0..count {
        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Demo");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("User");
        let email = format!("{}.{}.{}@example.com", first.to_lowercase(), last.to_lowercase(), i);

        let profile = service.register_account(first, last, email).await?;
        service.approve_account(profile.id).await?;

        let amount = 100.0 + rng.random_range(0.0..4900.0);
        let deposit = service
            .request_deposit(
                profile.id,
                amount,
                ProofUpload {
                    file_name: "proof.png".to_string(),
                    bytes: vec![0u8; 64],
                },
            )
            .await?;
        service.approve_deposit(deposit.id, "demo seed").await?;

        if i % 3 == 0 {
            let withdraw_amount = rng.random_range(10.0..amount / 2.0);
            service
                .request_withdrawal(
                    profile.id,
                    withdraw_amount,
                    Platform::Binance,
                    "demo-wallet-address",
                )
                .await?;
        }

        account_ids.push(profile.id);
    }

    tracing::info!("seeded {} demo accounts", account_ids.len());
    Ok(account_ids)
}
