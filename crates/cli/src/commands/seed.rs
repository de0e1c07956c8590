//! Seed the database with one sample button per type.
//!
//! ```bash
//! buttons-cli seed --created-by 6f1c1b84-4a6e-4b7a-9f0e-2d7c1f3f7c11
//! ```
//!
//! Names that already exist are skipped, so seeding twice is harmless.

use std::sync::Arc;

use buttons_api::db::{self, PgButtonRepository};
use buttons_core::usecase::{CreateButtonCommand, CreateButtonUseCase};
use buttons_core::{ActorId, ButtonRepository, ButtonType, UseCaseError};

use super::{CommandError, database_url};

/// Sample name and description for a button type.
const fn sample(button_type: ButtonType) -> (&'static str, &'static str) {
    match button_type {
        ButtonType::Default => ("Default", "Neutral action"),
        ButtonType::Primary => ("Submit", "Main call to action"),
        ButtonType::Secondary => ("Back", "Secondary navigation"),
        ButtonType::Success => ("Confirm", "Completes a successful flow"),
        ButtonType::Warning => ("Proceed Anyway", "Continues despite a warning"),
        ButtonType::Danger => ("Delete", "Destructive action"),
        ButtonType::Info => ("Learn More", "Opens help content"),
        ButtonType::Light => ("Dismiss", "Low-emphasis action on dark backgrounds"),
        ButtonType::Dark => ("Open Menu", "High-contrast action on light backgrounds"),
    }
}

/// Insert the sample buttons.
///
/// # Errors
///
/// Returns `CommandError` if the URL is missing, the database is unreachable
/// or an insert fails for a reason other than an existing name.
pub async fn run(created_by: ActorId) -> Result<(), CommandError> {
    let url = database_url()?;
    let pool = db::create_pool(&url).await?;
    let repository: Arc<dyn ButtonRepository> = Arc::new(PgButtonRepository::new(pool));
    let create = CreateButtonUseCase::new(repository);

    let mut inserted = 0_usize;
    for button_type in ButtonType::ALL {
        let (name, description) = sample(button_type);
        let command = CreateButtonCommand {
            name: name.to_owned(),
            description: Some(description.to_owned()),
            button_type,
            created_by,
        };

        match create.execute(command).await {
            Ok(_) => inserted += 1,
            Err(UseCaseError::DuplicateName(_)) => {
                tracing::info!(name, "Button exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(inserted, "Seeding complete");
    Ok(())
}
