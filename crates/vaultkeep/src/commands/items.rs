// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `add`, `get`, `list`, `edit` and `rm` commands.

use std::io::IsTerminal;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use vaultkeep_client::prompt::{get_master_password, get_master_password_with_confirm};
use vaultkeep_client::{DecryptedItem, VaultClient, mask_secret};
use vaultkeep_config::VaultkeepConfig;
use vaultkeep_core::{ItemId, OwnerId, VaultError, VaultStore};
use vaultkeep_crypto::{GeneratorOptions, KdfParams, SecretRecord, generate_password};
use vaultkeep_storage::SqliteVaultStore;

use super::{paint, use_color};
use crate::RecordArgs;

/// The account from `--account`, else `client.account`.
pub(crate) fn resolve_account(
    cli_account: Option<&str>,
    config: &VaultkeepConfig,
) -> Result<String, VaultError> {
    cli_account
        .or(config.client.account.as_deref())
        .map(str::to_string)
        .ok_or_else(|| {
            VaultError::InvalidInput(
                "no account given. Pass --account or set client.account".to_string(),
            )
        })
}

/// Open the store and unlock it for the resolved account.
///
/// With `confirm_new`, an account that has no items yet gets a confirming
/// double prompt for the master password.
async fn open_vault(
    config: &VaultkeepConfig,
    cli_account: Option<&str>,
    confirm_new: bool,
) -> Result<VaultClient<SqliteVaultStore>, VaultError> {
    let account = resolve_account(cli_account, config)?;
    let owner = OwnerId::new(&account)?;
    let store = SqliteVaultStore::open(&config.storage).await?;

    let master_password = if confirm_new && store.list(&owner).await?.is_empty() {
        debug!("first item for this account");
        get_master_password_with_confirm()?
    } else {
        get_master_password()?
    };

    VaultClient::unlock(
        &account,
        &master_password,
        &KdfParams::from(&config.kdf),
        store,
    )
}

async fn close_vault(vault: VaultClient<SqliteVaultStore>) -> Result<(), VaultError> {
    vault.lock().close().await
}

fn read_item_password() -> Result<SecretString, VaultError> {
    if !std::io::stdin().is_terminal() {
        return Err(VaultError::InvalidInput(
            "no item password given. Pass --password or --generate".to_string(),
        ));
    }
    eprint!("Item password: ");
    rpassword::read_password()
        .map(SecretString::from)
        .map_err(|e| VaultError::Internal(format!("failed to read item password: {e}")))
}

/// Overwrite the fields of `record` that were given on the command line.
pub(crate) fn apply_fields(
    record: &mut SecretRecord,
    fields: RecordArgs,
    generator: &GeneratorOptions,
) -> Result<(), VaultError> {
    if let Some(title) = fields.title {
        record.title = title;
    }
    if let Some(username) = fields.username {
        record.username = username;
    }
    if let Some(url) = fields.url {
        record.url = url;
    }
    if let Some(notes) = fields.notes {
        record.notes = notes;
    }
    if let Some(password) = fields.password {
        record.password = password;
    } else if fields.generate {
        record.password = generate_password(generator)?;
    }
    Ok(())
}

pub async fn add(
    config: &VaultkeepConfig,
    account: Option<&str>,
    fields: RecordArgs,
) -> Result<(), VaultError> {
    if fields.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        return Err(VaultError::InvalidInput("--title is required".to_string()));
    }
    let needs_prompt = fields.password.is_none() && !fields.generate;

    let mut record = SecretRecord::default();
    apply_fields(
        &mut record,
        fields,
        &GeneratorOptions::from(&config.generator),
    )?;

    let vault = open_vault(config, account, true).await?;
    vault.verify_key().await?;
    if needs_prompt {
        record.password = read_item_password()?.expose_secret().to_string();
    }

    let item = vault.add(&record).await?;
    println!("added {}", item.id);
    close_vault(vault).await
}

pub(crate) fn format_item(item: &DecryptedItem, show: bool) -> String {
    let record = &item.record;
    let password = if show {
        record.password.clone()
    } else {
        mask_secret(&record.password)
    };
    format!(
        "id:       {}\ntitle:    {}\nusername: {}\npassword: {}\nurl:      {}\nnotes:    {}\ncreated:  {}\nupdated:  {}",
        item.id,
        record.title,
        record.username,
        password,
        record.url,
        record.notes,
        item.created_at.to_rfc3339(),
        item.updated_at.to_rfc3339(),
    )
}

pub async fn get(
    config: &VaultkeepConfig,
    account: Option<&str>,
    id: &ItemId,
    show: bool,
) -> Result<(), VaultError> {
    let vault = open_vault(config, account, false).await?;
    let item = vault.get(id).await?;
    println!("{}", format_item(&item, show));
    close_vault(vault).await
}

pub async fn list(config: &VaultkeepConfig, account: Option<&str>) -> Result<(), VaultError> {
    let vault = open_vault(config, account, false).await?;
    let items = vault.list().await?;
    let color = use_color();

    if items.is_empty() {
        println!("no items");
    }
    for entry in &items {
        match &entry.record {
            Ok(record) => println!(
                "{}  {}  {}  {}  {}",
                entry.id,
                record.title,
                record.username,
                mask_secret(&record.password),
                entry.updated_at.format("%Y-%m-%d %H:%M"),
            ),
            Err(e) => println!("{}  {}", entry.id, paint(&e.to_string(), "red", color)),
        }
    }
    close_vault(vault).await
}

pub async fn edit(
    config: &VaultkeepConfig,
    account: Option<&str>,
    id: &ItemId,
    fields: RecordArgs,
) -> Result<(), VaultError> {
    let vault = open_vault(config, account, false).await?;
    let mut record = vault.get(id).await?.record;
    apply_fields(
        &mut record,
        fields,
        &GeneratorOptions::from(&config.generator),
    )?;
    vault.update(id, &record).await?;
    println!("updated {id}");
    close_vault(vault).await
}

pub async fn remove(
    config: &VaultkeepConfig,
    account: Option<&str>,
    id: &ItemId,
) -> Result<(), VaultError> {
    let vault = open_vault(config, account, false).await?;
    vault.delete(id).await?;
    println!("deleted {id}");
    close_vault(vault).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn cli_account_wins_over_config() {
        let mut config = VaultkeepConfig::default();
        config.client.account = Some("config@example.com".to_string());
        assert_eq!(
            resolve_account(Some("cli@example.com"), &config).unwrap(),
            "cli@example.com"
        );
        assert_eq!(
            resolve_account(None, &config).unwrap(),
            "config@example.com"
        );
    }

    #[test]
    fn missing_account_is_invalid_input() {
        let config = VaultkeepConfig::default();
        assert!(matches!(
            resolve_account(None, &config),
            Err(VaultError::InvalidInput(_))
        ));
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let mut record = SecretRecord::new("Mail", "alice", "old-pw", "https://mail", "n");
        let fields = RecordArgs {
            username: Some("alice2".to_string()),
            ..RecordArgs::default()
        };
        apply_fields(&mut record, fields, &GeneratorOptions::default()).unwrap();
        assert_eq!(
            record,
            SecretRecord::new("Mail", "alice2", "old-pw", "https://mail", "n")
        );
    }

    #[test]
    fn generate_flag_replaces_password() {
        let mut record = SecretRecord::new("Mail", "alice", "old-pw", "", "");
        let fields = RecordArgs {
            generate: true,
            ..RecordArgs::default()
        };
        let options = GeneratorOptions {
            length: 24,
            ..GeneratorOptions::default()
        };
        apply_fields(&mut record, fields, &options).unwrap();
        assert_eq!(record.password.chars().count(), 24);
    }

    #[test]
    fn get_output_masks_password_unless_shown() {
        let item = DecryptedItem {
            id: ItemId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            record: SecretRecord::new("Mail", "alice", "correct-horse-battery", "", ""),
        };
        let masked = format_item(&item, false);
        assert!(masked.contains("password: corr...tery"));
        assert!(!masked.contains("correct-horse-battery"));
        assert!(format_item(&item, true).contains("password: correct-horse-battery"));
    }
}
