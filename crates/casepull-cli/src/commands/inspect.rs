//! Inspect command implementation.

use crate::auth::resolve_credential;
use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use casepull_domain::CaseId;
use casepull_sdk::CaseClient;

/// Execute the inspect command.
pub async fn execute_inspect(
    args: InspectArgs,
    token_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let id = CaseId::new(args.case.trim());
    let credential = resolve_credential(token_override, &config.auth, config.api.timeout()).await?;
    let client = CaseClient::new(config.api_settings(), credential)?;

    println!("{}", formatter.info(&format!("GET {}", client.case_url(&id))));

    let record = match client.fetch(&id).await {
        Ok(record) => record,
        Err(error) => {
            eprintln!("{}", formatter.fetch_failure(&id, &error));
            return Err(CliError::Fetch {
                case: id.to_string(),
                source: error,
            });
        }
    };

    if !args.fields_only {
        println!("{}", serde_json::to_string_pretty(record.as_map())?);
        println!();
    }
    println!("{}", formatter.fields_table(&record));
    println!(
        "{}",
        formatter.success(&format!("Case {} has {} top-level fields", id, record.len()))
    );

    Ok(())
}
