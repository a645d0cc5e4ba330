//! The archive run: resolve, fetch page by page, merge each batch.

use anyhow::{Context, Result, bail};
use postvault_fetch::{ApiClient, MAX_PAGE_SIZE, PostStream, PostsGateway};
use postvault_store::Archive;
use tracing::{info, warn};

use crate::Cli;

/// Drives one full archive run.
///
/// Identity resolution failure and store failures are fatal; an early fetch
/// abort is not - everything merged before it stays durable and the run
/// still ends with a summary.
pub async fn run(cli: &Cli, token: String) -> Result<()> {
    let handle = normalize_handle(&cli.handle)?;
    let page_size = cli.page_size.clamp(1, MAX_PAGE_SIZE);
    if page_size != cli.page_size {
        warn!(
            requested = cli.page_size,
            using = page_size,
            "page size out of range, clamped"
        );
    }

    let mut client = ApiClient::new(token).context("failed to build HTTP client")?;
    if let Some(base_url) = &cli.base_url {
        client = client.with_base_url(base_url.clone());
    }

    if !cli.quiet {
        println!("Resolving @{handle}...");
    }
    let account = client.resolve_user(handle).await?;
    info!(id = %account.id, name = %account.display_name, "resolved account");
    if !cli.quiet {
        println!("Found account id {} ({})", account.id, account.display_name);
    }

    let archive = Archive::for_handle(&cli.out, handle);
    let mut stream = PostStream::new(&client, &account.id, cli.limit, page_size);

    let mut pages = 0usize;
    let mut fetched = 0usize;
    let mut appended = 0usize;

    while let Some(batch) = stream.next_batch().await {
        pages += 1;
        fetched += batch.len();

        let added = archive
            .merge(&batch)
            .await
            .with_context(|| format!("failed to update {}", archive.path().display()))?;
        appended += added;

        if !cli.quiet {
            println!("Page {pages}: {} posts fetched, {added} new", batch.len());
        }
    }

    if let Some(cause) = stream.abort_cause() {
        warn!(error = %cause, "fetch stopped early");
        if !cli.quiet {
            eprintln!("Warning: fetch stopped early: {cause}");
            eprintln!("Everything fetched so far has been saved; re-run to resume.");
        }
    }

    if !cli.quiet {
        println!(
            "Done: {fetched} posts across {pages} pages, {appended} appended to {}",
            archive.path().display()
        );
    }

    Ok(())
}

/// Strips a single leading `@` and rejects an empty result.
fn normalize_handle(raw: &str) -> Result<&str> {
    let handle = raw.strip_prefix('@').unwrap_or(raw);
    if handle.is_empty() {
        bail!("handle is empty");
    }
    Ok(handle)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_handle_strips_marker() {
        assert_eq!(normalize_handle("@alice").unwrap(), "alice");
        assert_eq!(normalize_handle("alice").unwrap(), "alice");
    }

    #[test]
    fn test_normalize_handle_rejects_empty() {
        assert!(normalize_handle("").is_err());
        assert!(normalize_handle("@").is_err());
    }
}
