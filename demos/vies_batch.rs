use piva::batch::enrich_rows_with_progress;
use piva::core::SplitMode;
use piva::vies::ViesClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Requires network access — VIES is a free public service.
    let client = ViesClient::new()?;

    // A spreadsheet column, duplicates and junk included.
    let raws = [
        "IT00743110157",
        "DE123456789",
        "IT00743110157", // duplicate: one lookup serves both rows
        "12345678901",   // bad control digit, never looked up
        "",
    ];

    let rows = enrich_rows_with_progress(&client, raws, SplitMode::EuPrefixScan, |done, total| {
        println!("  lookup {done}/{total}");
    })
    .await;

    println!();
    for row in &rows {
        let status = match (&row.registry, &row.lookup_error) {
            (Some(check), _) => format!(
                "registry valid={} name={}",
                check.valid,
                check.name.as_deref().unwrap_or("—")
            ),
            (None, Some(err)) => format!("lookup failed: {err}"),
            (None, None) => match row.reason {
                Some(reason) => format!("not checked: {reason}"),
                None => "not checked".into(),
            },
        };
        println!("  {:16} {status}", row.raw);
    }

    Ok(())
}
