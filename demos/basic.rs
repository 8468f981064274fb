use std::time::Duration;

use iex_rs::{ActionRange, ChartOptions, ChartRange, IexClient, StockQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A single endpoint renders directly under the symbol.
    let single = StockQuery::new(["aapl"])?.quote(true);
    println!("single: {single}");

    // 2. Several symbols or endpoints collapse into one batch call.
    //    Both chart and dividends carry a range; the chart's (first) one is sent.
    let batch = StockQuery::new(["AAPL", "BDC"])?
        .quote(false)
        .news(5)?
        .chart_with(
            ChartRange::M1,
            ChartOptions {
                interval: 2,
                ..ChartOptions::default()
            },
        )
        .dividends(ActionRange::Y1);
    println!("batch:  {batch}");

    // 3. Hand the URL to the transport.
    let client = IexClient::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let body: serde_json::Value = client.fetch_json(&batch).await?;
    if let Some(obj) = body.as_object() {
        for (symbol, sections) in obj {
            let kinds: Vec<&str> = sections
                .as_object()
                .map(|s| s.keys().map(String::as_str).collect())
                .unwrap_or_default();
            println!("{symbol}: {}", kinds.join(", "));
        }
    }

    Ok(())
}
