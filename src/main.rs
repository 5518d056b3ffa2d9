use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trading_journal::config::Config;
use trading_journal::risk::{generate_plan, QuestionnaireAnswers};
use trading_journal::trading::{decorate, TradeRecord, TradeSignal};

const USAGE: &str = "usage:
  journal plan <answers.json|->
  journal trades <trades.json|->
  journal signal <signal.json|-> <record-id>";

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, source) = match (args.first(), args.get(1)) {
        (Some(c), Some(s)) => (c.as_str(), s.as_str()),
        _ => bail!("{USAGE}"),
    };

    let raw = read_input(source).await?;
    let json: Value = serde_json::from_str(&raw).with_context(|| format!("parsing {source}"))?;

    match command {
        "plan" => {
            // Accept the bare answers map or the `{ "answers": {...} }`
            // request body the web client posts.
            let answers = match json {
                Value::Object(mut map) if map.contains_key("answers") => {
                    map.remove("answers").unwrap_or(Value::Null)
                }
                other => other,
            };
            if answers.is_null() {
                bail!("missing questionnaire answers");
            }
            let answers = QuestionnaireAnswers::from_value(answers)?;
            let plan = generate_plan(answers).context("generating risk plan")?;
            emit(&cfg, &plan)
        }
        "trades" => {
            let trades: Vec<TradeRecord> =
                serde_json::from_value(json).context("decoding trade records")?;
            let listing = decorate(&trades);
            info!("Decorated {} trades", listing.len());
            emit(&cfg, &listing)
        }
        "signal" => {
            let record_id: u64 = args
                .get(2)
                .context(USAGE)?
                .parse()
                .context("record id must be a non-negative integer")?;
            let signal: TradeSignal =
                serde_json::from_value(json).context("decoding trade signal")?;
            let record = signal
                .into_record(record_id, Utc::now().date_naive())
                .context("opening trade from signal")?;
            info!("Opened pending {} trade on {}", record.direction, record.asset);
            emit(&cfg, &record)
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

async fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("reading stdin")?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("reading {source}"))
    }
}

fn emit<T: Serialize>(cfg: &Config, value: &T) -> Result<()> {
    let out = if cfg.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
