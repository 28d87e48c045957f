//! `jlp-da`: command-line front end for the dependency analysis client.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** from arguments and environment variables.
//! 2. **Wire observability**: `tracing-subscriber` with an `EnvFilter` read from
//!    `RUST_LOG` (default `warn`) and a JSON layer on stderr. All `tracing`
//!    events emitted by the `jsonrpc` and `da` crates flow through it.
//! 3. **Construct the client** and hand it to [`run`] as a
//!    [`da::DependencyAnalyzer`].
//! 4. **Cancel on Ctrl-C**: the signal cancels the call context, which aborts
//!    the in-flight HTTP request.

mod render;

use std::io::Read as _;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use da::{CallContext, DependencyAnalyzer, Options};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::render::{render, Format};

#[derive(Debug, Parser)]
#[command(
    name = "jlp-da",
    version,
    about = "Japanese dependency analysis via the Yahoo! JAPAN DAService API"
)]
struct Args {
    /// Yahoo! JAPAN application id.
    #[arg(long, env = "YAHOO_APP_ID", hide_env_values = true)]
    app_id: String,

    /// Override the API endpoint.
    #[arg(long, env = "JLP_DA_ENDPOINT", default_value = da::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Give up after this many seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List the morphemes of each chunk (text format only).
    #[arg(long)]
    tokens: bool,

    /// Text to analyse; read from stdin when omitted.
    text: Vec<String>,
}

impl Args {
    fn input(&self) -> anyhow::Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read text from stdin")?;
        Ok(buf.trim_end().to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    let text = args.input()?;

    let client = da::Client::with_options(
        &args.app_id,
        Options::default().with_endpoint(&args.endpoint),
    )
    .context("create dependency analysis client")?;

    let cancel = CancellationToken::new();
    let ctx = CallContext::with_cancellation(cancel.clone())
        .with_timeout(Duration::from_secs(args.timeout));
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            cancel.cancel();
        }
    });

    let out = run(&client, &ctx, &text, args.format, args.tokens).await?;
    print!("{out}");
    Ok(())
}

/// Analyses `text` and renders the result.
async fn run(
    analyzer: &dyn DependencyAnalyzer,
    ctx: &CallContext,
    text: &str,
    format: Format,
    with_tokens: bool,
) -> anyhow::Result<String> {
    if text.is_empty() {
        anyhow::bail!("no input text");
    }
    let result = analyzer
        .analyze(ctx, text)
        .await
        .context("dependency analysis")?;
    render(&result, format, with_tokens)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use da::{Chunk, ParseResult, Token};

    use super::*;

    struct FixedAnalyzer;

    #[async_trait]
    impl DependencyAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _ctx: &CallContext, text: &str) -> Result<ParseResult, da::Error> {
            Ok(ParseResult {
                chunks: vec![Chunk {
                    head: -1,
                    id: 0,
                    tokens: vec![Token::new([text])],
                }],
            })
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl DependencyAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _ctx: &CallContext, _text: &str) -> Result<ParseResult, da::Error> {
            Err(da::Error::Parse {
                source: jsonrpc::Error::Cancelled,
            })
        }
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["jlp-da", "--app-id", "abc", "今日は", "晴れ"]).unwrap();
        assert_eq!(args.app_id, "abc");
        assert_eq!(args.endpoint, da::DEFAULT_ENDPOINT);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.format, Format::Text);
        assert!(!args.tokens);
        assert_eq!(args.input().unwrap(), "今日は 晴れ");
    }

    #[test]
    fn args_accept_format_and_endpoint() {
        let args = Args::try_parse_from([
            "jlp-da",
            "--app-id",
            "abc",
            "--endpoint",
            "http://127.0.0.1:9000/parse",
            "--format",
            "tree",
            "x",
        ])
        .unwrap();
        assert_eq!(args.endpoint, "http://127.0.0.1:9000/parse");
        assert_eq!(args.format, Format::Tree);
    }

    #[tokio::test]
    async fn run_renders_analysis() {
        let out = run(
            &FixedAnalyzer,
            &CallContext::background(),
            "いる",
            Format::Text,
            false,
        )
        .await
        .unwrap();
        assert_eq!(out, "0\t-1\tいる\n");
    }

    #[tokio::test]
    async fn run_rejects_empty_input() {
        let err = run(&FixedAnalyzer, &CallContext::background(), "", Format::Text, false)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no input text");
    }

    #[tokio::test]
    async fn run_keeps_error_chain() {
        let err = run(&FailingAnalyzer, &CallContext::background(), "x", Format::Text, false)
            .await
            .unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(
            chain,
            ["dependency analysis", "failed to parse text", "call cancelled"]
        );
    }
}
