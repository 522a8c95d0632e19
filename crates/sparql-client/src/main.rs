use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sparql_client::config::ClientConfig;
use sparql_client::{ExecuteOptions, SparqlClient};

/// Fill in a SPARQL template and send it to an endpoint.
#[derive(Parser)]
#[command(name = "sparql-client", version, about)]
struct Cli {
    /// Path to the query template, or `-` for stdin.
    query: PathBuf,

    /// SPARQL endpoint URL (overrides the config file).
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// TOML config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base IRI for the preamble.
    #[arg(long, value_name = "URI")]
    base: Option<String>,

    /// Extra prefix declaration (repeatable).
    #[arg(long = "prefix", value_name = "NAME=URI", value_parser = parse_pair)]
    prefixes: Vec<(String, String)>,

    /// Declare well-known prefixes; all of them when no names are given.
    #[arg(long, value_name = "NAMES", num_args = 0.., value_delimiter = ',')]
    common: Option<Vec<String>>,

    /// Replace `?NAME` with VALUE (repeatable, applied in order).
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_pair)]
    bindings: Vec<(String, String)>,

    /// Extra protocol parameter (repeatable).
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_pair)]
    params: Vec<(String, String)>,

    /// Print the final statement instead of sending it.
    #[arg(long)]
    dry_run: bool,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_template(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if config.endpoint.is_empty() && !cli.dry_run {
        return Err("no endpoint given; use --endpoint or a config file".into());
    }

    let mut client = SparqlClient::with_config(&config)?;
    if let Some(base) = &cli.base {
        client.register(base.as_str());
    }
    if let Some(names) = &cli.common {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        client.register_common(&names)?;
    }
    for (name, uri) in &cli.prefixes {
        client.register((name.as_str(), uri.as_str()));
    }

    let template = read_template(&cli.query)?;
    let query = cli
        .bindings
        .iter()
        .fold(client.query(template), |query, (name, value)| {
            query.bind(name, value)
        });

    let mut output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.dry_run {
        let text = query.render()?;
        let kind = query.kind()?;
        output_writer.write_all(text.as_bytes())?;
        output_writer.flush()?;
        if !cli.quiet {
            eprintln!("Statement kind: {kind}");
        }
        return Ok(());
    }

    let options = ExecuteOptions {
        parameters: cli.params.clone(),
    };
    let result = query.execute_with(options).await?;

    serde_json::to_writer_pretty(&mut output_writer, &result)?;
    writeln!(output_writer)?;
    output_writer.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
