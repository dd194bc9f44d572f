use std::{env, fs, process};

use anyhow::Context;
use feedforward_net::{Config, Neural};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <config.json> <x1,x2,...> [--dump]", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    let content = fs::read_to_string(path).with_context(|| format!("cannot read '{path}'"))?;
    let config = Config::from_json(&content)?;
    let input = parse_input(&args[2])?;

    let mut net: Neural = Neural::new(&config)?;
    info!("network ready: {} layer(s)", net.layers().len());

    let output = net.predict(&input);
    println!("{output:?}");

    if args[3..].iter().any(|arg| arg == "--dump") {
        println!("{net}");
    }

    Ok(())
}

/// Parses a comma separated list of values.
fn parse_input(raw: &str) -> anyhow::Result<Vec<f32>> {
    raw.split(',')
        .map(|x| {
            let x = x.trim();
            x.parse::<f32>()
                .with_context(|| format!("invalid input value '{x}'"))
        })
        .collect()
}
