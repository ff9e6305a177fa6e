use std::env;
use std::process;

use coinchange::{compare_change, parse_amount, Denominations, MinCoinTable, Result};
use log::LevelFilter;

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false);

    // Let RUST_LOG override the default level
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn print_case(title: &str, amount: usize, coins: &[usize], show_table: bool) -> Result<()> {
    println!("========================================");
    println!("{title}");
    println!("========================================");

    let comparison = compare_change(amount, coins)?;
    println!("{comparison}");

    if show_table {
        let denominations = Denominations::new(coins)?;
        let table = MinCoinTable::build(amount, &denominations)?;
        println!();
        println!("DP Table Visualization:");
        print!("{}", table.render_table());
    }
    println!();
    Ok(())
}

fn run_demo() -> Result<()> {
    print_case("Standard US Coins", 93, &[1, 5, 10, 25, 50, 100], false)?;
    print_case(
        "Indian Rupee",
        376,
        &[1, 2, 5, 10, 20, 50, 100, 500, 2000],
        false,
    )?;
    print_case("Greedy vs Optimal", 6, &[1, 3, 4], false)?;
    print_case(
        "Indian Rupee with DP Table",
        15,
        &[1, 2, 5, 10, 20, 50, 100],
        true,
    )?;
    print_case("Impossible Case", 7, &[3, 5], false)
}

/// `change_demo AMOUNT COIN...` compares both solvers on the given input.
fn run_args(args: &[String]) -> Result<()> {
    let parse = |raw: &str| {
        raw.parse::<i64>()
            .map_err(|e| coinchange::Error::invalid_input(format!("'{raw}': {e}")))
    };

    let amount = parse_amount(parse(args[0].as_str())?)?;
    let coins = args[1..]
        .iter()
        .map(|raw| parse(raw.as_str()))
        .collect::<Result<Vec<_>>>()?;
    let denominations = Denominations::from_signed(&coins)?;

    print_case("Custom Input", amount, denominations.as_slice(), false)
}

fn main() {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = if args.is_empty() {
        run_demo()
    } else {
        run_args(&args)
    };

    if let Err(e) = outcome {
        log::error!("{e}");
        eprintln!("usage: change_demo [AMOUNT COIN...]");
        process::exit(2);
    }
}
