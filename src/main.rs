use clap::Parser;
use serde::Serialize;
use shim_stack::render;
use shim_stack::units::round3;
use shim_stack::catalog::STEEL_SIZES;
use shim_stack::{
    Catalog, CatalogError, Solution, Solver, SummaryEntry, UnitScale, validate_target,
};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "shim_stack",
    about = "Minimum-piece shim stack calculator for steel tooling"
)]
struct Cli {
    /// Target width in inches (e.g. 1.005)
    #[arg(allow_negative_numbers = true)]
    target: f64,

    /// Override the catalog with a list of sizes in inches (e.g. "3,2,1,0.5")
    #[arg(long)]
    sizes: Option<String>,

    /// Units per inch used for the search (default: thousandths)
    #[arg(long, default_value_t = 1000)]
    scale: u32,

    /// Show ASCII layout of the stack
    #[arg(long)]
    layout: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log solver details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOutput {
    target: f64,
    width: f64,
    under: f64,
    exact: bool,
    piece_count: usize,
    pieces: Vec<SummaryEntry>,
}

impl From<&Solution> for JsonOutput {
    fn from(sol: &Solution) -> Self {
        Self {
            target: round3(sol.target()),
            width: round3(sol.width()),
            under: round3(sol.under()),
            exact: sol.is_exact(),
            piece_count: sol.piece_count(),
            pieces: sol.summary(),
        }
    }
}

fn build_catalog(sizes: Option<&str>, scale: u32) -> Result<Catalog, CatalogError> {
    let scale = UnitScale::new(scale)?;
    match sizes {
        Some(list) => Catalog::new(&Catalog::parse_sizes(list)?, scale),
        None if scale == UnitScale::THOUSANDTHS => Ok(Catalog::steel()),
        None => Catalog::new(&STEEL_SIZES, scale),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let catalog = build_catalog(cli.sizes.as_deref(), cli.scale).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let target = validate_target(cli.target, catalog.scale()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let solver = Solver::new(catalog);
    let solution = solver.solve(target);

    if cli.json {
        match serde_json::to_string_pretty(&JsonOutput::from(&solution)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render::render_report(&solution));
    if cli.layout {
        println!();
        print!("{}", render::render_stack(&solution));
    }
}
