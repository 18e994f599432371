use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use tb_lattice::interfaces::Cartesian;
use tb_lattice::lattice::{
    graphene_monolayer, linear_chain, simple_cubic_lattice, square_lattice, square_supercell,
    Lattice,
};

#[derive(Parser)]
#[command(name = "tb-lattice")]
#[command(about = "Build preset tight-binding lattices and inspect their compiled structure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled site table of a preset lattice
    Inspect {
        /// Preset lattice to build
        #[arg(short, long, value_enum, default_value = "graphene")]
        preset: Preset,

        /// Lattice parameter
        #[arg(short, long, default_value = "1.0")]
        a: f64,

        /// Nearest-neighbor hopping energy
        #[arg(short, long, default_value = "-1.0", allow_hyphen_values = true)]
        t: f64,

        /// Origin offset as x,y,z
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        offset: Option<Vec<f64>>,

        /// Supercell size for the `supercell` preset
        #[arg(long, default_value = "4")]
        size: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Chain,
    Square,
    Graphene,
    Cubic,
    Supercell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting tb-lattice v{}", tb_lattice::VERSION);

    match cli.command {
        Commands::Inspect {
            preset,
            a,
            t,
            offset,
            size,
        } => {
            let lattice = build_preset(preset, a, t, size)
                .with_context(|| format!("Failed to build preset {:?}", preset))?;
            let lattice = match offset {
                Some(offset) => lattice
                    .with_offset(parse_offset(&offset)?)
                    .context("Invalid lattice offset")?,
                None => lattice,
            };
            inspect(&lattice);
            Ok(())
        }
    }
}

fn build_preset(preset: Preset, a: f64, t: f64, size: usize) -> tb_lattice::Result<Lattice> {
    debug!("Building {:?} lattice with a = {}, t = {}", preset, a, t);
    match preset {
        Preset::Chain => linear_chain(a, t),
        Preset::Square => square_lattice(a, t),
        Preset::Graphene => graphene_monolayer(a, t),
        Preset::Cubic => simple_cubic_lattice(a, t),
        Preset::Supercell => square_supercell(a, t, size, size),
    }
}

fn parse_offset(values: &[f64]) -> anyhow::Result<Cartesian> {
    match values {
        [x] => Ok(Cartesian::new(*x, 0.0, 0.0)),
        [x, y] => Ok(Cartesian::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Cartesian::new(*x, *y, *z)),
        _ => bail!("Offset needs 1 to 3 components, got {}", values.len()),
    }
}

fn inspect(lattice: &Lattice) {
    let structure = lattice.optimized_structure();
    info!(
        "{}D lattice, {} sublattices, {} hopping families, {} compiled hoppings",
        lattice.ndim(),
        lattice.nsub(),
        lattice.nhop(),
        structure.num_hoppings()
    );

    let names = lattice.sublattices().map(|s| s.name.as_str()).collect::<Vec<_>>();
    for (id, site) in structure.iter().enumerate() {
        println!(
            "{:>4} {:<8} alias {:<8} at ({:.4}, {:.4}, {:.4})",
            id,
            names[id],
            names[site.alias as usize],
            site.position.x,
            site.position.y,
            site.position.z
        );
        for hopping in &site.hoppings {
            println!(
                "       -> {:<8} cell {:?} family {}{}",
                names[hopping.sublattice as usize],
                hopping.relative_index.as_slice(),
                hopping.family,
                if hopping.is_conjugate { " (conjugate)" } else { "" }
            );
        }
    }

    println!("max hoppings per row: {}", lattice.max_hoppings());
    println!("onsite energy:        {}", lattice.has_onsite_energy());
    println!("multiple orbitals:    {}", lattice.has_multiple_orbitals());
    println!("complex hoppings:     {}", lattice.has_complex_hoppings());
}
