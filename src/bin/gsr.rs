use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gsr::{
    analysis::center_of_mass_all, export, Endian, FormatConfig, GsrError, IdWidth, RealWidth,
    Snapshot, NUM_SPECIES, SPECIES_NAMES,
};

/// Inspect Gadget-style N-body snapshot files.
#[derive(Parser)]
#[command(name = "gsr")]
struct Args {
    /// Input snapshot files
    #[arg(short = 'f', long = "file", required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Print all particles of this species slot (0-5)
    #[arg(short = 't', long = "type", value_parser = parse_species)]
    species: Option<usize>,

    /// Write an ASCII table next to each input as <file>.asc
    #[arg(long)]
    ascii: bool,

    /// Print the decoded header as JSON
    #[arg(long)]
    header: bool,

    /// Print the center of mass over all species
    #[arg(long)]
    com: bool,

    /// Byte order of the input files
    #[arg(long, default_value = "little", value_parser = parse_endian)]
    endian: Endian,

    /// Real-valued block elements are 8 bytes wide instead of 4
    #[arg(long)]
    double: bool,

    /// Particle ids are 8 bytes wide instead of 4
    #[arg(long)]
    long_ids: bool,

    /// Reserved header padding in bytes
    #[arg(long, default_value_t = gsr::config::CLASSIC_HEADER_PAD)]
    header_pad: usize,

    /// Enable decode tracing on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_species(s: &str) -> Result<usize, String> {
    let i: usize = s.parse().map_err(|_| format!("invalid species '{s}'"))?;
    if i >= NUM_SPECIES {
        return Err(format!("species must be 0-{}", NUM_SPECIES - 1));
    }
    Ok(i)
}

fn parse_endian(s: &str) -> Result<Endian, String> {
    match s {
        "little" => Ok(Endian::Little),
        "big" => Ok(Endian::Big),
        other => Err(format!("unknown byte order '{other}', expected little or big")),
    }
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("gsr=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cfg = FormatConfig {
        endian: args.endian,
        real_width: if args.double {
            RealWidth::F64
        } else {
            RealWidth::F32
        },
        id_width: if args.long_ids {
            IdWidth::I64
        } else {
            IdWidth::I32
        },
        header_pad: args.header_pad,
    };

    let mut failed = false;
    for path in &args.files {
        if let Err(e) = process(path, &args, &cfg) {
            eprintln!("{}: {e}", path.display());
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn process(path: &Path, args: &Args, cfg: &FormatConfig) -> Result<(), GsrError> {
    let snap = Snapshot::open(path, cfg)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.header {
        let h = snap.header();
        let summary = serde_json::json!({
            "file": path.display().to_string(),
            "total": h.total(),
            "species_names": SPECIES_NAMES,
            "header": h,
        });
        let text = serde_json::to_string_pretty(&summary).map_err(io::Error::other)?;
        writeln!(out, "{text}")?;
    }

    if let Some(species) = args.species {
        export::print_species(&snap, species, &mut out)?;
    }

    if args.ascii {
        let mut asc = path.as_os_str().to_owned();
        asc.push(".asc");
        let file = std::fs::File::create(&asc)?;
        let mut writer = BufWriter::new(file);
        export::write_ascii(&snap, &mut writer)?;
        writer.flush()?;
    }

    if args.com {
        let com = center_of_mass_all(&snap)?;
        writeln!(out, "{:.6e} {:.6e} {:.6e}", com[0], com[1], com[2])?;
    }

    Ok(())
}
