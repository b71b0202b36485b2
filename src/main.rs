//! qrsolid - print a QR code module matrix as an STL solid
//!
//! The matrix is read as text, one line per row, `1`/`#`/`x` for dark modules
//! and `0`/`.`/space for light ones:
//!
//! ```bash
//! # disc layout on a cylinder, the default
//! qrsolid code.txt -o code.stl
//!
//! # bare square, no base, from stdin
//! qrencode -t ASCII -m 0 "https://example.org" | sed 's/##/1/g; s/  /0/g' | qrsolid --square --no-bottom
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use qrsolid::{BitMatrix, MeshConfig, ModuleMesh, StlFormat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::PathBuf;

/// Turn a QR code module matrix into a printable STL solid
#[derive(Parser, Debug)]
#[command(name = "qrsolid")]
#[command(version)]
struct Cli {
    /// Module matrix as text; '-' or nothing reads stdin
    input: Option<PathBuf>,

    /// Where to write the STL document
    #[arg(short, long, default_value = "qrcode.stl")]
    output: PathBuf,

    /// Leave out the support base
    #[arg(long)]
    no_bottom: bool,

    /// Print the bare square instead of embedding it in a disc
    #[arg(long)]
    square: bool,

    /// Side facets of the cylindrical base
    #[arg(long, default_value_t = qrsolid::shapes::DEFAULT_SEGMENTS)]
    segments: usize,

    /// Seed for the disc filler; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write binary STL instead of ASCII
    #[arg(long)]
    binary: bool,

    /// Print the final module grid to stderr
    #[arg(long)]
    preview: bool,
}

impl Cli {
    fn config(&self) -> Result<MeshConfig> {
        let format = if self.binary {
            binary_format()?
        } else {
            StlFormat::Ascii
        };
        Ok(MeshConfig::default()
            .with_bottom(!self.no_bottom)
            .with_disc(!self.square)
            .with_cylinder_segments(self.segments)
            .with_format(format))
    }

    fn read_matrix(&self) -> Result<BitMatrix> {
        let text = match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            _ => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
                text
            }
        };
        text.parse().context("parsing module matrix")
    }
}

#[cfg(feature = "stl-io")]
fn binary_format() -> Result<StlFormat> {
    Ok(StlFormat::Binary)
}

#[cfg(not(feature = "stl-io"))]
fn binary_format() -> Result<StlFormat> {
    anyhow::bail!("binary STL needs the `stl-io` feature")
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let matrix = cli.read_matrix()?;
    tracing::info!(size = matrix.size(), "read module matrix");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mesh = ModuleMesh::new(&matrix, &config, &mut rng)?;
    if cli.preview {
        eprint!("{}", mesh.grid());
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let stats = mesh
        .write(config.format, &mut BufWriter::new(file))
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if let Some(bounds) = stats.bounds {
        let size = bounds.extents();
        tracing::info!(
            "{} triangles, {:.1} x {:.1} x {:.1} modules -> {}",
            stats.triangles,
            size.x,
            size.y,
            size.z,
            cli.output.display()
        );
    }
    Ok(())
}
