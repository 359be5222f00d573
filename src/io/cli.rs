//! Command-line interface for generating and printing world regions

use crate::algorithm::executor::World;
use crate::algorithm::selection::{BlockSelector, SelectionPolicy};
use crate::io::catalog::load_world_definition;
use crate::io::configuration::{DEFAULT_PNG_SCALE, DEFAULT_REGION, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_map_as_png;
use crate::io::table::render_table;
use crate::spatial::grid::BoundingBox;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Parse a region written as `minX,minY,maxX,maxY`
///
/// # Errors
///
/// Returns an error if the text does not hold four integers or if a minimum
/// exceeds its maximum
pub fn parse_region(text: &str) -> Result<BoundingBox> {
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid_parameter("region", &text, &e))?;

    let &[min_x, min_y, max_x, max_y] = values.as_slice() else {
        return Err(invalid_parameter(
            "region",
            &text,
            &"expected four comma-separated integers minX,minY,maxX,maxY",
        ));
    };

    BoundingBox::new(min_x, min_y, max_x, max_y)
}

fn parse_region_arg(text: &str) -> std::result::Result<BoundingBox, String> {
    parse_region(text).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "foursides")]
#[command(
    author,
    version,
    about = "Generate regions of an infinite tile world outward from the origin"
)]
/// Command-line arguments for the world generation tool
pub struct Cli {
    /// World definition JSON file (constraints and block catalog)
    #[arg(value_name = "WORLD")]
    pub world: PathBuf,

    /// Region to generate and print as minX,minY,maxX,maxY (repeatable, in order)
    #[arg(
        short,
        long = "region",
        value_name = "MINX,MINY,MAXX,MAXY",
        allow_hyphen_values = true,
        value_parser = parse_region_arg
    )]
    pub regions: Vec<BoundingBox>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Block selection policy
    #[arg(short, long, value_enum, default_value_t = SelectionPolicy::Uniform)]
    pub policy: SelectionPolicy,

    /// Also print the whole materialized map after all regions
    #[arg(short, long)]
    pub full: bool,

    /// Export the whole materialized map as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixels per cell side in the exported image
    #[arg(long, default_value_t = DEFAULT_PNG_SCALE)]
    pub scale: u32,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Requested regions, falling back to the default region
    pub fn requested_regions(&self) -> Vec<BoundingBox> {
        if self.regions.is_empty() {
            let [min_x, min_y, max_x, max_y] = DEFAULT_REGION;
            vec![BoundingBox {
                min: [min_x, min_y],
                max: [max_x, max_y],
            }]
        } else {
            self.regions.clone()
        }
    }
}

/// Builds a world from the CLI arguments and renders the requested regions
pub struct WorldRunner {
    cli: Cli,
}

impl WorldRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the definition and start the world
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The definition file cannot be read or parsed
    /// - The catalog has duplicate block ids
    /// - The initial block is not in the catalog
    pub fn build_world(&self) -> Result<World> {
        let definition = load_world_definition(&self.cli.world)?;
        let catalog = Arc::new(definition.build_catalog()?);
        info!(
            path = %self.cli.world.display(),
            blocks = catalog.len(),
            "loaded world definition"
        );

        World::init(
            definition.world_constraints,
            catalog,
            BlockSelector::new(self.cli.seed, self.cli.policy),
        )
    }

    /// Generate every requested region and render them as text
    ///
    /// Exports the materialized map as PNG when requested.
    ///
    /// # Errors
    ///
    /// Returns an error if world construction, generation or export fails
    pub fn render(&self) -> Result<String> {
        let mut world = self.build_world()?;
        let mut output = String::new();

        for region in self.cli.requested_regions() {
            let map = world.get_partial_map(&region)?;
            output.push_str(&format!("region {region}\n{}\n", render_table(&map)));
        }

        let full_map = world.get_map();
        if self.cli.full {
            output.push_str(&format!(
                "map {}\n{}\n",
                full_map.bounds(),
                render_table(&full_map)
            ));
        }

        if let Some(path) = &self.cli.png {
            export_map_as_png(&full_map, self.cli.scale, path)?;
            info!(path = %path.display(), "exported map image");
        }

        info!(
            placed = world.tracker().total_placed(),
            distinct = world.tracker().distinct_placed(),
            bounds = %world.grid().bounds(),
            "generation finished"
        );

        Ok(output)
    }

    /// Render and print to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails
    // Printing the rendered tables is the purpose of the tool
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let output = self.render()?;
        print!("{output}");
        Ok(())
    }
}
