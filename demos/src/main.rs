// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the Kickstarter funding treemap as a standalone SVG document.
//!
//! One shot: write the host-shell selector flag, fetch (or read) the
//! funding document, run the Canopy pipeline, and write the SVG. Everything
//! after the fetch resolves is a single synchronous pass.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use canopy_hierarchy::Hierarchy;
use canopy_scene::{Scene, SceneParams};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kickstarter_treemap")]
#[command(about = "Render the Kickstarter funding treemap to SVG")]
struct Cli {
    /// URL of the funding document.
    #[arg(long, default_value = canopy_data::DEFAULT_DATA_URL)]
    url: String,

    /// Render a local JSON document instead of fetching.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long, default_value = "kickstarter-funding.svg")]
    out: PathBuf,

    /// Where to write the host-shell selector flag.
    #[arg(long, default_value = "project_selector.json")]
    state_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    // The selector flag goes out before anything else; it is fire-and-forget
    // and must not depend on the render succeeding.
    canopy_data::write_selector_flag(&cli.state_file)
        .with_context(|| format!("writing selector flag to {}", cli.state_file.display()))?;

    let document = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "reading local document");
            let file = fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            canopy_data::parse_reader(file)?
        }
        None => {
            info!(url = %cli.url, "fetching document");
            canopy_data::fetch(&cli.url)?
        }
    };

    let tree = Hierarchy::from_root(&document)?;
    let params = SceneParams {
        title: "Kickstarter Funding".into(),
        subtitle: "The most funded kickstarter projects".into(),
        ..SceneParams::default()
    };
    let scene = Scene::build(&tree, params);

    let categories: Vec<&str> = scene
        .legend
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    debug!(?categories, "legend categories");
    info!(tiles = scene.tiles.len(), "scene built");

    let svg = canopy_svg::render(&scene);
    fs::write(&cli.out, svg).with_context(|| format!("writing {}", cli.out.display()))?;
    info!(out = %cli.out.display(), "render complete");
    Ok(())
}
