//! Check card templates and weibo post data files against the shared card
//! data model.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use weibo_card::{CardTemplate, WeiboData};

#[derive(Debug, Parser)]
/// Validate weibo card templates and post data. Every command accepts `-` as
/// a path to read from standard input. Set `RUST_LOG=debug` for details.
#[command(name = "cardcheck", version)]
enum Args {
    /// Validate a card template and print it in normalized form.
    #[command(name = "template")]
    Template {
        /// Path to the template JSON file.
        path: PathBuf,
    },

    /// Validate a JSON array of card templates and list them.
    #[command(name = "templates")]
    Templates {
        /// Path to the JSON file containing the array.
        path: PathBuf,
    },

    /// Validate weibo post data and print it in normalized form.
    #[command(name = "post")]
    Post {
        /// Path to the post JSON file.
        path: PathBuf,
    },

    /// Print the CSS for both layers of a card template, with defaults
    /// filled in for any styles the template leaves out.
    #[command(name = "css")]
    Css {
        /// Path to the template JSON file.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Args = Args::parse();
    match args {
        Args::Template { path } => cmd_template(&path),
        Args::Templates { path } => cmd_templates(&path),
        Args::Post { path } => cmd_post(&path),
        Args::Css { path } => cmd_css(&path),
    }
}

/// Read our input, either from a file or from standard input.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        debug!("reading from standard input");
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Could not read standard input")?;
        Ok(data)
    } else {
        debug!("reading {}", path.display());
        fs::read_to_string(path)
            .with_context(|| format!("Could not read file: {}", path.display()))
    }
}

fn load_template(path: &Path) -> Result<CardTemplate> {
    let data = read_input(path)?;
    CardTemplate::from_str(&data)
        .with_context(|| format!("Invalid card template: {}", path.display()))
}

fn cmd_template(path: &Path) -> Result<()> {
    let template = load_template(path)?;
    println!("{}", template.to_string()?);
    Ok(())
}

fn cmd_templates(path: &Path) -> Result<()> {
    let data = read_input(path)?;
    let templates = CardTemplate::list_from_str(&data)
        .with_context(|| format!("Invalid card template list: {}", path.display()))?;
    for template in &templates {
        println!("{}\t{}", template.id, template.name);
    }
    Ok(())
}

fn cmd_post(path: &Path) -> Result<()> {
    let data = read_input(path)?;
    let post = WeiboData::from_str(&data)
        .with_context(|| format!("Invalid weibo post: {}", path.display()))?;
    println!("{}", post.to_string()?);
    Ok(())
}

fn cmd_css(path: &Path) -> Result<()> {
    let css = load_template(path)?.css();
    println!("container: {}", css.container);
    println!("card: {}", css.card);
    Ok(())
}
