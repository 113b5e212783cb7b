mod logger;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use photopage_pdf::{AdaptiveLayout, ImageInfo, Photo, PhotoId, PhotoLibrary, PhotoPageOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photopage", about = "Lay photos out onto printable PDF pages", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a photo PDF
    Generate {
        /// Input image file(s)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the page layout without writing a PDF
    Plan {
        /// Input image file(s)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Where to write the options
        path: PathBuf,
    },
}

/// Page options shared by `generate` and `plan`; flags override the config file
#[derive(Args)]
struct LayoutArgs {
    /// Options file written by `init-config`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Photos per page
    #[arg(long)]
    per_page: Option<usize>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page margin in mm (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for photopage_pdf::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for photopage_pdf::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl LayoutArgs {
    async fn options(&self) -> Result<PhotoPageOptions> {
        let mut options = match &self.config {
            Some(path) => PhotoPageOptions::load(path).await?,
            None => PhotoPageOptions::default(),
        };

        if let Some(per_page) = self.per_page {
            options.photos_per_page = per_page;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            options.margin_mm = margin;
        }

        options.validate()?;
        Ok(options)
    }
}

async fn load_library(input: &[PathBuf]) -> Result<PhotoLibrary> {
    // Skipped files are already logged by the loader
    let outcome = photopage_pdf::load_photos(input).await;

    let mut library = PhotoLibrary::new();
    library.extend(outcome.images);
    if library.is_empty() {
        bail!("None of the {} input file(s) could be loaded", input.len());
    }
    Ok(library)
}

fn photo_name(photos: &[Photo], id: PhotoId) -> &str {
    photos
        .iter()
        .find(|photo| photo.id == id)
        .map(Photo::name)
        .unwrap_or("?")
}

async fn init_config(path: &Path) -> Result<()> {
    PhotoPageOptions::default().save(path).await?;
    println!("Wrote default options → {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            layout,
            title,
            stats_only,
        } => {
            let mut options = layout.options().await?;
            if let Some(title) = title {
                options.title = title;
            }

            let library = load_library(&input).await?;

            let stats = photopage_pdf::calculate_statistics(library.len(), &options)?;
            println!("Photo Statistics:");
            println!("  Photos: {}", stats.photos);
            println!("  Pages: {}", stats.pages);
            println!("  Photos on last page: {}", stats.photos_on_last_page);
            if stats.fallback_may_drop {
                println!(
                    "  Note: grid fallback holds {} photos per page, extra photos on a fallback page are dropped",
                    stats.fallback_capacity
                );
            }

            if stats_only {
                return Ok(());
            }

            let generated = photopage_pdf::generate(&library.snapshot(), &options).await?;
            let summary = photopage_pdf::summarize(&generated.plan);
            if generated.used_document_fallback {
                println!("  Layout: grid (adaptive document failed)");
            } else if summary.fallback_pages > 0 {
                println!("  Pages using grid fallback: {}", summary.fallback_pages);
            }
            if summary.dropped > 0 {
                println!("  Photos dropped: {}", summary.dropped);
            }
            if generated.report.skipped_images > 0 {
                println!(
                    "  Photos that failed to embed: {}",
                    generated.report.skipped_images
                );
            }

            photopage_pdf::save_pdf(generated.document, &output).await?;
            println!(
                "Generated {} page(s) with {} photo(s) → {}",
                generated.report.pages,
                generated.report.placed_images,
                output.display()
            );
        }

        Commands::Plan { input, layout } => {
            let options = layout.options().await?;
            let library = load_library(&input).await?;
            let photos = library.snapshot();
            let infos: Vec<ImageInfo> = photos.iter().map(Photo::info).collect();

            let plan = photopage_pdf::plan_document(&infos, &options, &AdaptiveLayout)?;

            println!(
                "Page {:.1} x {:.1} mm, content area {:.1} x {:.1} mm at ({:.1}, {:.1})",
                plan.page_width_mm,
                plan.page_height_mm,
                plan.content_area.width,
                plan.content_area.height,
                plan.content_area.x,
                plan.content_area.y
            );
            for page in &plan.pages {
                println!("Page {} ({:?}):", page.index + 1, page.method);
                for placement in &page.placements {
                    let rect = placement.rect;
                    println!(
                        "  {} {}: {:.1} x {:.1} mm at ({:.1}, {:.1})",
                        placement.photo,
                        photo_name(&photos, placement.photo),
                        rect.width,
                        rect.height,
                        rect.x,
                        rect.y
                    );
                }
                if page.dropped > 0 {
                    println!("  ({} photo(s) did not fit)", page.dropped);
                }
            }
        }

        Commands::InitConfig { path } => init_config(&path).await?,
    }

    Ok(())
}
