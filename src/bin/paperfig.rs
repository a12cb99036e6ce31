use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use paperfig::journal::{JournalLayout, LayoutWidth};
use paperfig::palette::{self, PaletteEntry};
use paperfig::{get_fig_size, set_fontscale};

#[derive(Parser, Debug)]
#[command(
    name = "paperfig",
    version,
    about = "Figure sizes, styles & palettes for academic papers"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print figure dimensions in inches.
    Size(SizeArgs),
    /// Print the paper style as rc options.
    Style(StyleArgs),
    /// List palette colors, or sample one colormap.
    Palette(PaletteArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Layout {
    Column,
    Text,
}

impl From<Layout> for LayoutWidth {
    fn from(l: Layout) -> Self {
        match l {
            Layout::Column => LayoutWidth::Column,
            Layout::Text => LayoutWidth::Text,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StyleFormat {
    Rc,
    Json,
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Target width in points (e.g., from \showthe\columnwidth).
    #[arg(long, conflicts_with = "layout")]
    width: Option<f64>,
    /// Use an MNRAS page width instead of --width (default: column).
    #[arg(long, value_enum)]
    layout: Option<Layout>,
    /// Height as a fraction of width (default: golden ratio).
    #[arg(long)]
    ratio: Option<f64>,
    /// Fraction of the width the figure occupies.
    #[arg(long, default_value_t = 1.0)]
    fraction: f64,
    /// Also print pixel dimensions at this resolution.
    #[arg(long)]
    dpi: Option<f64>,
    /// Print JSON instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Multiplier applied to every font size and line width.
    #[arg(long, default_value_t = 1.0)]
    font_scale: f64,
    /// Output format.
    #[arg(long, value_enum, default_value_t = StyleFormat::Rc)]
    format: StyleFormat,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Palette entry to show (e.g., cb_red or msh_cmap). Lists all if omitted.
    name: Option<String>,
    /// Number of evenly spaced samples printed for a colormap.
    #[arg(long, default_value_t = 11)]
    samples: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Size(args) => cmd_size(args),
        Command::Style(args) => cmd_style(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn cmd_size(args: SizeArgs) -> Result<()> {
    let width = match (args.width, args.layout) {
        (Some(w), _) => w,
        (None, layout) => JournalLayout::MNRAS.width_pt(layout.unwrap_or(Layout::Column).into()),
    };
    let size = get_fig_size(width, args.ratio, args.fraction);

    if args.json {
        let mut value = serde_json::to_value(size)?;
        if let Some(dpi) = args.dpi {
            let (w, h) = size.to_pixels(dpi);
            value["width_px"] = w.into();
            value["height_px"] = h.into();
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{:.4} {:.4}", size.width_in, size.height_in);
        if let Some(dpi) = args.dpi {
            let (w, h) = size.to_pixels(dpi);
            println!("{} {}", w, h);
        }
    }
    Ok(())
}

fn cmd_style(args: StyleArgs) -> Result<()> {
    let style = set_fontscale(args.font_scale);
    match args.format {
        StyleFormat::Rc => print!("{}", style.to_rc_string()),
        StyleFormat::Json => println!("{}", serde_json::to_string_pretty(&style.to_rc())?),
    }
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> Result<()> {
    let Some(name) = args.name else {
        for (name, entry) in palette::entries() {
            match entry {
                PaletteEntry::Discrete(hex) => println!("{name}  {hex}"),
                PaletteEntry::Continuous(cmap) => {
                    println!("{name}  colormap ({} entries)", cmap.len())
                }
            }
        }
        return Ok(());
    };

    match palette::get(&name).ok_or_else(|| anyhow!("unknown palette entry: {}", name))? {
        PaletteEntry::Discrete(hex) => println!("{hex}"),
        PaletteEntry::Continuous(cmap) => {
            for c in cmap.samples(args.samples) {
                println!("{c}");
            }
        }
    }
    Ok(())
}
