//! timeline CLI: render timeline documents and browse the example gallery

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use timeline_core::{
    render_timeline, to_html, ColorVariant, Document, DocumentError, MountState, RenderContext,
    Size, TimelineLayout,
};
use timeline_tui::{render_to_string, GalleryOptions, IconMode, IconSet, Theme};
use tracing::{debug, Level};

/// Render chronological timelines as HTML, text, or an interactive gallery
#[derive(Parser)]
#[command(name = "timeline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the example gallery (default when no command specified)
    Demo {
        /// Color palette
        #[arg(long, value_enum, default_value_t = ThemeArg::Mocha)]
        theme: ThemeArg,

        /// Icon glyph set
        #[arg(long, value_enum, default_value_t = IconArg::Nerd)]
        icons: IconArg,

        /// Show this document as the first example
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Render a timeline document
    Render {
        /// Document path, or "-" for stdin
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Override the size variant
        #[arg(long, value_enum)]
        size: Option<SizeArg>,

        /// Override the default icon color
        #[arg(long, value_enum)]
        icon_color: Option<ColorArg>,

        /// Override the default connector color
        #[arg(long, value_enum)]
        connector_color: Option<ColorArg>,

        /// Disable entrance animations
        #[arg(long)]
        no_animate: bool,

        /// Format dates as after first paint instead of as ISO strings
        #[arg(long)]
        mounted: bool,

        /// Columns for text output
        #[arg(long, default_value = "80")]
        width: u16,

        /// Icon glyph set for text output
        #[arg(long, value_enum, default_value_t = IconArg::Unicode)]
        icons: IconArg,
    },

    /// Validate a timeline document
    Check {
        /// Document path
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Mocha,
    Latte,
    HighContrast,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Mocha => Theme::mocha(),
            ThemeArg::Latte => Theme::latte(),
            ThemeArg::HighContrast => Theme::high_contrast(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IconArg {
    Nerd,
    Unicode,
    Ascii,
}

impl From<IconArg> for IconSet {
    fn from(arg: IconArg) -> Self {
        IconSet::new(match arg {
            IconArg::Nerd => IconMode::Nerd,
            IconArg::Unicode => IconMode::Unicode,
            IconArg::Ascii => IconMode::Ascii,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SizeArg {
    Sm,
    Md,
    Lg,
}

impl From<SizeArg> for Size {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Sm => Size::Sm,
            SizeArg::Md => Size::Md,
            SizeArg::Lg => Size::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Primary,
    Secondary,
    Muted,
    Accent,
}

impl From<ColorArg> for ColorVariant {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Primary => ColorVariant::Primary,
            ColorArg::Secondary => ColorVariant::Secondary,
            ColorArg::Muted => ColorVariant::Muted,
            ColorArg::Accent => ColorVariant::Accent,
        }
    }
}

/// Layout overrides given on the command line.
#[derive(Debug, Clone, Copy, Default)]
struct Overrides {
    size: Option<SizeArg>,
    icon_color: Option<ColorArg>,
    connector_color: Option<ColorArg>,
    no_animate: bool,
}

impl Overrides {
    fn apply(self, document: &mut Document) {
        if let Some(size) = self.size {
            document.size = size.into();
        }
        if let Some(color) = self.icon_color {
            document.icon_color = Some(color.into());
        }
        if let Some(color) = self.connector_color {
            document.connector_color = Some(color.into());
        }
        if self.no_animate {
            document.animate = false;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => cmd_demo(ThemeArg::Mocha, IconArg::Nerd, None),
        Some(Commands::Demo { theme, icons, file }) => cmd_demo(theme, icons, file.as_deref()),
        Some(Commands::Render {
            file,
            format,
            size,
            icon_color,
            connector_color,
            no_animate,
            mounted,
            width,
            icons,
        }) => {
            let overrides = Overrides {
                size,
                icon_color,
                connector_color,
                no_animate,
            };
            cmd_render(&file, format, overrides, mounted, width, icons);
        }
        Some(Commands::Check { file }) => cmd_check(&file),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a document from a path, or from stdin when the path is "-".
fn load_document(file: &str) -> Result<Document, DocumentError> {
    if file == "-" {
        let content = std::io::read_to_string(std::io::stdin())?;
        Document::parse(&content)
    } else {
        Document::load(Path::new(file))
    }
}

fn cmd_demo(theme: ThemeArg, icons: IconArg, file: Option<&Path>) {
    let document = match file.map(Document::load).transpose() {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = GalleryOptions {
        theme: theme.into(),
        icons: icons.into(),
        document,
        today: None,
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(timeline_tui::run_gallery(options)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_render(
    file: &str,
    format: Format,
    overrides: Overrides,
    mounted: bool,
    width: u16,
    icons: IconArg,
) {
    let mut document = match load_document(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    overrides.apply(&mut document);

    match render_document(&document, format, mounted, width, icons) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn render_document(
    document: &Document,
    format: Format,
    mounted: bool,
    width: u16,
    icons: IconArg,
) -> Result<String, serde_json::Error> {
    let mount = if mounted {
        MountState::Mounted
    } else {
        MountState::Pending
    };
    let ctx = RenderContext::new(document.formatter(), mount);
    let view = TimelineLayout::render(&document.layout_props(), &ctx);
    debug!(?format, items = view.items().len(), "rendering document");

    match format {
        Format::Html => Ok(to_html(&render_timeline(&view))),
        Format::Text => Ok(render_to_string(
            &view,
            &Theme::default(),
            &icons.into(),
            width,
        )),
        Format::Json => serde_json::to_string_pretty(&view),
    }
}

fn cmd_check(file: &Path) {
    let document = match Document::load(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let issues = document.issues();
    for issue in &issues {
        println!("warning: {issue}");
    }

    if issues.is_empty() {
        println!("OK: {} items", document.items.len());
    } else {
        println!(
            "{} items, {} warning(s)",
            document.items.len(),
            issues.len()
        );
    }
}
