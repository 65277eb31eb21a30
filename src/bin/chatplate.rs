use chatplate::config::{self, EditorConfig};
use chatplate::document::Document;
use chatplate::geometry::{Rect, Viewport};
use chatplate::markers::{IndentMarkers, MarkerConfig, visible_lines};
use chatplate::state::{EditorState, EditorView};
use chatplate::tooltip::{Alignment, Placement, compute_position};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chatplate")]
#[command(about = "Indentation markers and tooltip layout for chat templates", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to the per-user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the indentation markers of a template file
    Markers {
        /// Template file to read
        file: PathBuf,

        /// First visible line (1-based)
        #[arg(long)]
        from: Option<usize>,

        /// Last visible line (inclusive)
        #[arg(long)]
        to: Option<usize>,

        /// Line holding the cursor
        #[arg(long, default_value = "1")]
        cursor_line: usize,

        #[arg(long)]
        tab_size: Option<usize>,

        #[arg(long)]
        indent_unit: Option<usize>,

        /// Highlight the block around the cursor (overrides the config file)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        highlight_active: Option<bool>,

        /// Omit guides in the first column (overrides the config file)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        hide_first_indent: Option<bool>,
    },
    /// Compute the position of a tooltip around an anchor
    Position {
        /// Anchor rectangle as left,top,width,height
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        anchor: Vec<f64>,

        /// Tooltip size as width,height
        #[arg(long = "float", value_delimiter = ',')]
        float_size: Vec<f64>,

        /// Viewport size as width,height
        #[arg(long, value_delimiter = ',')]
        viewport: Vec<f64>,

        /// Page scroll offset as x,y
        #[arg(long, value_delimiter = ',', default_value = "0,0")]
        scroll: Vec<f64>,

        #[arg(long)]
        placement: Option<Placement>,

        #[arg(long)]
        alignment: Option<Alignment>,
    },
    /// Print the base stylesheet for the markers
    Stylesheet,
}

fn load_config(path: Option<PathBuf>) -> Result<EditorConfig, String> {
    match path {
        // an explicitly named file has to load
        Some(path) => config::load_config(&path).map_err(|e| e.to_string()),
        None => Ok(config::config_file_path()
            .map(|path| config::load_or_default(&path))
            .unwrap_or_default()),
    }
}

fn expect_values(name: &str, values: &[f64], count: usize) -> Result<(), String> {
    if values.len() != count {
        return Err(format!(
            "--{} expects {} comma-separated numbers, got {}",
            name,
            count,
            values.len()
        ));
    }
    Ok(())
}

/// Marker settings from the config file with command line overrides applied
fn marker_config(
    config: &EditorConfig,
    highlight_active: Option<bool>,
    hide_first_indent: Option<bool>,
) -> MarkerConfig {
    MarkerConfig {
        highlight_active_block: highlight_active.unwrap_or(config.markers.highlight_active_block),
        hide_first_indent: hide_first_indent.unwrap_or(config.markers.hide_first_indent),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_markers(
    config: &EditorConfig,
    file: PathBuf,
    from: Option<usize>,
    to: Option<usize>,
    cursor_line: usize,
    tab_size: Option<usize>,
    indent_unit: Option<usize>,
    highlight_active: Option<bool>,
    hide_first_indent: Option<bool>,
) -> Result<(), String> {
    let text = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;
    let doc = Document::new(text);

    let first = from.unwrap_or(1).max(1);
    let last = to.unwrap_or(doc.lines()).min(doc.lines());
    if first > last {
        return Err(format!("Empty line range {}..={}", first, last));
    }

    let range_start = doc.line(first).map(|l| l.from).unwrap_or(0);
    let range_end = doc.line(last).map(|l| l.to).unwrap_or(0);

    let state = EditorState::new(doc)
        .with_tab_size(tab_size.unwrap_or(config.tab_size))
        .with_indent_unit(indent_unit.unwrap_or(config.indent_unit))
        .with_cursor_on_line(cursor_line);
    let view = EditorView::new(state, vec![range_start..range_end]);

    let markers = IndentMarkers::new(
        &view,
        marker_config(config, highlight_active, hide_first_indent),
        config.theme.clone(),
    );
    let map = markers.map();
    let decorations = markers.decorations();
    let lines = visible_lines(&view);

    for line in &lines {
        let entry = &map[line.number];
        let active = entry
            .active
            .map(|level| level.to_string())
            .unwrap_or_else(|| "-".to_string());
        let style = decorations
            .iter()
            .find(|d| d.line == line.number)
            .map(|d| d.style())
            .unwrap_or_default();
        println!(
            "{:>4} level={} active={} {}",
            line.number, entry.level, active, style
        );
    }

    Ok(())
}

fn cmd_position(
    config: &EditorConfig,
    anchor: Vec<f64>,
    float_size: Vec<f64>,
    viewport: Vec<f64>,
    scroll: Vec<f64>,
    placement: Option<Placement>,
    alignment: Option<Alignment>,
) -> Result<(), String> {
    expect_values("anchor", &anchor, 4)?;
    expect_values("float", &float_size, 2)?;
    expect_values("viewport", &viewport, 2)?;
    expect_values("scroll", &scroll, 2)?;

    let anchor = Rect::new(anchor[0], anchor[1], anchor[2], anchor[3]);
    let float = Rect::sized(float_size[0], float_size[1]);
    let viewport = Viewport::new(viewport[0], viewport[1]).with_scroll(scroll[0], scroll[1]);

    let mut options = config.tooltip.clone();
    if let Some(placement) = placement {
        options.placement = placement;
    }
    if let Some(alignment) = alignment {
        options.alignment = alignment;
    }

    let position = compute_position(&anchor, &float, &viewport, &options);
    let json = serde_json::to_string_pretty(&position)
        .map_err(|e| format!("Failed to serialize position: {}", e))?;
    println!("{}", json);

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = load_config(args.config).and_then(|config| match args.command {
        Commands::Markers {
            file,
            from,
            to,
            cursor_line,
            tab_size,
            indent_unit,
            highlight_active,
            hide_first_indent,
        } => cmd_markers(
            &config,
            file,
            from,
            to,
            cursor_line,
            tab_size,
            indent_unit,
            highlight_active,
            hide_first_indent,
        ),
        Commands::Position {
            anchor,
            float_size,
            viewport,
            scroll,
            placement,
            alignment,
        } => cmd_position(
            &config,
            anchor,
            float_size,
            viewport,
            scroll,
            placement,
            alignment,
        ),
        Commands::Stylesheet => {
            print!("{}", config.theme.stylesheet());
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
