use anyhow::Result;
use clap::{CommandFactory, Parser};
use diffee::areas::comparison::Comparison;
use diffee::areas::workspace::WalkOptions;
use diffee::artifacts::core::{PagerWriter, should_color, should_page};
use diffee::artifacts::filter::FilterOptions;
use diffee::commands::DiffOptions;
use diffee::logging::init_logging;
use diffee::{CompareMode, ContentFilter, KindFilter, OrphanFilter, RenderStyle};
use minus::Pager;
use regex::Regex;

#[derive(Parser)]
#[command(
    name = "diffee",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two directory trees side by side",
    long_about = "Walks two directories, merges their relative paths and prints both trees \
    next to each other, aligned line by line. Paths present on one side only are shown as \
    orphans, their missing counterpart as a placeholder of the same width.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Left directory, or the right one when given alone")]
    first: Option<String>,
    #[arg(index = 2, help = "Right directory")]
    second: Option<String>,

    #[arg(long, conflicts_with_all = ["time", "checksum"], help = "Compare file sizes")]
    size: bool,
    #[arg(long, conflicts_with_all = ["size", "checksum"], help = "Compare modification times")]
    time: bool,
    #[arg(long, conflicts_with_all = ["size", "time"], help = "Compare SHA-1 checksums")]
    checksum: bool,
    #[arg(long, help = "Append size, time or checksum to differing files")]
    info: bool,

    #[arg(short, long, help = "Do not ignore dotfiles")]
    all: bool,
    #[arg(long, default_value_t = 0, help = "Limit depth, 0 is no limit")]
    depth: usize,
    #[arg(long, value_parser = parse_regex, help = "Keep only matching paths (repeatable)")]
    include: Vec<Regex>,
    #[arg(long, value_parser = parse_regex, help = "Drop matching paths (repeatable)")]
    exclude: Vec<Regex>,

    #[arg(long, conflicts_with_all = ["no_orphans", "left_orphans", "right_orphans"], help = "Show only orphans")]
    orphans: bool,
    #[arg(long, conflicts_with_all = ["orphans", "left_orphans", "right_orphans"], help = "Do not show orphans")]
    no_orphans: bool,
    #[arg(long, conflicts_with_all = ["orphans", "no_orphans", "right_orphans"], help = "Show only left orphans")]
    left_orphans: bool,
    #[arg(long, conflicts_with_all = ["orphans", "no_orphans", "left_orphans"], help = "Show only right orphans")]
    right_orphans: bool,
    #[arg(long, conflicts_with = "folders", help = "Show only files")]
    files: bool,
    #[arg(long, conflicts_with = "files", help = "Show only folders")]
    folders: bool,
    #[arg(long, conflicts_with = "same", help = "Show only files that differ")]
    diff: bool,
    #[arg(long, conflicts_with = "diff", help = "Show only files that are the same")]
    same: bool,
    #[arg(long, help = "Hide directories that are empty on both sides")]
    no_empty: bool,

    #[arg(long, value_enum, default_value_t = RenderStyle::Tree, help = "Tree layout")]
    style: RenderStyle,
    #[arg(long, help = "Swap sides")]
    swap: bool,
    #[arg(long, help = "Label shown instead of the left root")]
    left_alias: Option<String>,
    #[arg(long, help = "Label shown instead of the right root")]
    right_alias: Option<String>,
    #[arg(long, default_value_t = 0, help = "Collapse directories at this depth, 0 expands all")]
    collapse_depth: usize,
    #[arg(long, conflicts_with = "plain", help = "Print relative paths instead of trees")]
    flat: bool,
    #[arg(long, conflicts_with = "flat", help = "Print undecorated path pairs")]
    plain: bool,
    #[arg(long, default_value = "", help = "Quote wrapped around paths in plain output")]
    quote: String,
    #[arg(long, help = "Turn colored output off")]
    no_color: bool,
    #[arg(long, help = "Log filter (trace, debug, info, warn, error, off)")]
    log_level: Option<String>,
}

fn parse_regex(value: &str) -> Result<Regex, regex::Error> {
    Regex::new(value)
}

impl Cli {
    fn options(&self) -> DiffOptions {
        let compare = if self.size {
            CompareMode::Size
        } else if self.time {
            CompareMode::Time
        } else if self.checksum {
            CompareMode::Checksum
        } else {
            CompareMode::None
        };

        let orphans = if self.orphans {
            OrphanFilter::Only
        } else if self.no_orphans {
            OrphanFilter::Hide
        } else if self.left_orphans {
            OrphanFilter::OnlyLeft
        } else if self.right_orphans {
            OrphanFilter::OnlyRight
        } else {
            OrphanFilter::All
        };

        let kind = if self.files {
            KindFilter::FilesOnly
        } else if self.folders {
            KindFilter::FoldersOnly
        } else {
            KindFilter::All
        };

        let content = if self.diff {
            ContentFilter::Diff
        } else if self.same {
            ContentFilter::Same
        } else {
            ContentFilter::All
        };

        DiffOptions {
            walk: WalkOptions::new(
                self.all,
                self.depth,
                self.include.clone(),
                self.exclude.clone(),
                self.files,
                self.folders,
            ),
            filter: FilterOptions::new(orphans, kind, content, self.no_empty, compare),
            info: self.info,
            color: should_color(!self.no_color),
            style: self.style,
            swap: self.swap,
            left_alias: self.left_alias.clone(),
            right_alias: self.right_alias.clone(),
            collapse_depth: self.collapse_depth,
            quote: self.quote.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let (left, right) = match (&cli.first, &cli.second) {
        (Some(left), Some(right)) => (left.clone(), right.clone()),
        (Some(right), None) => ("./".to_string(), right.clone()),
        _ => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };
    let options = cli.options();

    let pager = should_page().then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let comparison = Comparison::new(&left, &right, writer)?;
    if cli.plain {
        comparison.plain(&options)?;
    } else if cli.flat {
        comparison.flat(&options)?;
    } else {
        comparison.side_by_side(&options)?;
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
