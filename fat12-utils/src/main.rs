mod cat;
mod chain;
mod dump;
pub(crate) mod filepath;
mod info;
mod list;
mod stat;

use std::io;

use clap::Parser;
use derive_more::Display;
use fat12::FAT12;
use fat12::io::std::FileIO;
use thiserror::Error;

#[macro_use]
extern crate log;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("{_0}")]
    FAT12(#[from] fat12::error::Error<io::Error>),
    #[display("{_0}")]
    IO(#[from] io::Error),
}

impl From<fat12::error::OperationError> for Error {
    fn from(error: fat12::error::OperationError) -> Self {
        Self::FAT12(error.into())
    }
}

impl From<fat12::error::DataError> for Error {
    fn from(error: fat12::error::DataError) -> Self {
        Self::FAT12(error.into())
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Region {
    Boot,
    Fat,
    Root,
}

impl From<Region> for fat12::Region {
    fn from(region: Region) -> Self {
        match region {
            Region::Boot => Self::Boot,
            Region::Fat => Self::FAT,
            Region::Root => Self::RootDirectory,
        }
    }
}

#[derive(Debug, clap::Args)]
struct Dump {
    /// Region to dump
    #[clap(value_enum)]
    region: Region,
}

#[derive(Debug, clap::Args)]
struct List {
    /// Specify path to list, default to root directory
    #[clap(default_value = "/")]
    path: String,
    /// List subdirectories recursively
    #[clap(short, long)]
    recursive: bool,
}

#[derive(Debug, clap::Args)]
struct Cat {
    /// Specify path to concatenate
    path: String,
}

#[derive(Debug, clap::Args)]
struct Stat {
    /// Specify path to show
    path: String,
}

#[derive(Debug, clap::Args)]
struct Chain {
    /// Specify path to trace
    path: String,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Show boot sector fields and derived geometry
    Info,
    /// Hex dump of boot sector, first FAT or root directory region
    Dump(Dump),
    /// List file and directory in specified path
    #[clap(name = "ls")]
    List(List),
    /// Concatenate file and print on the standard output
    Cat(Cat),
    /// Show directory entry details
    Stat(Stat),
    /// Trace cluster chain step by step
    Chain(Chain),
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Floppy image or block device formatted with FAT12
    #[clap(short, long)]
    device: String,
    /// Refuse volumes failing geometry validation
    #[clap(long)]
    strict: bool,
    #[clap(subcommand)]
    action: Action,
}

fn run(args: Args) -> Result<(), Error> {
    let io = FileIO::open(&args.device)?;
    let mut fat12 = FAT12::new(io)?;
    if let Err(error) = fat12.validate() {
        if args.strict {
            return Err(error.into());
        }
        warn!("{}", error);
    }
    let mut stdout = io::stdout().lock();
    match args.action {
        Action::Info => info::info(&mut stdout, &mut fat12),
        Action::Dump(args) => dump::dump(&mut stdout, &fat12, args.region.into()),
        Action::List(args) => list::list(&mut stdout, &mut fat12, &args.path, args.recursive),
        Action::Cat(args) => cat::cat(&mut stdout, &mut fat12, &args.path),
        Action::Stat(args) => stat::stat(&mut stdout, &mut fat12, &args.path),
        Action::Chain(args) => chain::chain(&mut stdout, &mut fat12, &args.path),
    }
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Some(error) = run(args).err() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
