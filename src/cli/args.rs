//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{ChildOrder, ForestOptions, MenuKind, MenuQuery, OrphanPolicy};

/// Menu hierarchy builder: forests, leaf ids and ancestor ids from flat parent-linked records
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the menu forest
    Tree {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        forest: ForestArgs,
        /// Print the forest as JSON
        #[arg(long)]
        json: bool,
    },

    /// List leaf ids in pre-order
    Leaves {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        forest: ForestArgs,
    },

    /// List own and ancestor ids
    Ancestors {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Record file plus selection filters.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Record file (.json or .toml)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Keep only these record ids
    #[arg(long = "id", value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Keep records whose code contains this text
    #[arg(long)]
    pub code: Option<String>,

    /// Keep records whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Keep records of these types
    #[arg(long = "kind", value_enum, value_delimiter = ',')]
    pub kinds: Vec<KindArg>,

    /// Keep records with this parent id (empty selects roots)
    #[arg(long)]
    pub parent_id: Option<String>,

    /// Keep records whose parent path starts with this prefix
    #[arg(long)]
    pub parent_path: Option<String>,
}

impl InputArgs {
    pub fn to_query(&self) -> MenuQuery {
        MenuQuery {
            record_ids: self.ids.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            kinds: self.kinds.iter().map(|&k| k.into()).collect(),
            parent_id: self.parent_id.clone(),
            parent_path: self.parent_path.clone(),
        }
    }
}

/// Overrides for configured forest options.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ForestArgs {
    /// Keep records with an unresolved parent as roots
    #[arg(long)]
    pub promote_orphans: bool,

    /// Order roots and siblings by sequence
    #[arg(long)]
    pub sort_by_sequence: bool,
}

impl ForestArgs {
    pub fn apply(&self, mut options: ForestOptions) -> ForestOptions {
        if self.promote_orphans {
            options.orphan_policy = OrphanPolicy::Promote;
        }
        if self.sort_by_sequence {
            options.child_order = ChildOrder::Sequence;
        }
        options
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Module,
    Function,
    Resource,
}

impl From<KindArg> for MenuKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Module => MenuKind::Module,
            KindArg::Function => MenuKind::Function,
            KindArg::Resource => MenuKind::Resource,
        }
    }
}
