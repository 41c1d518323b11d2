//! コマンドライン引数と出力処理

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueHint};
use tracing::{debug, info, instrument};

use crate::error::{TreeError, TreeResult};
use crate::generate;

/// `--depth` の既定値
pub const DEFAULT_DEPTH: i64 = 10;

/// `--output` の既定値
pub const DEFAULT_OUTPUT: &str = "collatz_tree.dot";

/// `--output` にこれを渡すと標準出力へ書く
pub const STDOUT_MARKER: &str = "-";

/// Generate a Collatz tree DOT file
#[derive(Parser, Debug)]
#[command(name = "collatz-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maximum exponent for trunk nodes
    #[arg(long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    pub depth: i64,

    /// Output DOT filename ("-" for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// 実行結果の出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Cli {
    pub fn destination(&self) -> Destination {
        if self.output.as_os_str() == STDOUT_MARKER {
            Destination::Stdout
        } else {
            Destination::File(self.output.clone())
        }
    }
}

/// 生成して書き出す。テキストを全て作ってから出力先を開く。
#[instrument(level = "debug", skip(cli), fields(depth = cli.depth))]
pub fn run(cli: &Cli) -> TreeResult<Destination> {
    let dot_text = generate(cli.depth)?;
    debug!(bytes = dot_text.len(), "generated dot text");

    let dest = cli.destination();
    match &dest {
        Destination::Stdout => {
            let stdout = io::stdout();
            write_text(&mut stdout.lock(), &dot_text).map_err(|source| TreeError::Io {
                path: PathBuf::from(STDOUT_MARKER),
                source,
            })?;
        }
        Destination::File(path) => write_file(path, &dot_text)?,
    }
    info!(?dest, "dot written");
    Ok(dest)
}

/// ファイルを作成（既存なら上書き）して書き込む
pub fn write_file(path: &Path, text: &str) -> TreeResult<()> {
    let io_err = |source: io::Error| TreeError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    write_text(&mut w, text).map_err(io_err)
}

fn write_text<W: Write>(w: &mut W, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["collatz-tree"]).unwrap();
        assert_eq!(cli.depth, 10);
        assert_eq!(cli.output, PathBuf::from("collatz_tree.dot"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_negative_depth_parses() {
        let cli = Cli::try_parse_from(["collatz-tree", "--depth", "-3"]).unwrap();
        assert_eq!(cli.depth, -3);
    }

    #[test]
    fn test_non_integer_depth_rejected() {
        assert!(Cli::try_parse_from(["collatz-tree", "--depth", "ten"]).is_err());
        assert!(Cli::try_parse_from(["collatz-tree", "--depth", "1.5"]).is_err());
    }

    #[test]
    fn test_stdout_destination() {
        let cli = Cli::try_parse_from(["collatz-tree", "-o", "-", "-vv"]).unwrap();
        assert_eq!(cli.destination(), Destination::Stdout);
        assert_eq!(cli.verbose, 2);
    }
}
