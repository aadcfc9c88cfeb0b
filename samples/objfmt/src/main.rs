use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser as _;
use objtext::{Mesh, ParseError, ParseOptions, Parser};

mod cli;
use cli::Cli;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Errors related to normalizing a single file, each naming the file involved.
#[derive(Debug, thiserror::Error)]
pub enum FmtError {
    #[error("{path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{path:?}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("{0:?} has no file name")]
    NoFileName(PathBuf),
}

fn load(parser: &Parser, path: &Path) -> Result<Mesh, FmtError> {
    let bytes = fs::read(path).map_err(|source| FmtError::Io {
        path: path.to_owned(),
        source,
    })?;
    parser.parse_slice(&bytes).map_err(|source| FmtError::Parse {
        path: path.to_owned(),
        source,
    })
}

#[tracing::instrument(skip(parser, cli))]
fn normalize(parser: &Parser, cli: &Cli, path: &Path) -> Result<(), FmtError> {
    let mesh = load(parser, path)?;
    tracing::info!(
        vertices = mesh.vertices.len(),
        texture_vertices = mesh.texture_vertices.as_ref().map_or(0, Vec::len),
        normals = mesh.normals.as_ref().map_or(0, Vec::len),
        faces = mesh.faces.len(),
        triangles = mesh.triangles().count(),
        "read mesh"
    );

    if cli.check {
        return Ok(());
    }

    let (out_path, res) = match &cli.output {
        Some(dir) => {
            let name = path
                .file_name()
                .ok_or_else(|| FmtError::NoFileName(path.to_owned()))?;
            let out_path = dir.join(name);
            tracing::debug!(?out_path, "writing normalized mesh");
            let res = fs::write(&out_path, objtext::ser::to_string(&mesh));
            (out_path, res)
        }
        None => {
            let stdout = io::stdout().lock();
            let mut stdout = io::BufWriter::new(stdout);
            let res = objtext::ser::to_writer(&mut stdout, &mesh).and_then(|()| stdout.flush());
            (PathBuf::from("-"), res)
        }
    };
    res.map_err(|source| FmtError::Io {
        path: out_path,
        source,
    })
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    let parser = Parser::new(if cli.strict {
        ParseOptions::strict()
    } else {
        ParseOptions::lenient()
    });

    let mut failed = false;
    for path in &cli.files {
        if let Err(e) = normalize(&parser, &cli, path) {
            tracing::error!("{e}");
            if let FmtError::Parse { source, .. } = &e {
                for line in source.lines() {
                    tracing::warn!(%line);
                }
            }
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
