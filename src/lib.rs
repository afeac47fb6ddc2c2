use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::mpsc,
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::Coder;
pub use report::{CompressionReport, DisplayOptions};
use threadpool::ThreadPool;

mod cli;
mod error;
pub mod huffman;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

const TEXT_ARGUMENT_SOURCE: &str = "command line text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Files(Vec<PathBuf>),
}

pub struct Arguments {
    input: InputSource,
    number_of_threads: usize,
    display_options: DisplayOptions,
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    let path = file_path.display().to_string();
    fs::read(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputFileNotFound(path),
        ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(path),
        _ => Error::UnableToReadInputFile(path, e),
    })
}

/// Build a code for `input`, encode it, decode the result again and
/// collect everything into a report.
pub fn compress_input(
    source: &str,
    input: Vec<u8>,
    display_options: DisplayOptions,
) -> Result<CompressionReport> {
    let mut coder = Coder::new();
    coder.build(&input)?;
    let encoded = coder.encode(&input)?;
    let decoded = coder.decode(&encoded)?;
    if let (Some(frequencies), Some(codes)) = (coder.frequencies(), coder.codes()) {
        logger::log_code_table(source, frequencies, codes);
    }
    log::info!(
        "{}: {} bytes encoded into {} bits",
        source,
        input.len(),
        encoded.len()
    );
    CompressionReport::new(source, &coder, input, encoded, decoded, display_options)
}

pub fn compress_file(file_path: &Path, display_options: DisplayOptions) -> Result<CompressionReport> {
    let input = read_input_file(file_path)?;
    compress_input(&file_path.display().to_string(), input, display_options)
}

/// Every file gets its own coder on a worker of the pool, reports are
/// returned in the order of `file_paths`.
fn compress_files(
    file_paths: &[PathBuf],
    number_of_threads: usize,
    display_options: DisplayOptions,
) -> Vec<Result<CompressionReport>> {
    let threadpool = ThreadPool::new(number_of_threads.clamp(1, file_paths.len().max(1)));
    let (sender, receiver) = mpsc::channel();
    for (index, file_path) in file_paths.iter().cloned().enumerate() {
        let sender = sender.clone();
        threadpool.execute(move || {
            let result = compress_file(&file_path, display_options);
            if sender.send((index, result)).is_err() {
                log::warn!("Result of {} could not be delivered", file_path.display());
            }
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<CompressionReport>>> =
        file_paths.iter().map(|_| None).collect();
    for (index, result) in receiver {
        results[index] = Some(result);
    }
    results
        .into_iter()
        .map(|result| result.unwrap_or(Err(Error::WorkerDisconnected)))
        .collect()
}

pub fn run(arguments: &Arguments) -> Vec<Result<CompressionReport>> {
    match &arguments.input {
        InputSource::Text(text) => vec![compress_input(
            TEXT_ARGUMENT_SOURCE,
            text.as_bytes().to_vec(),
            arguments.display_options,
        )],
        InputSource::Files(file_paths) => compress_files(
            file_paths,
            arguments.number_of_threads,
            arguments.display_options,
        ),
    }
}
