use std::path::PathBuf;

use clap::Parser;

mod concat;
mod downloader;
mod error;
mod manifest;
mod sequence;
mod utils;

use concat::FfmpegConcatenator;
use downloader::{RunOptions, run};

#[derive(Parser)]
#[command(name = "tscat")]
#[command(about = "Downloads a numbered .ts segment sequence and combines it into one video")]
#[command(version = "1.0")]
struct Cli {
    #[arg(help = "URL prefix shared by every segment, e.g. http://host/video/seg_")]
    base_url: String,
    #[arg(help = "Filename of the first segment, e.g. 0001.ts")]
    start_filename: String,
    #[arg(help = "Filename of the last segment, e.g. 0042.ts")]
    end_filename: String,
    #[arg(long, default_value = "DLVIDEO", help = "Directory for downloaded segments")]
    output_dir: PathBuf,
    #[arg(long, help = "Manifest path (default: <output-dir>/file_list.txt)")]
    manifest: Option<PathBuf>,
    #[arg(long, help = "Combined video path (default: <output-dir>/output.mp4)")]
    output: Option<PathBuf>,
    #[arg(short, long, default_value_t = 4, help = "Concurrent requests per phase")]
    concurrency: usize,
    #[arg(long, default_value = "ffmpeg", help = "Media tool binary to invoke")]
    ffmpeg: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let manifest_path = cli
        .manifest
        .unwrap_or_else(|| cli.output_dir.join("file_list.txt"));
    let output_file = cli
        .output
        .unwrap_or_else(|| cli.output_dir.join("output.mp4"));

    let opts = RunOptions {
        base_url: cli.base_url,
        start_filename: cli.start_filename,
        end_filename: cli.end_filename,
        output_dir: cli.output_dir,
        manifest_path,
        output_file,
        concurrency: cli.concurrency,
    };
    let concatenator = FfmpegConcatenator::new(cli.ffmpeg);

    if let Err(err) = run(&opts, &concatenator).await {
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
    println!("Download and video conversion completed successfully!");
}
