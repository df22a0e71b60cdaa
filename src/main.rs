use std::fs;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use huffman_rust::codec::{compress, decompress};
use huffman_rust::error::Result;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Compress the source file into an artifact
    #[value(name = "c")]
    Compress,
    /// Decompress an artifact back into text
    #[value(name = "d")]
    Decompress,
}

#[derive(Parser, Debug)]
#[command(about = "Huffman-compress or decompress a text file")]
struct Args {
    /// 'c' to compress, 'd' to decompress
    mode: Mode,
    /// Source filename
    source_name: String,
    /// Destination filename
    dest_name: String,
}

fn run(args: &Args) -> Result<()> {
    match args.mode {
        Mode::Compress => {
            let text = fs::read_to_string(&args.source_name)?;

            let comp_time = Instant::now();
            let artifact = compress(&text)?;
            let comp_time = comp_time.elapsed().as_nanos() as f64;

            fs::write(&args.dest_name, &artifact)?;

            println!("compressed {} bytes into {} in {}ns", text.len(), artifact.len(), comp_time);
        }
        Mode::Decompress => {
            let artifact = fs::read(&args.source_name)?;

            let comp_time = Instant::now();
            let text = decompress(&artifact)?;
            let comp_time = comp_time.elapsed().as_nanos() as f64;

            fs::write(&args.dest_name, &text)?;

            println!("decompressed {} bytes into {} in {}ns", artifact.len(), text.len(), comp_time);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
