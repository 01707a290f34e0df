use blobpack::cli::{pack_file, unpack_bundle, unpack_file, PackOptions, UnpackOptions};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("BLOBPACK_VERSION");
const BUILD: &str = env!("BLOBPACK_BUILD");
const PROFILE: &str = env!("BLOBPACK_PROFILE");
const GIT_HASH: &str = env!("BLOBPACK_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "blobpack")]
#[command(author, about = "GZip -> AES-256-CBC -> Base64 payload packer", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file into a printable blob
    #[command(alias = "p")]
    Pack {
        /// Input file to pack
        input: PathBuf,

        /// Output file for the blob (defaults to stdout)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Also write blob + key + IV as a JSON bundle
        #[arg(long)]
        bundle: Option<PathBuf>,
    },

    /// Unpack a blob back to the original bytes
    #[command(alias = "x")]
    Unpack {
        /// Base64 AES key printed by pack
        #[arg(long, required_unless_present = "bundle")]
        key: Option<String>,

        /// Base64 AES IV printed by pack
        #[arg(long, required_unless_present = "bundle")]
        iv: Option<String>,

        /// JSON bundle written by pack --bundle (replaces --key, --iv, and INPUT)
        #[arg(long, conflicts_with_all = ["key", "iv"])]
        bundle: Option<PathBuf>,

        /// Input file containing the blob (the output file when --bundle is used)
        #[arg(required_unless_present = "bundle")]
        input: Option<PathBuf>,

        /// Output file for the unpacked bytes (defaults to stdout)
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("blobpack {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Pack {
            input,
            output,
            bundle,
        } => {
            let options = PackOptions { bundle };

            match pack_file(&input, output.as_deref(), &options) {
                Ok(packed) => {
                    if output.is_none() {
                        // Blob alone on stdout so it can be redirected cleanly
                        print!("{}", packed.blob);
                        let _ = std::io::stdout().flush();
                        eprintln!();
                    }
                    eprintln!("AES Key: {}", packed.key);
                    eprintln!("AES IV: {}", packed.iv);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Unpack {
            key,
            iv,
            bundle,
            input,
            output,
        } => {
            let (unpacked, destination) = match bundle {
                Some(bundle_path) => {
                    // The blob comes from the bundle, so the positionals
                    // shift: the first one (if any) is the output path
                    let destination = input.or(output);
                    (
                        unpack_bundle(&bundle_path, destination.as_deref()),
                        destination,
                    )
                }
                None => {
                    // clap guarantees key/iv/input are present without --bundle
                    let options = UnpackOptions {
                        key: key.unwrap_or_default(),
                        iv: iv.unwrap_or_default(),
                    };
                    let destination = output;
                    (
                        unpack_file(&input.unwrap(), destination.as_deref(), &options),
                        destination,
                    )
                }
            };

            match unpacked {
                Ok(data) => match &destination {
                    Some(path) => {
                        println!("Unpacked to {}", path.display());
                        Ok(())
                    }
                    None => {
                        let mut stdout = std::io::stdout();
                        match stdout.write_all(&data).and_then(|_| stdout.flush()) {
                            Ok(()) => Ok(()),
                            Err(e) => Err(e.into()),
                        }
                    }
                },
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
