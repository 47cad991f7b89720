use photowall::config;
use photowall::manifest::Manifest;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
photowall-gen - scan asset directories and write the photo/music manifest

USAGE:
  photowall-gen [OPTIONS]

OPTIONS:
  --photos <DIR>   Photo directory to scan (default: public/photo)
  --musics <DIR>   Music directory to scan (default: public/music)
  --output <FILE>  Manifest destination (default: public/assets.json)
  --config <FILE>  Config file (default: $PHOTOWALL_CONFIG, then ./photowall.toml)
  -h, --help       Print this help
";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path = opt_path(&mut args, "--config")?;
    let photo_dir = opt_path(&mut args, "--photos")?;
    let music_dir = opt_path(&mut args, "--musics")?;
    let output = opt_path(&mut args, "--output")?;

    let rest = args.finish();
    if let Some(unexpected) = rest.first() {
        return Err(format!("unexpected argument {unexpected:?} (try --help)"));
    }

    let (mut config, warning) = config::load_or_default(config_path);
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }
    if let Some(dir) = photo_dir {
        config.assets.photo_dir = dir;
    }
    if let Some(dir) = music_dir {
        config.assets.music_dir = dir;
    }
    if let Some(path) = output {
        config.assets.manifest_path = path;
    }

    // Missing asset directories are fine (empty lists); a manifest that
    // cannot be written is not.
    let manifest = Manifest::generate(&config.assets);
    let destination = config.assets.manifest_path;
    manifest
        .write_to_path(&destination)
        .map_err(|err| format!("could not write {}: {}", destination.display(), err))?;

    println!(
        "Asset manifest written to {} ({} photos, {} tracks)",
        destination.display(),
        manifest.photo_count(),
        manifest.music_count()
    );
    Ok(())
}

fn opt_path(args: &mut pico_args::Arguments, key: &'static str) -> Result<Option<PathBuf>, String> {
    args.opt_value_from_str(key)
        .map_err(|err| format!("{key}: {err}"))
}
