//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, miette};
use textsplice_core::Config;
use tracing::{debug, info};

const STARTER_CONFIG: &str = r#"{
  // `[find, replace]` tuples, applied in order.
  // A find is a string or { "regex": "...", "global": true, "ignoreCase": false }.
  // A replacement is a string, null (delete), false (keep) or hast nodes.
  "rules": [],

  // Tag names whose text is left alone.
  // Without this, title, script, style, svg and math are skipped.
  // "ignore": ["pre", "code"],
  "extendDefaultIgnore": true
}
"#;

/// Writes a starter config to `config_path`, or to `.textsplice.jsonc`
/// in the working directory.
pub fn run_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(Config::CONFIG_FILES[0]));

    write_starter(&path, force)?;
    info!("Created {}", path.display());
    Ok(())
}

fn write_starter(path: &Path, force: bool) -> Result<()> {
    loop {
        match open_new(path) {
            Ok(mut file) => return file.write_all(STARTER_CONFIG.as_bytes()).into_diagnostic(),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette!(
                        "{} already exists. Use --force to overwrite.",
                        path.display()
                    ));
                }

                debug!("Replacing {}", path.display());
                match fs::remove_file(path) {
                    Ok(()) => {}
                    // Removed by someone else between the two calls.
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(miette!("Failed to create {}: {}", path.display(), e)),
        }
    }
}

/// Creates `path` exclusively, never through a symlink.
fn open_new(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}
