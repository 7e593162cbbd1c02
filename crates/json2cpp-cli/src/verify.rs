//! Syntax check of generated code with the system C++ compiler

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Verify the generated implementation file (and through it the header)
/// compiles.
///
/// `cc` locates the compiler. Outside a build script it has no Cargo
/// environment, so target, host, optimisation and debug settings are passed
/// explicitly. RapidJSON must be reachable through the default include path
/// or `include_dirs`.
pub fn verify_source(source_path: &Path, header_dir: &Path, include_dirs: &[PathBuf]) -> Result<()> {
    let triple = host_triple(std::env::consts::ARCH, std::env::consts::OS);
    info!(source = %source_path.display(), target = %triple, "Checking generated code");

    let compiler = cc::Build::new()
        .cpp(true)
        .cargo_metadata(false)
        .target(&triple)
        .host(&triple)
        .opt_level(0)
        .debug(false)
        .try_get_compiler()
        .with_context(|| format!("No C++ compiler found for {triple}"))?;

    let cc_path = compiler.path();

    let mut includes = Vec::with_capacity(include_dirs.len() + 1);
    includes.push(header_dir.to_path_buf());
    includes.extend(include_dirs.iter().cloned());

    let args = syntax_check_args(compiler.is_like_msvc(), source_path, &includes);
    debug!(compiler = %cc_path.display(), ?args, "Running syntax check");

    let output = Command::new(cc_path)
        .args(&args)
        .output()
        .with_context(|| format!("Failed to execute compiler: {}", cc_path.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "{} does not compile as C++17:\n{}",
            source_path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    println!("Verified with {}", cc_path.display());
    Ok(())
}

/// Compiler arguments for a C++17 syntax-only pass over `source`.
fn syntax_check_args(msvc: bool, source: &Path, includes: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    if msvc {
        args.extend(["/nologo", "/Zs", "/EHsc", "/std:c++17"].map(OsString::from));
        for dir in includes {
            let mut flag = OsString::from("/I");
            flag.push(dir);
            args.push(flag);
        }
    } else {
        args.extend(["-fsyntax-only", "-std=c++17"].map(OsString::from));
        for dir in includes {
            args.push(OsString::from("-I"));
            args.push(dir.clone().into_os_string());
        }
    }

    args.push(source.as_os_str().to_os_string());
    args
}

/// Target triple `cc` should probe for, built from the running binary's
/// architecture and OS.
fn host_triple(arch: &str, os: &str) -> String {
    match os {
        "linux" => format!("{arch}-unknown-linux-gnu"),
        "macos" => format!("{arch}-apple-darwin"),
        "windows" => format!("{arch}-pc-windows-msvc"),
        _ => format!("{arch}-unknown-{os}"),
    }
}
