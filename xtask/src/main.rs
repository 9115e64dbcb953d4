// Sua Trua site - task runner (cargo xtask pattern)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BINARY: &str = "suatrua-site";
const PACKAGE: &str = "suatrua-site";

fn main() -> Result<()> {
    let sh = Shell::new()?;
    let args: Vec<_> = std::env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("build") => {
            let release = args.iter().any(|a| a == "--release");
            build(&sh, release)
        }
        Some("test") => test(&sh),
        Some("format") => {
            let check = args.iter().any(|a| a == "--check");
            format(&sh, check)
        }
        Some("clippy") => clippy(&sh),
        Some("run") => run(&sh, &args[1..]),
        Some("export") => export(&sh, &args[1..]),
        Some("clean") => clean(&sh),
        Some("ci") => ci(&sh),
        Some("dist") => dist(&sh),
        _ => {
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("Sua Trua site - Tasks:");
    println!();
    println!("Usage: cargo xtask <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  build [--release]   Build the site server");
    println!("  test                Run all tests");
    println!("  format [--check]    Format code (check mode doesn't modify)");
    println!("  clippy              Run clippy checks");
    println!("  run [ARGS...]       Build and run the server");
    println!("  export [--out DIR]  Export every page as JSON (default: build/site)");
    println!("  clean               Clean build artifacts");
    println!("  ci                  Run all CI checks (format + clippy + build + test)");
    println!("  dist                Create distribution package (tar.gz)");
    println!();
    println!("Examples:");
    println!("  cargo xtask build --release");
    println!("  cargo xtask run -- serve");
    println!("  cargo xtask export --out build/site");
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building {}{}...", PACKAGE, if release { " (release)" } else { "" });

    let _dir = sh.push_dir(project_root());
    if release {
        cmd!(sh, "cargo build --release -p {PACKAGE}")
            .run()
            .context("Failed to build in release mode")?;
        create_distribution(sh)?;
        println!("📦 Distribution layout: build/dist/");
    } else {
        cmd!(sh, "cargo build -p {PACKAGE}").run().context("Failed to build")?;
    }

    println!("✅ Build complete");
    Ok(())
}

/// Lay out bin/, conf/ and logs/ under build/dist
fn create_distribution(sh: &Shell) -> Result<()> {
    let project = project_root();
    let dist_dir = project.join("build/dist");

    cmd!(sh, "mkdir -p {dist_dir}/bin {dist_dir}/conf {dist_dir}/logs").run()?;

    let binary_src = release_binary(&project);
    let binary_dst = dist_dir.join("bin").join(BINARY);
    cmd!(sh, "cp {binary_src} {binary_dst}").run()?;

    let config_src = project.join("conf/config.toml");
    let config_dst = dist_dir.join("conf/config.toml");
    if config_src.exists() {
        cmd!(sh, "cp {config_src} {config_dst}").run()?;
    } else {
        write_default_config(&config_dst)?;
    }

    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    let content = r#"[server]
host = "0.0.0.0"
port = 3000

[logging]
level = "info,suatrua_site=info,tower_http=info"
file = "logs/suatrua-site.log"

[site]
base_url = "https://homeserviceshcm.com"
name = "Home Services HCM"

[assets]
enabled = true
max_age = "1d"

[export]
out_dir = "build/site"
"#;

    std::fs::write(path, content).context("Failed to create config file")?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 Running tests...");

    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo test --workspace").run().context("Tests failed")?;

    println!("✅ All tests passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    if check {
        cmd!(sh, "cargo fmt --all -- --check")
            .run()
            .context("Rust code is not formatted")?;
        println!("✅ Rust code is properly formatted");
    } else {
        cmd!(sh, "cargo fmt --all").run().context("Failed to format Rust code")?;
        println!("✅ Rust code formatted");
    }

    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    cmd!(sh, "cargo clippy --workspace --all-targets -- --deny warnings --allow clippy::uninlined-format-args")
        .run()
        .context("Clippy checks failed")?;

    Ok(())
}

fn run(sh: &Shell, args: &[String]) -> Result<()> {
    println!("🚀 Running {}...", PACKAGE);

    let _dir = sh.push_dir(project_root());
    let args = args.iter().skip_while(|a| a.as_str() == "--");
    cmd!(sh, "cargo run -p {PACKAGE} -- {args...}")
        .run()
        .context("Failed to run application")?;

    Ok(())
}

/// Export every page through the binary's `export` subcommand
fn export(sh: &Shell, args: &[String]) -> Result<()> {
    let out = match args.iter().position(|a| a == "--out") {
        Some(i) => args.get(i + 1).context("--out requires a directory")?.clone(),
        None => "build/site".to_string(),
    };

    println!("📄 Exporting pages to {}...", out);

    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo run --release -p {PACKAGE} -- export --out {out}")
        .run()
        .context("Export failed")?;

    println!("✅ Export complete");
    Ok(())
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 Cleaning build artifacts...");

    let project = project_root();
    let _dir = sh.push_dir(&project);
    cmd!(sh, "cargo clean").run()?;

    let build_dir = project.join("build");
    if build_dir.exists() {
        cmd!(sh, "rm -rf {build_dir}").run()?;
    }

    println!("✅ Clean complete!");
    Ok(())
}

/// Run all CI checks (format + clippy + build + test)
fn ci(sh: &Shell) -> Result<()> {
    println!("🔄 Running CI pipeline...");

    println!("📝 [1/4] Checking code format...");
    format(sh, true)?;

    println!("🔍 [2/4] Running clippy checks...");
    clippy(sh)?;

    println!("🔨 [3/4] Building project...");
    build(sh, true)?;

    println!("🧪 [4/4] Running tests...");
    test(sh)?;

    println!("🎉 CI pipeline completed successfully!");
    Ok(())
}

/// Create distribution package (tar.gz)
fn dist(sh: &Shell) -> Result<()> {
    build(sh, true)?;

    let dist_dir = project_root().join("build/dist");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let package_name = format!("{}-{}.tar.gz", PACKAGE, timestamp);
    let package_path = dist_dir.join(&package_name);

    println!("📋 Creating tarball: {}...", package_name);

    let _dir = sh.push_dir(&dist_dir);
    cmd!(sh, "tar czf {package_name} bin conf logs")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created!");
    println!("   Location: {}", package_path.display());
    println!("   Size: {} KB", std::fs::metadata(&package_path)?.len() / 1024);

    Ok(())
}

fn release_binary(project: &Path) -> PathBuf {
    project.join("target/release").join(BINARY)
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
