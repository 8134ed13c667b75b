use std::env;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use keyfleur::{
    INCOMPLETE_HAIKU, MAX_BATCH, Mode, Theme, classify, classify_as, generate, generate_batch,
    generate_with,
};

#[derive(Debug, Clone)]
struct GenOpts {
    mode: Mode,
    theme: Theme,
    count: usize,
    seed: Option<u64>,
}

impl Default for GenOpts {
    fn default() -> Self {
        Self {
            mode: Mode::Haiku,
            theme: Theme::Haiku,
            count: 1,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
struct ClassifyOpts {
    mode: Option<Mode>,
    json: bool,
}

fn mode_names() -> String {
    Mode::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn theme_names() -> String {
    Theme::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    eprintln!(
        "keyfleur - poetic key generator CLI\n\n\
Usage:\n  keyfleur gen [--mode <m>] [--theme <t>] [--count <n>] [--seed <u64>]\n  keyfleur classify <key> [--mode <m>] [--json]\n  keyfleur modes\n  keyfleur themes\n  keyfleur healthcheck [--theme <t>] [--seed <u64>] [--json]\n  keyfleur bench [--mode <m>] [--theme <t>] [--count <n>]\n  keyfleur selftest\n\n\
Modes:  {}\nThemes: {}\n",
        mode_names(),
        theme_names()
    );
}

fn parse_mode_value(v: &str) -> Result<Mode, String> {
    Mode::parse(v).ok_or_else(|| format!("invalid mode '{}' (expected one of: {})", v, mode_names()))
}

fn parse_theme_value(v: &str) -> Result<Theme, String> {
    Theme::parse(v)
        .ok_or_else(|| format!("invalid theme '{}' (expected one of: {})", v, theme_names()))
}

fn parse_gen_flags(args: &[String]) -> Result<GenOpts, String> {
    let mut opts = GenOpts::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --mode".to_string());
                }
                opts.mode = parse_mode_value(&args[i + 1])?;
                i += 2;
            }
            "--theme" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --theme".to_string());
                }
                opts.theme = parse_theme_value(&args[i + 1])?;
                i += 2;
            }
            "--count" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --count".to_string());
                }
                opts.count = args[i + 1]
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --count".to_string())?;
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --seed".to_string());
                }
                let seed = args[i + 1]
                    .parse::<u64>()
                    .map_err(|_| "invalid integer for --seed".to_string())?;
                opts.seed = Some(seed);
                i += 2;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    Ok(opts)
}

fn parse_classify_flags(args: &[String]) -> Result<ClassifyOpts, String> {
    let mut opts = ClassifyOpts {
        mode: None,
        json: false,
    };
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --mode".to_string());
                }
                opts.mode = Some(parse_mode_value(&args[i + 1])?);
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    Ok(opts)
}

fn run_gen(args: &[String]) -> Result<(), String> {
    let opts = parse_gen_flags(args)?;

    if opts.count < 1 || opts.count > MAX_BATCH {
        return Err(format!("--count must be between 1 and {MAX_BATCH}"));
    }

    match opts.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..opts.count {
                println!("{}", generate_with(opts.mode, opts.theme, &mut rng));
                io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
        None => {
            let keys =
                generate_batch(opts.mode, opts.theme, opts.count).map_err(|e| e.to_string())?;
            for key in keys {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn run_classify(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("classify requires a key".to_string());
    }

    let key = args[0].clone();
    let opts = parse_classify_flags(&args[1..])?;

    let result = match opts.mode {
        Some(mode) => classify_as(&key, mode),
        None => classify(&key),
    };

    if opts.json {
        println!(
            "{}",
            serde_json::to_string(&result).map_err(|e| e.to_string())?
        );
    } else {
        println!("valid={}", if result.valid { "true" } else { "false" });
        if let Some(mode) = result.mode {
            println!("mode={}", mode.as_str());
        }
        if let Some(reason) = &result.reason {
            println!("reason={reason}");
        }
        if let Some(parts) = &result.parts {
            println!("parts={}", parts.join("|"));
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err("invalid key".to_string())
    }
}

fn run_modes() -> Result<(), String> {
    for mode in Mode::ALL {
        println!("{}", mode.as_str());
    }
    Ok(())
}

fn run_themes() -> Result<(), String> {
    for theme in Theme::ALL {
        println!("{}", theme.as_str());
    }
    Ok(())
}

// The sentinel (bare, or embedded by rune) is a degenerate-but-valid output.
fn is_sentinel(key: &str) -> bool {
    key == INCOMPLETE_HAIKU || key.starts_with("Incomplete-haiku_")
}

#[derive(Debug, Clone)]
struct HealthOpts {
    theme: Theme,
    seed: Option<u64>,
    json: bool,
}

fn parse_health_flags(args: &[String]) -> Result<HealthOpts, String> {
    let mut opts = HealthOpts {
        theme: Theme::Haiku,
        seed: None,
        json: false,
    };
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--theme" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --theme".to_string());
                }
                opts.theme = parse_theme_value(&args[i + 1])?;
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --seed".to_string());
                }
                let seed = args[i + 1]
                    .parse::<u64>()
                    .map_err(|_| "invalid integer for --seed".to_string())?;
                opts.seed = Some(seed);
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }

    Ok(opts)
}

fn healthcheck_samples<R: Rng>(theme: Theme, rng: &mut R) -> Vec<(Mode, String, bool)> {
    Mode::ALL
        .iter()
        .map(|&mode| {
            let sample = generate_with(mode, theme, rng);
            let ok = classify_as(&sample, mode).valid || is_sentinel(&sample);
            (mode, sample, ok)
        })
        .collect()
}

fn run_healthcheck(args: &[String]) -> Result<(), String> {
    let opts = parse_health_flags(args)?;

    let samples = match opts.seed {
        Some(seed) => healthcheck_samples(opts.theme, &mut StdRng::seed_from_u64(seed)),
        None => healthcheck_samples(opts.theme, &mut rand::rng()),
    };
    let all_ok = samples.iter().all(|(_, _, ok)| *ok);

    if opts.json {
        let mut modes = serde_json::Map::new();
        for (mode, sample, ok) in &samples {
            modes.insert(
                mode.as_str().to_string(),
                json!({ "ok": ok, "sample": sample }),
            );
        }
        let payload = json!({
            "ok": all_ok,
            "theme": opts.theme.as_str(),
            "modes": modes,
        });
        println!(
            "{}",
            serde_json::to_string(&payload).map_err(|e| e.to_string())?
        );
    } else {
        for (mode, sample, ok) in &samples {
            println!(
                "ok={} mode={} sample={}",
                if *ok { "true" } else { "false" },
                mode.as_str(),
                sample
            );
        }
    }

    if all_ok {
        Ok(())
    } else {
        Err("healthcheck failed".to_string())
    }
}

fn run_bench(args: &[String]) -> Result<(), String> {
    let mut opts = parse_gen_flags(args)?;
    if opts.count == 1 {
        opts.count = 100_000;
    }

    let start = Instant::now();
    for _ in 0..opts.count {
        let _ = generate(opts.mode, opts.theme);
    }
    let secs = start.elapsed().as_secs_f64().max(1e-9);
    let kps = opts.count as f64 / secs;

    let payload = json!({
        "mode": opts.mode.as_str(),
        "theme": opts.theme.as_str(),
        "n": opts.count,
        "seconds": secs,
        "keys_per_sec": kps,
    });
    println!(
        "{}",
        serde_json::to_string(&payload).map_err(|e| e.to_string())?
    );
    Ok(())
}

fn run_selftest() -> Result<(), String> {
    for theme in Theme::ALL {
        for mode in Mode::ALL {
            let key = generate(mode, theme);
            if is_sentinel(&key) {
                continue;
            }
            if !classify_as(&key, mode).valid {
                return Err(format!(
                    "selftest failed: {} key {:?} (theme {}) does not match its own pattern",
                    mode.as_str(),
                    key,
                    theme.as_str()
                ));
            }
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_help();
        process::exit(2);
    }

    if args[0] == "-h" || args[0] == "--help" || args[0] == "help" {
        print_help();
        return;
    }

    let cmd = args[0].as_str();
    let rest = &args[1..];

    let res = match cmd {
        "gen" => run_gen(rest),
        "classify" => run_classify(rest),
        "modes" => run_modes(),
        "themes" => run_themes(),
        "healthcheck" => run_healthcheck(rest),
        "bench" => run_bench(rest),
        "selftest" => run_selftest(),
        _ => Err(format!("unknown command: {}", cmd)),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
