//! Command-line and config-file resolution tests.

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use crate::{Cli, DEFAULT_SEED, resolve_config};

    fn match_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("arena").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_seed_without_file() {
        let cfg = resolve_config(&cli(&[])).unwrap();
        assert_eq!(cfg.sim.seed, DEFAULT_SEED);
    }

    #[test]
    fn file_seed_is_used() {
        let file = match_file(r#"{ "sim": { "seed": 7, "total_ticks": 120 } }"#);
        let path = file.path().to_str().unwrap();
        let cfg = resolve_config(&cli(&["--config", path])).unwrap();
        assert_eq!(cfg.sim.seed, 7);
        assert_eq!(cfg.sim.total_ticks, 120);
    }

    #[test]
    fn flags_override_file() {
        let file = match_file(r#"{ "sim": { "seed": 7, "total_ticks": 120 } }"#);
        let path = file.path().to_str().unwrap();
        let cfg = resolve_config(&cli(&["--config", path, "--seed", "99", "--ticks", "5"])).unwrap();
        assert_eq!(cfg.sim.seed, 99);
        assert_eq!(cfg.sim.total_ticks, 5);
    }

    #[test]
    fn unreadable_file_errors() {
        let result = resolve_config(&cli(&["--config", "/nonexistent/match.json"]));
        assert!(result.is_err());
    }
}
