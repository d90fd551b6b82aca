use super::*;
use clap::Parser;
use std::fs;
use tempfile::tempdir;

#[test]
fn design_parses_original_flags() {
    let cli = Cli::parse_from([
        "fsl-design",
        "design",
        "-i",
        "participants.tsv",
        "-o",
        "grp1",
        "--rm-list",
        "sub-01,sub-02",
        "--ret-cols",
        "1,2",
        "--demean",
        "1",
        "--keep-nan",
        "--sep",
        "tab",
    ]);
    match cli.command {
        Command::Design(args) => {
            assert_eq!(args.rm_list, "sub-01,sub-02");
            assert_eq!(args.ret_cols, "1,2");
            assert!(args.keep_nan);
            assert_eq!(args.sep.map(|s| s.byte()), Some(b'\t'));
            let req = design::build_request(args).expect("request");
            assert_eq!(req.remove, vec!["sub-01", "sub-02"]);
            assert_eq!(req.columns, vec![1, 2]);
            assert_eq!(req.demean, vec![1]);
            assert!(!req.drop_missing);
        }
        _ => panic!("expected design command"),
    }
}

#[test]
fn design_defaults() {
    let cli = Cli::parse_from(["fsl-design", "design", "--in", "a.csv", "--out", "p"]);
    match cli.command {
        Command::Design(args) => {
            let req = design::build_request(args).expect("request");
            assert!(req.drop_missing);
            assert!(req.retain.is_empty());
            assert_eq!(req.format.sep.byte(), b' ');
            assert_eq!(req.format.precision, 3);
            assert!(!req.write_summary);
        }
        _ => panic!("expected design command"),
    }
}

#[test]
fn design_reads_config_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("c.toml");
    fs::write(&config, "[design]\nsep = \",\"\nprecision = 2\nsummary = true\n")
        .expect("write file");
    let cli = Cli::parse_from([
        "fsl-design",
        "design",
        "-i",
        "a.csv",
        "-o",
        "p",
        "--precision",
        "4",
        "--config",
        config.to_str().expect("utf8 path"),
    ]);
    match cli.command {
        Command::Design(args) => {
            let req = design::build_request(args).expect("request");
            assert_eq!(req.format.sep.byte(), b',');
            assert_eq!(req.format.precision, 4);
            assert!(req.write_summary);
        }
        _ => panic!("expected design command"),
    }
}

#[test]
fn invalid_separator_is_rejected() {
    let res = Cli::try_parse_from(["fsl-design", "design", "-i", "a", "-o", "b", "--sep", "::"]);
    assert!(res.is_err());
}

#[test]
fn apply_xfm_backend_default_is_mirtk() {
    let cli = Cli::parse_from([
        "fsl-design",
        "apply-xfm",
        "--in",
        "func.nii.gz",
        "--ref",
        "T1.nii.gz",
        "--xfm",
        "a.dof.gz",
        "--out",
        "o.nii.gz",
        "--dry-run",
    ]);
    match cli.command {
        Command::ApplyXfm(args) => {
            assert_eq!(args.backend, apply_xfm::BackendArg::Mirtk);
            assert!(args.dry_run);
        }
        _ => panic!("expected apply-xfm command"),
    }
}

#[test]
fn apply_xfm_fsl_backend_parses() {
    let cli = Cli::parse_from([
        "fsl-design",
        "apply-xfm",
        "--in",
        "f",
        "--ref",
        "r",
        "--xfm",
        "x.mat",
        "--out",
        "o",
        "--backend",
        "fsl",
    ]);
    match cli.command {
        Command::ApplyXfm(args) => assert_eq!(args.backend, apply_xfm::BackendArg::Fsl),
        _ => panic!("expected apply-xfm command"),
    }
}
