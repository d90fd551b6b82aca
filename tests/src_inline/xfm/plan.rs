use super::*;

fn request(backend: Backend) -> XfmRequest {
    XfmRequest {
        input: PathBuf::from("func.nii.gz"),
        reference: PathBuf::from("T1.nii.gz"),
        transform: PathBuf::from("func2T1.dof.gz"),
        output: PathBuf::from("out/func_in_T1.nii.gz"),
        backend,
        interp: None,
        tr: None,
    }
}

fn lines(plan: &Plan) -> Vec<String> {
    plan.commands().map(|c| c.to_string()).collect()
}

#[test]
fn mirtk_plan_splits_applies_and_merges() {
    let plan = build_plan(
        &request(Backend::Mirtk),
        &ToolPaths::default(),
        Path::new("work"),
        2,
    )
    .expect("plan");
    assert_eq!(
        lines(&plan),
        vec![
            "FSLOUTPUTTYPE=NIFTI_GZ fslsplit func.nii.gz work/vol -t",
            "mirtk transform-image work/vol0000.nii.gz work/xfm_vol0000.nii.gz -dofin func2T1.dof.gz -target T1.nii.gz -interp Linear",
            "mirtk transform-image work/vol0001.nii.gz work/xfm_vol0001.nii.gz -dofin func2T1.dof.gz -target T1.nii.gz -interp Linear",
            "FSLOUTPUTTYPE=NIFTI_GZ fslmerge -t out/func_in_T1.nii.gz work/xfm_vol0000.nii.gz work/xfm_vol0001.nii.gz",
        ]
    );
}

#[test]
fn fsl_backend_uses_premat_for_affine() {
    let mut req = request(Backend::Fsl);
    req.transform = PathBuf::from("func2T1.mat");
    req.interp = Some("spline".to_string());
    let plan = build_plan(&req, &ToolPaths::default(), Path::new("w"), 1).expect("plan");
    assert_eq!(
        plan.apply[0].to_string(),
        "FSLOUTPUTTYPE=NIFTI_GZ applywarp --in=w/vol0000.nii.gz --ref=T1.nii.gz --out=w/xfm_vol0000.nii.gz --premat=func2T1.mat --interp=spline"
    );
}

#[test]
fn fsl_backend_uses_warp_for_fields() {
    let mut req = request(Backend::Fsl);
    req.transform = PathBuf::from("warp.nii.gz");
    let plan = build_plan(&req, &ToolPaths::default(), Path::new("w"), 1).expect("plan");
    let line = plan.apply[0].to_string();
    assert!(line.contains("--warp=warp.nii.gz"));
    assert!(line.ends_with("--interp=trilinear"));
}

#[test]
fn merge_with_repetition_time() {
    let mut req = request(Backend::Mirtk);
    req.tr = Some(2.5);
    let plan = build_plan(&req, &ToolPaths::default(), Path::new("w"), 1).expect("plan");
    assert_eq!(
        plan.merge.to_string(),
        "FSLOUTPUTTYPE=NIFTI_GZ fslmerge -tr out/func_in_T1.nii.gz w/xfm_vol0000.nii.gz 2.5"
    );
}

#[test]
fn configured_tool_paths_are_used() {
    let tools = ToolPaths {
        mirtk: "/opt/mirtk/bin/mirtk".to_string(),
        ..ToolPaths::default()
    };
    let plan = build_plan(&request(Backend::Mirtk), &tools, Path::new("w"), 1).expect("plan");
    assert_eq!(plan.apply[0].program, "/opt/mirtk/bin/mirtk");
}

#[test]
fn zero_volumes_is_an_error() {
    let err = build_plan(
        &request(Backend::Mirtk),
        &ToolPaths::default(),
        Path::new("w"),
        0,
    )
    .err()
    .expect("error");
    assert!(matches!(err, XfmError::VolumeCount(_)));
}

#[test]
fn parses_volume_count() {
    assert_eq!(parse_volume_count(" 180\n").expect("count"), 180);
    assert!(parse_volume_count("0").is_err());
    assert!(parse_volume_count("abc").is_err());
}
